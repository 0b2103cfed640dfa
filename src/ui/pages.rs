//! Pages module
//! Full-window views

pub mod landing;
