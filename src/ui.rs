//! UI module for the landing screen
//!
//! - **Primitives** (`primitives`): canvas programs without app knowledge
//! - **Pages** (`pages`): full-window views bound to app messages

pub mod animation;
pub mod pages;
pub mod primitives;
pub mod theme;
