//! Platform abstraction layer
//!
//! - `theme.rs` - Platform-specific theme constants

pub mod theme;
