//! Animation helpers for the landing screen
//!
//! Hover feedback is driven by `iced_anim` transitions. The background pulse
//! lives in `crate::features::pulse` because it repeats forever.

mod hover;

pub use hover::HoverAnimations;
