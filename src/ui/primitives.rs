//! Primitive UI elements - atomic building blocks
//!
//! Primitives implement iced's `canvas::Program` trait directly, use generic
//! Message types and must not import from `crate::app`.

pub mod circle_field;

pub use circle_field::{CircleField, PaintedCircle};
