//! Landing screen model
//!
//! Geometry of the decorative circles and the foreground content, kept free
//! of widget types so the layout rules can be checked without a renderer.

use std::time::Duration;

use crate::i18n::Key;

/// Window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<iced::Size> for Viewport {
    fn from(size: iced::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// One decorative circle
///
/// `x`/`y` locate the top-left corner of the bounding square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDescriptor {
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub delay: Duration,
}

impl CircleDescriptor {
    pub fn radius(&self) -> f32 {
        (self.size / 2.0).max(0.0)
    }

    pub fn center(&self) -> iced::Point {
        iced::Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Fixed slot: diameter, viewport fractions and start delay in ms
struct CircleSlot {
    size: f32,
    fx: f32,
    fy: f32,
    delay_ms: u64,
}

const CIRCLE_SLOTS: [CircleSlot; 4] = [
    CircleSlot {
        size: 100.0,
        fx: 0.1,
        fy: 0.1,
        delay_ms: 0,
    },
    CircleSlot {
        size: 150.0,
        fx: 0.5,
        fy: 0.3,
        delay_ms: 500,
    },
    CircleSlot {
        size: 80.0,
        fx: 0.8,
        fy: 0.6,
        delay_ms: 1000,
    },
    CircleSlot {
        size: 120.0,
        fx: 0.2,
        fy: 0.7,
        delay_ms: 1500,
    },
];

/// Number of decorative circles on the landing screen
pub const CIRCLE_COUNT: usize = CIRCLE_SLOTS.len();

/// Build the circle descriptors for a viewport
pub fn circles(viewport: Viewport) -> [CircleDescriptor; CIRCLE_COUNT] {
    CIRCLE_SLOTS.map(|slot| CircleDescriptor {
        size: slot.size,
        x: viewport.width * slot.fx,
        y: viewport.height * slot.fy,
        delay: Duration::from_millis(slot.delay_ms),
    })
}

/// Foreground buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Login,
    Register,
}

impl ButtonRole {
    pub fn label(self) -> Key {
        match self {
            ButtonRole::Login => Key::Login,
            ButtonRole::Register => Key::Register,
        }
    }
}

/// Foreground content, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub title: Key,
    pub buttons: Vec<ButtonRole>,
}

/// The landing screen foreground: one title followed by two buttons
pub fn content() -> Content {
    Content {
        title: Key::WelcomeTitle,
        buttons: vec![ButtonRole::Login, ButtonRole::Register],
    }
}
