//! Decorative circle layer
//!
//! Draws every circle into a single canvas. The canvas frame clips anything
//! that falls outside the window.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Fill, Renderer, Theme, mouse};

use crate::features::landing::CircleDescriptor;

/// A circle together with its opacity for this frame
#[derive(Debug, Clone, Copy)]
pub struct PaintedCircle {
    pub circle: CircleDescriptor,
    pub opacity: f32,
}

/// Canvas program for the decorative layer
#[derive(Debug, Clone)]
pub struct CircleField {
    circles: Vec<PaintedCircle>,
    fill: Color,
}

impl CircleField {
    pub fn new(circles: Vec<PaintedCircle>, fill: Color) -> Self {
        Self { circles, fill }
    }

    /// Fill color for a circle at `opacity`
    pub fn color_for(&self, opacity: f32) -> Color {
        Color {
            a: self.fill.a * opacity.clamp(0.0, 1.0),
            ..self.fill
        }
    }
}

impl<Message> Program<Message> for CircleField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for painted in &self.circles {
            let radius = painted.circle.radius();
            // Degenerate or fully transparent circles are skipped
            if radius <= 0.0 || painted.opacity <= 0.0 {
                continue;
            }
            let path = Path::circle(painted.circle.center(), radius);
            frame.fill(&path, self.color_for(painted.opacity));
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size canvas element for the decorative layer
pub fn view<'a, Message: 'a>(field: CircleField) -> Element<'a, Message> {
    Canvas::new(field).width(Fill).height(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn circle() -> CircleDescriptor {
        CircleDescriptor {
            size: 100.0,
            x: 10.0,
            y: 10.0,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn opacity_scales_fill_alpha() {
        let field = CircleField::new(
            vec![PaintedCircle {
                circle: circle(),
                opacity: 0.5,
            }],
            Color::from_rgba(0.0, 0.0, 1.0, 0.2),
        );
        assert!((field.color_for(0.5).a - 0.1).abs() < 1e-6);
        assert_eq!(field.color_for(0.0).a, 0.0);
        assert!((field.color_for(7.0).a - 0.2).abs() < 1e-6);
    }
}
