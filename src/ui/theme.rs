//! Theme system for the landing screen
//! Supports both dark and light modes with a shared accent palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x151718);
    pub const TEXT_PRIMARY: Color = color!(0xecedee);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x11181c);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Login button background (same for both modes)
pub const ACCENT_BLUE: Color = color!(0x007aff);

/// Register button background (same for both modes)
pub const ACCENT_GREEN: Color = color!(0x34c759);

/// Decorative circle fill before the pulse opacity is applied
pub const CIRCLE_FILL: Color = Color::from_rgba(100.0 / 255.0, 200.0 / 255.0, 1.0, 0.2);

/// Button label color
pub const BUTTON_TEXT: Color = Color::WHITE;

/// Mix `base` towards white by `amount` (0.0 - 1.0)
pub fn lighten(base: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color {
        r: base.r + (1.0 - base.r) * amount,
        g: base.g + (1.0 - base.g) * amount,
        b: base.b + (1.0 - base.b) * amount,
        a: base.a,
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window themed screen background
pub fn screen(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Pill button filled with `fill`; `hover` (0.0 - 1.0) lightens the fill
pub fn pill_button(fill: Color, hover: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Pressed => lighten(fill, 0.3),
            _ => lighten(fill, hover * 0.15),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: BUTTON_TEXT,
            border: Border {
                radius: 25.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_dark_theme_is_dark() {
        assert!(is_dark_theme(&Theme::Dark));
        assert!(!is_dark_theme(&Theme::Light));
    }

    #[test]
    fn palette_follows_theme() {
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_ne!(text_primary(&Theme::Light), text_primary(&Theme::Dark));
    }

    #[test]
    fn lighten_moves_towards_white() {
        assert_eq!(lighten(ACCENT_BLUE, 0.0), ACCENT_BLUE);
        let white = lighten(ACCENT_BLUE, 1.0);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
        let half = lighten(ACCENT_GREEN, 0.5);
        assert!(half.g > ACCENT_GREEN.g && half.r > ACCENT_GREEN.r);
    }

    #[test]
    fn circle_fill_is_translucent() {
        assert!((CIRCLE_FILL.a - 0.2).abs() < f32::EPSILON);
    }
}
