//! Landing page - welcome screen
//! Pulsing circles behind a title and the Login/Register buttons

use iced::mouse::Interaction;
use iced::time::Instant;
use iced::widget::{Space, button, column, container, mouse_area, stack, text};
use iced::{Alignment, Color, Element, Fill, Font};

use crate::app::{LandingPageState, Message};
use crate::features::landing::{self, ButtonRole};
use crate::i18n::Locale;
use crate::platform::theme::{BOLD_WEIGHT, SEMIBOLD_WEIGHT};
use crate::ui::primitives::{CircleField, PaintedCircle, circle_field};
use crate::ui::theme;

/// Build the landing page for the current frame
pub fn view<'a>(
    page: &'a LandingPageState,
    locale: Locale,
    now: Instant,
    motion_enabled: bool,
) -> Element<'a, Message> {
    let painted = page
        .circles
        .iter()
        .enumerate()
        .map(|(index, circle)| PaintedCircle {
            circle: *circle,
            opacity: page.opacity(index, now, motion_enabled),
        })
        .collect();
    let decorations = circle_field::view(CircleField::new(painted, theme::CIRCLE_FILL));

    let content = landing::content();
    let title = text(locale.get(content.title)).size(32).font(Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let foreground = content.buttons.into_iter().fold(
        column![title, Space::new().height(40)].align_x(Alignment::Center),
        |col, role| col.push(action_button(role, page.button_hover.progress(&role), locale)),
    );

    let screen = stack![
        decorations,
        container(foreground).center(Fill),
    ];

    container(screen)
        .width(Fill)
        .height(Fill)
        .clip(true)
        .style(theme::screen)
        .into()
}

/// Resting background of a button
fn button_fill(role: ButtonRole) -> Color {
    match role {
        ButtonRole::Login => theme::ACCENT_BLUE,
        ButtonRole::Register => theme::ACCENT_GREEN,
    }
}

fn on_press(role: ButtonRole) -> Message {
    match role {
        ButtonRole::Login => Message::LoginPressed,
        ButtonRole::Register => Message::RegisterPressed,
    }
}

/// 200px pill button with hover feedback
fn action_button<'a>(role: ButtonRole, hover: f32, locale: Locale) -> Element<'a, Message> {
    let label = text(locale.get(role.label()))
        .size(16)
        .color(theme::BUTTON_TEXT)
        .font(Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        });

    let pill = button(container(label).center_x(Fill))
        .width(200)
        .padding([12, 30])
        .style(theme::pill_button(button_fill(role), hover))
        .on_press(on_press(role));

    let hoverable = mouse_area(pill)
        .on_enter(Message::ButtonHovered(Some(role)))
        .on_exit(Message::ButtonHovered(None))
        .interaction(Interaction::Pointer);

    container(hoverable).padding([10, 0]).into()
}
