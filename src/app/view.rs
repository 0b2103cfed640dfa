// src/app/view.rs
//! Application view rendering

use iced::Element;
use iced::time::Instant;
use iced::widget::Space;

use super::App;
use super::message::Message;
use crate::ui::pages;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        match &self.ui.landing {
            Some(page) => pages::landing::view(
                page,
                self.core.locale,
                Instant::now(),
                self.core.motion_enabled(),
            ),
            None => Space::new().width(0).height(0).into(),
        }
    }
}
