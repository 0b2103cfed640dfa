// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::landing::Viewport;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(id) => {
                tracing::info!("Main window opened with id: {:?}", id);
                self.core.window_id = Some(*id);
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                let viewport = Viewport::from(*size);
                if viewport != self.core.viewport {
                    self.core.viewport = viewport;
                    if let Some(page) = self.ui.landing.as_mut() {
                        page.resize(viewport);
                    }
                }
                Some(Task::none())
            }

            Message::RequestClose => {
                self.unmount_landing();
                self.core.settings.window.width = self.core.viewport.width;
                self.core.settings.window.height = self.core.viewport.height;
                self.persist_settings();
                tracing::info!("Closing window {:?} and exiting", self.core.window_id);
                Some(iced::exit())
            }

            _ => None,
        }
    }

    /// Save settings, logging instead of failing
    pub(crate) fn persist_settings(&self) {
        let Some(path) = self.core.settings_path.as_deref() else {
            tracing::warn!("Failed to save settings: no config directory");
            return;
        };
        if let Err(e) = self.core.settings.save_to_file(path) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
