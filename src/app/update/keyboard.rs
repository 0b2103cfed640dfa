// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;
use crate::i18n::Locale;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => {
                self.execute_action(*action);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Apply a keybinding action and persist the change
    fn execute_action(&mut self, action: Action) {
        let prefs = &mut self.core.settings.display;
        match action {
            Action::ToggleDarkMode => {
                prefs.dark_mode = !prefs.dark_mode;
                let dark = prefs.dark_mode;
                tracing::info!("Dark mode: {}", dark);
            }
            Action::CycleLanguage => {
                let language = self.core.locale.language.next();
                prefs.language = language.code().to_string();
                self.core.locale = Locale::new(language);
                tracing::info!("Language: {}", language.code());
            }
            Action::ToggleReduceMotion => {
                prefs.reduce_motion = !prefs.reduce_motion;
                let reduced = prefs.reduce_motion;
                tracing::info!("Reduced motion: {}", reduced);
            }
        }
        self.persist_settings();
    }
}
