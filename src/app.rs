//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, LandingPageState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings_path = crate::features::Settings::file_path();
        let settings = settings_path
            .as_deref()
            .map(crate::features::Settings::load_or_default)
            .unwrap_or_default();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        for action in crate::features::Action::all() {
            tracing::debug!(
                "Shortcut {:?}: {}",
                action,
                settings.keybindings.display_for_action(action)
            );
        }

        // 2. Initialize sub-states
        let core = CoreState::new(settings, settings_path, locale);
        let ui = UiState::new();
        let mut app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: app.core.settings.window.size(),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "highlight".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Mount the landing page and schedule its delayed starts
        let mount = app.mount_landing();

        (app, Task::batch([open_window.map(Message::WindowOpened), mount]))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for animation frames, keyboard shortcuts and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Animation frames while circles pulse or buttons fade
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.landing.is_some(),
            self.ui.has_active_animations(self.core.motion_enabled()),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard shortcuts
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, keyboard_sub, close_request_sub, resize_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(page_mounted: bool, has_animations: bool) -> bool {
        page_mounted && has_animations
    }
}
