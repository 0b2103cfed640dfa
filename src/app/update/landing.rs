// src/app/update/landing.rs
//! Landing page lifecycle and message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::{App, LandingPageState};

impl App {
    /// Handle landing page messages
    pub fn handle_landing(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(now) => {
                if let Some(page) = self.ui.landing.as_mut() {
                    page.tick(*now);
                }
                Some(Task::none())
            }

            Message::CircleDue { generation, index } => {
                let started = self
                    .ui
                    .landing
                    .as_mut()
                    .is_some_and(|page| page.circle_due(*generation, *index, Instant::now()));
                if started {
                    tracing::debug!("Circle {} started pulsing", index);
                } else {
                    tracing::debug!(
                        "Ignoring start for circle {} from stale mount {}",
                        index,
                        generation
                    );
                }
                Some(Task::none())
            }

            Message::LoginPressed => {
                tracing::info!("Login pressed; no action is wired");
                Some(Task::none())
            }

            Message::RegisterPressed => {
                tracing::info!("Register pressed; no action is wired");
                Some(Task::none())
            }

            Message::ButtonHovered(role) => {
                if let Some(page) = self.ui.landing.as_mut() {
                    page.button_hover.set_hovered(*role);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Mount a fresh landing page and schedule its delayed circle starts
    pub fn mount_landing(&mut self) -> Task<Message> {
        // A previous mount must not leak timers into the new one
        self.unmount_landing();

        self.core.mount_generation += 1;
        let generation = self.core.mount_generation;
        let (mut page, pending) =
            LandingPageState::mount(self.core.viewport, generation, Instant::now());

        let timers: Vec<Task<Message>> = pending
            .into_iter()
            .map(|(index, delay)| {
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |_| Message::CircleDue { generation, index },
                )
                .abortable();
                page.attach_timer(handle.abort_on_drop());
                task
            })
            .collect();

        tracing::info!(
            "Mounted landing page (mount {}, {} delayed starts)",
            page.generation(),
            timers.len()
        );
        self.ui.landing = Some(page);
        Task::batch(timers)
    }

    /// Unmount the landing page, cancelling pending starts
    pub fn unmount_landing(&mut self) {
        if let Some(mut page) = self.ui.landing.take() {
            if page.is_mounted() {
                page.unmount();
                tracing::info!("Unmounted landing page (mount {})", page.generation());
            }
        }
    }
}
