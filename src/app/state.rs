// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;
use std::time::Duration;

use iced::task;
use iced::time::Instant;

use crate::features::Settings;
use crate::features::landing::{self, ButtonRole, CIRCLE_COUNT, CircleDescriptor, Viewport};
use crate::features::pulse::{Pulse, PulseState};
use crate::i18n::Locale;
use crate::ui::animation::HoverAnimations;

/// Main application state
pub struct App {
    /// Settings, locale and window bookkeeping
    pub core: CoreState,
    /// Mounted screens and their animations
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    /// Where settings are written back; `None` if no config dir exists
    pub settings_path: Option<PathBuf>,
    pub locale: Locale,
    /// Current window size
    pub viewport: Viewport,
    pub window_id: Option<iced::window::Id>,
    /// Bumped on every landing page mount
    pub mount_generation: u64,
}

impl CoreState {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>, locale: Locale) -> Self {
        let viewport = Viewport::from(settings.window.size());
        Self {
            settings,
            settings_path,
            locale,
            viewport,
            window_id: None,
            mount_generation: 0,
        }
    }

    /// Frame-driven pulse allowed
    pub fn motion_enabled(&self) -> bool {
        !self.settings.display.reduce_motion
    }
}

/// UI state
#[derive(Default)]
pub struct UiState {
    /// `None` while the landing page is not mounted
    pub landing: Option<LandingPageState>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any frame-driven animation is in progress
    pub fn has_active_animations(&self, motion_enabled: bool) -> bool {
        self.landing
            .as_ref()
            .is_some_and(|page| page.needs_frames(motion_enabled))
    }
}

/// Landing page state for one mount
pub struct LandingPageState {
    generation: u64,
    mounted: bool,
    pub circles: [CircleDescriptor; CIRCLE_COUNT],
    pulses: [PulseState; CIRCLE_COUNT],
    pulse: Pulse,
    /// Delayed-start timers; aborted when the page is dropped
    timers: Vec<task::Handle>,
    pub button_hover: HoverAnimations<ButtonRole>,
}

impl LandingPageState {
    /// Mount the page for `viewport`.
    ///
    /// Circles without a delay start immediately. The rest are returned as
    /// `(index, delay)` pairs for the caller to schedule.
    pub fn mount(
        viewport: Viewport,
        generation: u64,
        now: Instant,
    ) -> (Self, Vec<(usize, Duration)>) {
        let circles = landing::circles(viewport);
        let mut pulses = [PulseState::Pending; CIRCLE_COUNT];
        let mut pending = Vec::new();

        for (index, circle) in circles.iter().enumerate() {
            if circle.delay.is_zero() {
                pulses[index].start(now);
            } else {
                pending.push((index, circle.delay));
            }
        }

        let page = Self {
            generation,
            mounted: true,
            circles,
            pulses,
            pulse: Pulse::default(),
            timers: Vec::new(),
            button_hover: HoverAnimations::new(),
        };
        (page, pending)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Keep a timer handle alive for as long as this mount
    pub fn attach_timer(&mut self, handle: task::Handle) {
        if self.mounted {
            self.timers.push(handle);
        } else {
            handle.abort();
        }
    }

    /// A delayed start fired. Returns true if the circle started.
    pub fn circle_due(&mut self, generation: u64, index: usize, now: Instant) -> bool {
        if !self.mounted || generation != self.generation {
            return false;
        }
        self.pulses
            .get_mut(index)
            .is_some_and(|pulse| pulse.start(now))
    }

    /// Cancel every timer and pulse. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for handle in self.timers.drain(..) {
            handle.abort();
        }
        for pulse in &mut self.pulses {
            pulse.cancel();
        }
    }

    /// Recompute circle geometry, keeping delays and pulse phases
    pub fn resize(&mut self, viewport: Viewport) {
        self.circles = landing::circles(viewport);
    }

    /// Opacity of circle `index` at `now`
    pub fn opacity(&self, index: usize, now: Instant, motion_enabled: bool) -> f32 {
        let Some(pulse) = self.pulses.get(index) else {
            return 0.0;
        };
        if !motion_enabled {
            return if pulse.is_running() { 1.0 } else { 0.0 };
        }
        pulse.opacity(&self.pulse, now)
    }

    #[allow(dead_code)]
    pub fn is_started(&self, index: usize) -> bool {
        self.pulses.get(index).is_some_and(PulseState::is_running)
    }

    /// True while any circle is waiting or pulsing
    pub fn is_animating(&self) -> bool {
        self.mounted
            && self
                .pulses
                .iter()
                .any(|p| p.is_pending() || p.is_running())
    }

    /// Whether the frame subscription is needed for this page
    pub fn needs_frames(&self, motion_enabled: bool) -> bool {
        (motion_enabled && self.is_animating()) || self.button_hover.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.button_hover.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn mounted(now: Instant) -> (LandingPageState, Vec<(usize, Duration)>) {
        LandingPageState::mount(Viewport::new(430.0, 860.0), 1, now)
    }

    /// Deliver every due timer at its deadline, as the runtime would
    fn fire_due(page: &mut LandingPageState, pending: &[(usize, Duration)], mount: Instant, at: Instant) {
        for &(index, delay) in pending {
            if mount + delay <= at {
                page.circle_due(1, index, mount + delay);
            }
        }
    }

    #[test]
    fn zero_delay_circle_starts_on_mount() {
        let now = Instant::now();
        let (page, pending) = mounted(now);
        assert!(page.is_started(0));
        assert_eq!(
            pending,
            vec![(1, ms(500)), (2, ms(1000)), (3, ms(1500))]
        );
    }

    #[test]
    fn circles_start_after_their_delays() {
        let mount = Instant::now();
        let (mut page, pending) = mounted(mount);

        for (elapsed, started) in [
            (0, [true, false, false, false]),
            (499, [true, false, false, false]),
            (500, [true, true, false, false]),
            (1200, [true, true, true, false]),
            (1500, [true, true, true, true]),
        ] {
            let at = mount + ms(elapsed);
            fire_due(&mut page, &pending, mount, at);
            for (index, expected) in started.iter().enumerate() {
                assert_eq!(page.is_started(index), *expected, "circle {} at {}ms", index, elapsed);
                if !expected {
                    assert_eq!(page.opacity(index, at, true), 0.0);
                }
            }
        }
    }

    #[test]
    fn opacity_is_bounded() {
        let mount = Instant::now();
        let (mut page, pending) = mounted(mount);
        fire_due(&mut page, &pending, mount, mount + ms(1500));

        for t in (0..12_000).step_by(53) {
            for index in 0..CIRCLE_COUNT {
                let v = page.opacity(index, mount + ms(t), true);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn unmount_before_delay_prevents_start() {
        let mount = Instant::now();
        let (mut page, pending) = mounted(mount);
        page.unmount();
        page.unmount();

        fire_due(&mut page, &pending, mount, mount + ms(5000));
        for index in 0..CIRCLE_COUNT {
            assert!(!page.is_started(index));
            assert_eq!(page.opacity(index, mount + ms(5000), true), 0.0);
        }
        assert!(!page.is_animating());
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mount = Instant::now();
        let (mut page, _) = mounted(mount);
        assert!(!page.circle_due(0, 1, mount + ms(500)));
        assert!(!page.circle_due(2, 1, mount + ms(500)));
        assert!(!page.is_started(1));
        assert!(page.circle_due(1, 1, mount + ms(500)));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let (mut page, _) = mounted(Instant::now());
        assert!(!page.circle_due(1, 99, Instant::now()));
        assert_eq!(page.opacity(99, Instant::now(), true), 0.0);
    }

    #[test]
    fn reduced_motion_shows_started_circles_solid() {
        let mount = Instant::now();
        let (page, _) = mounted(mount);
        assert_eq!(page.opacity(0, mount, false), 1.0);
        assert_eq!(page.opacity(1, mount, false), 0.0);
        assert!(!page.needs_frames(false));
        assert!(page.needs_frames(true));
    }

    #[test]
    fn resize_keeps_pulse_phase() {
        let mount = Instant::now();
        let (mut page, _) = mounted(mount);
        let before = page.opacity(0, mount + ms(700), true);
        page.resize(Viewport::new(1000.0, 500.0));
        assert_eq!(page.circles[1].x, 500.0);
        assert_eq!(page.opacity(0, mount + ms(700), true), before);
    }
}
