//! Exclusive hover animation manager
//!
//! Only one element can be hovered at a time, so only the active element and
//! the one fading out are tracked.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover transition duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Hover `key` exclusively; `None` releases the current element
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // Whatever was active starts fading from its current value
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            // Re-entering the element that is fading out resumes from its value
            let start = if self.fading_key.as_ref() == Some(&new_key) {
                self.fading_key = None;
                *self.fading_anim.value()
            } else {
                0.0
            };
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(start, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Hover progress for `key` in 0.0..=1.0
    pub fn progress(&self, key: &K) -> f32 {
        let value = if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        };
        value.clamp(0.0, 1.0)
    }

    #[allow(dead_code)]
    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Advance both transitions; call on every animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        if self.fading_key.is_some() && !self.fading_anim.is_animating() {
            self.fading_key = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        First,
        Second,
    }

    #[test]
    fn hover_is_exclusive() {
        let mut anims = HoverAnimations::new();
        assert_eq!(anims.progress(&Target::First), 0.0);

        anims.set_hovered(Some(Target::First));
        assert!(anims.is_active(&Target::First));

        anims.set_hovered(Some(Target::Second));
        assert!(anims.is_active(&Target::Second));
        assert!(!anims.is_active(&Target::First));

        anims.set_hovered(None);
        assert!(!anims.is_active(&Target::Second));
    }

    #[test]
    fn progress_stays_in_range() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered(Some(Target::First));
        let start = Instant::now();
        for step in 0..30 {
            anims.tick(start + Duration::from_millis(step * 16));
            let p = anims.progress(&Target::First);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
