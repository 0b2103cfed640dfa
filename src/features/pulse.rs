//! Opacity pulse for the decorative circles
//!
//! A pulse is an infinite, reversing tween between 0 and 1. Forward legs
//! follow the easing curve, reverse legs mirror it (`1 - ease(p)`).

use std::time::{Duration, Instant};

/// Length of a single leg (0 -> 1 or 1 -> 0)
pub const PULSE_LEG: Duration = Duration::from_millis(2000);

/// Timing curve for a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    #[allow(dead_code)]
    Linear,
    /// cubic-bezier(0.42, 0, 1, 1), slow start with a steady finish
    Ease,
}

impl Easing {
    /// Map elapsed fraction `t` (clamped to 0..=1) to interpolation fraction
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
        }
    }
}

/// Evaluate a unit cubic bezier at horizontal position `x`
///
/// Solves `bx(s) = x` with Newton-Raphson, falling back to bisection when the
/// slope flattens out, then returns `by(s)`.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    let curve = |s: f32, p1: f32, p2: f32| -> f32 {
        let ms = 1.0 - s;
        3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
    };
    let slope = |s: f32, p1: f32, p2: f32| -> f32 {
        let ms = 1.0 - s;
        3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = curve(s, x1, x2) - x;
        if err.abs() < 1e-5 {
            return curve(s, y1, y2).clamp(0.0, 1.0);
        }
        let d = slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let bx = curve(s, x1, x2);
        if (bx - x).abs() < 1e-5 {
            break;
        }
        if bx < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    curve(s, y1, y2).clamp(0.0, 1.0)
}

/// Repeating ping-pong tween description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub leg: Duration,
    pub easing: Easing,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            leg: PULSE_LEG,
            easing: Easing::Ease,
        }
    }
}

impl Pulse {
    /// Opacity after `elapsed` time since the pulse started
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let leg_ms = self.leg.as_millis();
        if leg_ms == 0 {
            return 1.0;
        }
        let elapsed_ms = elapsed.as_millis();
        let leg_index = elapsed_ms / leg_ms;
        let progress = (elapsed_ms % leg_ms) as f32 / leg_ms as f32;
        let eased = self.easing.apply(progress);

        // Exact boundaries land on the start of the next leg, so an even leg
        // begins at 0 and an odd leg begins at 1.
        if leg_index % 2 == 0 {
            eased
        } else {
            1.0 - eased
        }
    }
}

/// Lifecycle of one circle's pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulseState {
    /// Mounted, waiting for the start delay
    #[default]
    Pending,
    /// Animating since `started`
    Running { started: Instant },
    /// Owner unmounted; never starts again
    Cancelled,
}

impl PulseState {
    /// Begin animating. Returns false if the pulse was not pending.
    pub fn start(&mut self, now: Instant) -> bool {
        match self {
            PulseState::Pending => {
                *self = PulseState::Running { started: now };
                true
            }
            PulseState::Running { .. } | PulseState::Cancelled => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = PulseState::Cancelled;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, PulseState::Running { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PulseState::Pending)
    }

    /// Current opacity in 0..=1
    pub fn opacity(&self, pulse: &Pulse, now: Instant) -> f32 {
        match self {
            PulseState::Running { started } => {
                pulse.value_at(now.saturating_duration_since(*started))
            }
            PulseState::Pending | PulseState::Cancelled => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints() {
        assert_eq!(Easing::Ease.apply(0.0), 0.0);
        assert_eq!(Easing::Ease.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn ease_is_monotonic_and_bounded() {
        let mut prev = 0.0;
        for i in 0..=200 {
            let v = Easing::Ease.apply(i as f32 / 200.0);
            assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
            assert!(v + 1e-4 >= prev, "curve went backwards at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn ease_starts_slowly() {
        // An ease-in curve lags behind linear in the first half
        assert!(Easing::Ease.apply(0.3) < 0.3);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::Ease.apply(-1.0), 0.0);
        assert_eq!(Easing::Ease.apply(2.0), 1.0);
    }

    #[test]
    fn pulse_ping_pongs() {
        let pulse = Pulse::default();
        assert_eq!(pulse.value_at(Duration::ZERO), 0.0);
        assert_eq!(pulse.value_at(Duration::from_millis(2000)), 1.0);
        assert_eq!(pulse.value_at(Duration::from_millis(4000)), 0.0);
        assert_eq!(pulse.value_at(Duration::from_millis(6000)), 1.0);

        let rising = pulse.value_at(Duration::from_millis(1500));
        let falling = pulse.value_at(Duration::from_millis(3500));
        assert!(rising > 0.0 && rising < 1.0);
        assert!((falling - (1.0 - rising)).abs() < 1e-6);
    }

    #[test]
    fn pulse_stays_in_unit_range() {
        let pulse = Pulse::default();
        for ms in (0..20_000).step_by(37) {
            let v = pulse.value_at(Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&v), "opacity {} at {}ms", v, ms);
        }
    }

    #[test]
    fn state_transitions() {
        let now = Instant::now();
        let pulse = Pulse::default();
        let mut state = PulseState::default();
        assert!(state.is_pending());
        assert_eq!(state.opacity(&pulse, now), 0.0);

        assert!(state.start(now));
        assert!(state.is_running());
        assert!(!state.start(now), "second start is a no-op");

        state.cancel();
        assert!(!state.start(now));
        assert_eq!(state.opacity(&pulse, now + Duration::from_millis(2000)), 0.0);
    }
}
