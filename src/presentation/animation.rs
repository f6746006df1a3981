//! Indicator rotation and height animation
//!
//! A [`Transition`] describes where a row is heading. A [`RowAnimation`] plays
//! it out over wall-clock time. Retargeting a running animation starts the new
//! one from the current visual angle, so a rapid second toggle reverses from
//! wherever the chevron happens to be.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

/// Rotation of an expanded row's chevron, in radians
///
/// Just under a half turn, so the collapse rotation runs back along the same
/// path instead of continuing forward.
pub const EXPANDED_ANGLE: f64 = PI * 0.999;

/// Default transition length, matched to the list's row reflow
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Description of an animated change between row states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    /// Indicator angle at the start, radians
    pub from_angle: f64,
    /// Indicator angle at the end, radians
    pub to_angle: f64,
}

impl Transition {
    pub fn expanding(duration: Duration) -> Self {
        Self {
            duration,
            from_angle: 0.0,
            to_angle: EXPANDED_ANGLE,
        }
    }

    pub fn collapsing(duration: Duration) -> Self {
        Self {
            duration,
            from_angle: EXPANDED_ANGLE,
            to_angle: 0.0,
        }
    }
}

/// A running (or settled) indicator animation for one row
#[derive(Debug, Clone, Copy)]
pub struct RowAnimation {
    from_angle: f64,
    to_angle: f64,
    started: Instant,
    duration: Duration,
}

impl RowAnimation {
    /// Start playing `transition` from its own starting angle
    pub fn start(transition: &Transition, now: Instant) -> Self {
        Self {
            from_angle: transition.from_angle,
            to_angle: transition.to_angle,
            started: now,
            duration: transition.duration,
        }
    }

    /// Redirect toward `transition`'s end angle, beginning at the current angle
    pub fn retarget(&mut self, transition: &Transition, now: Instant) {
        self.from_angle = self.angle_at(now);
        self.to_angle = transition.to_angle;
        self.started = now;
        self.duration = transition.duration;
    }

    /// Linear progress in `[0, 1]`
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Indicator angle at `now`, eased
    pub fn angle_at(&self, now: Instant) -> f64 {
        let t = ease_in_out(self.progress_at(now));
        self.from_angle + (self.to_angle - self.from_angle) * t
    }

    /// How far open the row looks, `0.0` collapsed to `1.0` expanded
    pub fn openness_at(&self, now: Instant) -> f64 {
        (self.angle_at(now) / EXPANDED_ANGLE).clamp(0.0, 1.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress_at(now) < 1.0
    }
}

/// Standard ease-in-out curve, cubic-bezier(0.42, 0, 0.58, 1)
pub fn ease_in_out(fraction: f64) -> f64 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;

    // x(t) is monotonic for these control points, so bisection converges
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut t = fraction;
    for _ in 0..32 {
        let x = curve(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-7 {
            break;
        }
        if x > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }

    curve(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_expanded_angle_is_just_under_half_turn() {
        let degrees = EXPANDED_ANGLE.to_degrees();
        assert!(degrees < 180.0);
        assert!((degrees - 179.82).abs() < 0.01);
    }

    #[test]
    fn test_ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-4);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_animation_runs_from_start_to_end() {
        let t0 = Instant::now();
        let anim = RowAnimation::start(&Transition::expanding(DEFAULT_DURATION), t0);

        assert!(anim.angle_at(t0).abs() < EPS);
        assert!(anim.is_running(t0 + Duration::from_millis(150)));

        let end = t0 + DEFAULT_DURATION;
        assert!(!anim.is_running(end));
        assert!((anim.angle_at(end) - EXPANDED_ANGLE).abs() < EPS);
        assert!((anim.openness_at(end) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_angle_is_monotonic_while_expanding() {
        let t0 = Instant::now();
        let anim = RowAnimation::start(&Transition::expanding(DEFAULT_DURATION), t0);

        let mut last = -1.0;
        for ms in (0..=300).step_by(10) {
            let angle = anim.angle_at(t0 + Duration::from_millis(ms));
            assert!(angle >= last);
            last = angle;
        }
    }

    #[test]
    fn test_retarget_starts_from_current_angle() {
        let t0 = Instant::now();
        let mut anim = RowAnimation::start(&Transition::expanding(DEFAULT_DURATION), t0);

        let mid = t0 + Duration::from_millis(150);
        let angle_mid = anim.angle_at(mid);
        assert!(angle_mid > 0.0 && angle_mid < EXPANDED_ANGLE);

        anim.retarget(&Transition::collapsing(DEFAULT_DURATION), mid);
        assert!((anim.angle_at(mid) - angle_mid).abs() < EPS);

        let done = mid + DEFAULT_DURATION;
        assert!(anim.angle_at(done).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let t0 = Instant::now();
        let anim = RowAnimation::start(&Transition::expanding(Duration::ZERO), t0);
        assert!(!anim.is_running(t0));
        assert!((anim.angle_at(t0) - EXPANDED_ANGLE).abs() < EPS);
    }
}
