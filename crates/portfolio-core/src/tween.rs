//! Time-based interpolation advanced by Δt.

/// Easing curves. Only the one the focus transition needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Power2InOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    Finished,
}

/// Eased progress over a fixed duration. The interpolated values live with
/// the caller; this only tracks time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds (negative steps are ignored).
    pub fn advance(&mut self, dt: f32) -> TweenStatus {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.status()
    }

    pub fn status(&self) -> TweenStatus {
        if self.elapsed >= self.duration {
            TweenStatus::Finished
        } else {
            TweenStatus::Running
        }
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply(self.elapsed / self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power2_in_out_shape() {
        let e = Easing::Power2InOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.5), 0.5);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.25) - 0.125).abs() < 1e-6);
        assert!((e.apply(0.75) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn finishes_exactly_at_duration() {
        let mut tw = Tween::new(1.0, Easing::Power2InOut);
        assert_eq!(tw.advance(0.6), TweenStatus::Running);
        assert_eq!(tw.advance(0.6), TweenStatus::Finished);
        assert_eq!(tw.progress(), 1.0);
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let tw = Tween::new(0.0, Easing::Linear);
        assert_eq!(tw.status(), TweenStatus::Finished);
        assert_eq!(tw.progress(), 1.0);
    }
}
