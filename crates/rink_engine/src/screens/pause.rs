//! Pause darkening

use crate::foundation::math::utils;

/// Per-frame ramp of the pause darkening
///
/// Rises by one step each frame the screen is covered and falls by one step each
/// frame it is not, staying within [0, 1]. While an overlay window is open the ramp
/// is held at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PauseFade {
    alpha: f32,
    step: f32,
}

impl PauseFade {
    /// Ramp starting at 0
    pub const fn new(step: f32) -> Self {
        Self { alpha: 0.0, step }
    }

    /// Advance one frame
    pub fn update(&mut self, covered: bool, overlay_window_open: bool) -> f32 {
        self.alpha = if overlay_window_open {
            0.0
        } else if covered {
            (self.alpha + self.step).min(1.0)
        } else {
            (self.alpha - self.step).max(0.0)
        };
        self.alpha
    }

    /// Current alpha
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }
}

/// Opacity of the black fade drawn over the screen, if any
///
/// Blends the transition position towards full black by half the pause alpha, so
/// a paused screen ends up darker than one that is merely transitioning.
pub fn fade_alpha(transition_position: f32, pause_alpha: f32) -> Option<f32> {
    (transition_position > 0.0 || pause_alpha > 0.0)
        .then(|| utils::lerp(transition_position, 1.0, pause_alpha / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ramp_is_clamped() {
        let mut fade = PauseFade::new(0.25);

        assert_relative_eq!(fade.update(false, false), 0.0);
        for _ in 0..6 {
            fade.update(true, false);
        }
        assert_relative_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn test_overlay_window_holds_ramp_at_zero() {
        let mut fade = PauseFade::new(0.25);
        fade.update(true, false);
        fade.update(true, false);

        assert_relative_eq!(fade.update(true, true), 0.0);
    }

    #[test]
    fn test_fade_alpha() {
        assert_eq!(fade_alpha(0.0, 0.0), None);
        assert_relative_eq!(fade_alpha(0.4, 0.0).unwrap(), 0.4);
        assert_relative_eq!(fade_alpha(0.0, 1.0).unwrap(), 0.5);
        assert_relative_eq!(fade_alpha(0.5, 1.0).unwrap(), 0.75);
    }
}
