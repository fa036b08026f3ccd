//! Transparency, blur amount and blur mode of the reflective surface

use crate::core::config::SurfaceConfig;

/// Number of blur kernels the surface effect implements
const BLUR_MODE_COUNT: i32 = 2;

/// Index of the blur kernel the surface effect samples the reflection with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlurMode(i32);

impl BlurMode {
    /// Blur mode from an index, wrapped into range
    pub const fn new(index: i32) -> Self {
        Self(index.rem_euclid(BLUR_MODE_COUNT))
    }

    /// The following mode, wrapping back to the first
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Index pushed to the effect
    pub const fn index(self) -> i32 {
        self.0
    }
}

/// Tunable compositing parameters
///
/// Every operation is total: transparency stays within [0, 1], the blur amount never
/// drops below 0 and has no upper bound, and the mode cycles with period 2.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceShaderState {
    transparency: f32,
    blur_amount: f32,
    blur_mode: BlurMode,
    transparency_step: f32,
    blur_step: f32,
}

impl SurfaceShaderState {
    /// State seeded from the surface configuration
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            transparency: config.initial_transparency.clamp(0.0, 1.0),
            blur_amount: config.initial_blur_amount.max(0.0),
            blur_mode: BlurMode::new(config.initial_blur_mode),
            transparency_step: config.transparency_step,
            blur_step: config.blur_step,
        }
    }

    /// Raise transparency by one step, capped at 1
    pub fn increase_transparency(&mut self) -> f32 {
        self.transparency = (self.transparency + self.transparency_step).min(1.0);
        self.transparency
    }

    /// Lower transparency by one step, floored at 0
    pub fn decrease_transparency(&mut self) -> f32 {
        self.transparency = (self.transparency - self.transparency_step).max(0.0);
        self.transparency
    }

    /// Raise the blur amount by one step
    pub fn increase_blur(&mut self) -> f32 {
        self.blur_amount += self.blur_step;
        self.blur_amount
    }

    /// Lower the blur amount by one step, floored at 0
    pub fn decrease_blur(&mut self) -> f32 {
        self.blur_amount = (self.blur_amount - self.blur_step).max(0.0);
        self.blur_amount
    }

    /// Switch to the next blur mode
    pub fn cycle_blur_mode(&mut self) -> BlurMode {
        self.blur_mode = self.blur_mode.next();
        self.blur_mode
    }

    /// Current transparency
    pub const fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Current blur amount
    pub const fn blur_amount(&self) -> f32 {
        self.blur_amount
    }

    /// Current blur mode
    pub const fn blur_mode(&self) -> BlurMode {
        self.blur_mode
    }
}

impl Default for SurfaceShaderState {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_defaults() {
        let state = SurfaceShaderState::default();

        assert_relative_eq!(state.transparency(), 0.8);
        assert_relative_eq!(state.blur_amount(), 0.001);
        assert_eq!(state.blur_mode(), BlurMode::new(0));
    }

    #[test]
    fn test_transparency_is_capped_and_floored() {
        let mut state = SurfaceShaderState::default();

        state.increase_transparency();
        assert_relative_eq!(state.increase_transparency(), 1.0);
        assert_relative_eq!(state.increase_transparency(), 1.0);

        for _ in 0..15 {
            state.decrease_transparency();
        }
        assert_relative_eq!(state.transparency(), 0.0);
    }

    #[test]
    fn test_every_transparency_sequence_stays_in_range() {
        const LENGTH: u32 = 10;

        for pattern in 0..(1u32 << LENGTH) {
            let mut state = SurfaceShaderState::default();
            let mut expected = 0.8_f32;
            let mut increases = 0;
            let mut decreases = 0;

            for bit in 0..LENGTH {
                let value = if pattern & (1 << bit) == 0 {
                    increases += 1;
                    expected = (expected + 0.1).min(1.0);
                    state.increase_transparency()
                } else {
                    decreases += 1;
                    expected = (expected - 0.1).max(0.0);
                    state.decrease_transparency()
                };

                assert!((0.0..=1.0).contains(&value));
                assert_abs_diff_eq!(value, expected, epsilon = 1e-5);
            }

            // Sequences that never hit a bound follow the plain step formula
            if pattern == 0 || pattern == (1 << LENGTH) - 1 {
                let naive = (0.8 + 0.1 * increases as f32 - 0.1 * decreases as f32).clamp(0.0, 1.0);
                assert_abs_diff_eq!(state.transparency(), naive, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_blur_never_goes_negative() {
        let mut state = SurfaceShaderState::default();

        assert_relative_eq!(state.decrease_blur(), 0.0);
        assert_relative_eq!(state.decrease_blur(), 0.0);
        assert_abs_diff_eq!(state.increase_blur(), 0.001, epsilon = 1e-7);
    }

    #[test]
    fn test_every_blur_sequence_saturates_at_zero() {
        const LENGTH: u32 = 12;

        for pattern in 0..(1u32 << LENGTH) {
            let mut state = SurfaceShaderState::default();
            let mut expected = 0.001_f32;

            for bit in 0..LENGTH {
                let value = if pattern & (1 << bit) == 0 {
                    expected += 0.001;
                    state.increase_blur()
                } else {
                    expected = (expected - 0.001).max(0.0);
                    state.decrease_blur()
                };

                assert!(value >= 0.0);
                assert_abs_diff_eq!(value, expected, epsilon = 1e-5);
            }
        }

        // All increases: no ceiling, so the plain step formula holds
        let mut state = SurfaceShaderState::default();
        for _ in 0..LENGTH {
            state.increase_blur();
        }
        assert_abs_diff_eq!(state.blur_amount(), 0.001 * (LENGTH + 1) as f32, epsilon = 1e-5);
    }

    #[test]
    fn test_blur_has_no_ceiling() {
        let mut state = SurfaceShaderState::default();

        for _ in 0..50 {
            state.increase_blur();
        }
        assert_abs_diff_eq!(state.blur_amount(), 0.051, epsilon = 1e-5);

        for _ in 0..10_000 {
            state.increase_blur();
        }
        assert!(state.blur_amount() > 10.0);
    }

    #[test]
    fn test_blur_mode_cycle_has_period_two() {
        let mut state = SurfaceShaderState::default();
        let original = state.blur_mode();

        assert_eq!(state.cycle_blur_mode().index(), 1);
        assert_eq!(state.cycle_blur_mode(), original);
    }

    #[test]
    fn test_blur_mode_wraps_out_of_range_indices() {
        assert_eq!(BlurMode::new(3).index(), 1);
        assert_eq!(BlurMode::new(-1).index(), 1);
    }
}
