//! Linear RGBA colors used for clears and fades

use serde::{Deserialize, Serialize};

/// RGBA color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Opaque white, the neutral fill used for reflection targets
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// The classic scene background (100, 149, 237)
    pub const CORNFLOWER_BLUE: Self = Self::rgb(100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0);

    /// Create an opaque color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from float components including alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit components
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Components as an `[r, g, b, a]` array
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cornflower_blue_matches_rgba8() {
        assert_eq!(Color::from_rgba8(100, 149, 237, 255), Color::CORNFLOWER_BLUE);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let faded = Color::BLACK.with_alpha(0.5);
        assert_eq!(faded.to_array(), [0.0, 0.0, 0.0, 0.5]);
    }
}
