//! HSLA colour samples and their RGBA packing for the renderer.

use std::fmt;

use crate::random::RandomSource;

/// Hue jitter span in degrees (±5).
const HUE_SPREAD: f32 = 10.0;
/// Saturation and lightness jitter span in percent (±10).
const TONE_SPREAD: f32 = 20.0;

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Color {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Color {
    #[must_use]
    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Sample a per-cell variation of this base colour.
    ///
    /// Fully transparent colours are returned unchanged without consuming
    /// any randomness.
    #[must_use]
    pub fn jittered(self, rng: &mut impl RandomSource) -> Self {
        if self.is_transparent() {
            return self;
        }
        let h = (self.h + rng.jitter(HUE_SPREAD)).clamp(0.0, 360.0);
        let s = (self.s + rng.jitter(TONE_SPREAD)).clamp(0.0, 100.0);
        let l = (self.l + rng.jitter(TONE_SPREAD)).clamp(0.0, 100.0);
        Self { h, s, l, a: self.a }
    }

    /// Convert to straight-alpha RGBA8.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = (self.h % 360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [
            channel(r),
            channel(g),
            channel(b),
            (self.a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}
