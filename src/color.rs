//! RGBA color support for fading cubes.
//!
//! Cubes spawn with a random fully-opaque color and fade toward
//! [`Rgba::TRANSPARENT`] (transparent black) over their lifespan. The fade is
//! a plain linear interpolation driven by the cube's age.

use rand::rngs::SmallRng;
use rand::Rng;

/// An RGBA color with `f32` components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black - the fade endpoint for every cube.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from hue, saturation and value.
    ///
    /// `h`, `s` and `v` are all in `0.0..=1.0` (hue is normalized, not
    /// degrees).
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let c = v * s;
        let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h * 6.0) as u32 % 6 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(r + m, g + m, b + m, 1.0)
    }

    /// Sample a random opaque color across the full HSV space.
    pub(crate) fn random_hsv(rng: &mut SmallRng) -> Self {
        let h = rng.gen::<f32>();
        let s = rng.gen::<f32>();
        let v = rng.gen::<f32>();
        Self::from_hsv(h, s, v)
    }

    /// Linearly interpolate toward `other` by `t` (not clamped here; callers
    /// clamp the fraction).
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}
