//! Color arithmetic and the named status palette.
//!
//! Colors are `palette::Srgb<f32>` (0.0-1.0 range per channel). The helpers
//! here are pure componentwise functions; none of them clamp, matching the
//! unclamped arithmetic the animation math relies on. Clamping happens once,
//! at the hardware sink boundary.

use palette::{Mix, Srgb};

/// Full red.
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
/// Full green.
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
/// Full blue.
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
/// Warm yellow (red with 75% green).
pub const YELLOW: Srgb = Srgb::new(1.0, 0.75, 0.0);
/// Purple (red plus blue).
pub const PURPLE: Srgb = Srgb::new(1.0, 0.0, 1.0);
/// Off.
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Componentwise sum of two colors. Does not clamp.
#[inline]
pub fn add(a: Srgb, b: Srgb) -> Srgb {
    Srgb::new(a.red + b.red, a.green + b.green, a.blue + b.blue)
}

/// Componentwise difference of two colors. Does not clamp.
#[inline]
pub fn sub(a: Srgb, b: Srgb) -> Srgb {
    Srgb::new(a.red - b.red, a.green - b.green, a.blue - b.blue)
}

/// Scales every channel by a scalar. Does not clamp.
#[inline]
pub fn scale(c: Srgb, k: f32) -> Srgb {
    Srgb::new(c.red * k, c.green * k, c.blue * k)
}

/// Linear interpolation between two colors.
///
/// `blend(a, b, 0.0)` is `a`, `blend(a, b, 1.0)` is `b`, affine in `t`.
#[inline]
pub fn blend(a: Srgb, b: Srgb, t: f32) -> Srgb {
    a.mix(b, t)
}
