//! Rolling polynomial string hash and hue derivation
//!
//! The hash walks the string's UTF-16 code units with two small prime
//! multipliers. A fixed sentinel unit is appended so single-character
//! inputs still spread across the hue range, and the accumulator is floored
//! back down whenever it would leave JavaScript-safe-integer range, keeping
//! results identical to hosts that compute in 53-bit floats. Injectivity is
//! traded for bounded-width arithmetic; collisions are expected and fine.

use crate::hsla::HslaColor;

/// First prime multiplier
const SEED: u64 = 131;

/// Second prime multiplier, used to floor the accumulator
const SEED2: u64 = 137;

/// Sentinel code unit appended to every input
const SENTINEL: u16 = b'x' as u16;

/// Largest integer exactly representable in a 64-bit float
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Number of distinct hues produced
pub const HUE_RANGE: u64 = 359;

/// Default saturation percentage
pub const DEFAULT_SATURATION: u8 = 50;

/// Default lightness percentage
pub const DEFAULT_LIGHTNESS: u8 = 50;

/// Default alpha percentage
pub const DEFAULT_ALPHA: u8 = 100;

/// Hash a string's UTF-16 code units
///
/// Deterministic; equal input always yields an equal hash. The empty string
/// is valid input and hashes to the sentinel alone.
#[must_use]
pub fn bkdr_hash(text: &str) -> u64 {
    let guard = MAX_SAFE_INTEGER / SEED2;
    let mut hash: u64 = 0;
    for unit in text.encode_utf16().chain(std::iter::once(SENTINEL)) {
        if hash > guard {
            hash /= SEED2;
        }
        hash = hash * SEED + u64::from(unit);
    }
    hash
}

/// Derive a hue in `[0, 358]` from a string
#[inline]
#[must_use]
pub fn hue(text: &str) -> u16 {
    (bkdr_hash(text) % HUE_RANGE) as u16
}

/// Saturation/lightness/alpha parameters applied to a hashed hue
///
/// Equal text and equal parameters always yield an equal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorHasher {
    saturation: u8,
    lightness: u8,
    alpha: u8,
}

impl ColorHasher {
    /// Create a hasher with the default style parameters
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// With saturation percentage
    #[inline]
    #[must_use]
    pub const fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    /// With lightness percentage
    #[inline]
    #[must_use]
    pub const fn with_lightness(mut self, lightness: u8) -> Self {
        self.lightness = lightness;
        self
    }

    /// With alpha percentage
    #[inline]
    #[must_use]
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Color for the given text under these parameters
    #[must_use]
    pub fn color(&self, text: &str) -> HslaColor {
        HslaColor::new(hue(text), self.saturation, self.lightness, self.alpha)
    }
}

impl Default for ColorHasher {
    fn default() -> Self {
        Self::new()
    }
}
