//! Boardtint color hashing
//!
//! Deterministic mapping from arbitrary strings to reproducible colors in a
//! bounded perceptual range.
//!
//! # Core Concepts
//!
//! - [`HslaColor`]: hue/saturation/lightness/alpha color value with a CSS
//!   rendering
//! - [`ColorHasher`]: saturation/lightness/alpha parameters applied to a
//!   hashed hue
//! - [`LabelPalette`]: the hue-correlated foreground/background pair used to
//!   tint one label
//!
//! Equal input text always yields equal colors; there is no randomness and
//! no external state. The hash is not cryptographic — hue collisions across
//! distinct strings are acceptable for a presentation aid.

#![warn(unreachable_pub)]

mod hash;
mod hsla;
mod palette;

pub use hash::{
    bkdr_hash, hue, ColorHasher, DEFAULT_ALPHA, DEFAULT_LIGHTNESS, DEFAULT_SATURATION, HUE_RANGE,
};
pub use hsla::HslaColor;
pub use palette::LabelPalette;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
