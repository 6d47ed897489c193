//! Label palette derivation
//!
//! One label gets two hue-correlated colors: a foreground tuned for
//! legibility and a lighter background. Both come from the same hashed hue,
//! so labels with equal text always render identically.

use crate::hash::ColorHasher;
use crate::hsla::HslaColor;
use serde::{Deserialize, Serialize};

/// Foreground band: high saturation, low lightness
const FOREGROUND: ColorHasher = ColorHasher::new().with_saturation(80).with_lightness(25);

/// Background band: moderate saturation, high lightness
const BACKGROUND: ColorHasher = ColorHasher::new().with_saturation(50).with_lightness(85);

/// The foreground/background color pair for one label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPalette {
    /// Text color
    pub foreground: HslaColor,
    /// Fill color
    pub background: HslaColor,
}

impl LabelPalette {
    /// Derive the palette for a label's display text
    #[must_use]
    pub fn for_label(text: &str) -> Self {
        Self {
            foreground: FOREGROUND.color(text),
            background: BACKGROUND.color(text),
        }
    }
}
