//! HSLA color value type
//!
//! Provides [`HslaColor`], the unit produced by the label hash. Components
//! are stored as integer percentages (hue in degrees) so equal inputs
//! compare equal without float noise.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A color in hue/saturation/lightness/alpha space
///
/// Hue is in degrees `[0, 359]`; saturation, lightness, and alpha are
/// percentages `[0, 100]`. Immutable and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslaColor {
    /// Hue in degrees
    pub hue: u16,
    /// Saturation percentage
    pub saturation: u8,
    /// Lightness percentage
    pub lightness: u8,
    /// Alpha percentage
    pub alpha: u8,
}

impl HslaColor {
    /// Create a new color value
    #[inline]
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8, alpha: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Fully opaque color
    #[inline]
    #[must_use]
    pub const fn opaque(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self::new(hue, saturation, lightness, 100)
    }

    /// Render as a CSS color function
    ///
    /// Opaque colors render as `hsl(...)`, everything else as `hsla(...)`
    /// with the alpha percentage.
    #[must_use]
    pub fn css(&self) -> String {
        if self.alpha == 100 {
            format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
        } else {
            format!(
                "hsla({}, {}%, {}%, {}%)",
                self.hue, self.saturation, self.lightness, self.alpha
            )
        }
    }
}

impl Display for HslaColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opaque_renders_hsl() {
        let color = HslaColor::opaque(262, 50, 50);
        assert_eq!(color.css(), "hsl(262, 50%, 50%)");
    }

    #[test]
    fn translucent_renders_hsla() {
        let color = HslaColor::new(10, 80, 25, 60);
        assert_eq!(color.css(), "hsla(10, 80%, 25%, 60%)");
    }

    #[test]
    fn display_matches_css() {
        let color = HslaColor::opaque(120, 50, 85);
        assert_eq!(color.to_string(), color.css());
    }

    #[test]
    fn serde_round_trip() {
        let color = HslaColor::opaque(42, 80, 25);
        let json = serde_json::to_string(&color).unwrap();
        let decoded: HslaColor = serde_json::from_str(&json).unwrap();
        assert_eq!(color, decoded);
    }
}
