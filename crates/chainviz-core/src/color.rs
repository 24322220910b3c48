//! Color handling for chainviz diagrams
//!
//! This module provides the closed [`Accent`] palette used by every
//! diagram record, and the [`Color`] type which wraps `DynamicColor`
//! from the color crate for config-supplied CSS color strings.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::{Deserialize, Serialize};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Accent colors resolve through this type, and configuration values
/// (such as a background color) parse through [`Color::new`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainviz_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, typically between 0.0 (fully
    ///   transparent) and 1.0 (fully opaque)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// The closed accent palette for diagram records.
///
/// Every record in every catalog dataset tags itself with one of these
/// variants; exporters resolve the variant to a concrete [`Color`].
/// Keeping the palette an enum makes the closure property hold
/// statically rather than by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Amber,
    Rose,
    Gray,
    Teal,
}

impl Accent {
    /// Every palette member, in a fixed order. Useful for exhaustive
    /// checks in tests and for palette legends.
    pub const ALL: [Accent; 7] = [
        Accent::Blue,
        Accent::Purple,
        Accent::Green,
        Accent::Amber,
        Accent::Rose,
        Accent::Gray,
        Accent::Teal,
    ];

    /// The lowercase tag name, as it appears in serialized trees and
    /// exporter class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Green => "green",
            Accent::Amber => "amber",
            Accent::Rose => "rose",
            Accent::Gray => "gray",
            Accent::Teal => "teal",
        }
    }

    fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Purple => "#a855f7",
            Accent::Green => "#22c55e",
            Accent::Amber => "#f59e0b",
            Accent::Rose => "#f43f5e",
            Accent::Gray => "#6b7280",
            Accent::Teal => "#14b8a6",
        }
    }

    /// Resolves the accent to its concrete [`Color`].
    pub fn color(self) -> Color {
        Color::new(self.hex()).expect("palette hex values are valid CSS colors")
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Accent::Blue),
            "purple" => Ok(Accent::Purple),
            "green" => Ok(Accent::Green),
            "amber" => Ok(Accent::Amber),
            "rose" => Ok(Accent::Rose),
            "gray" => Ok(Accent::Gray),
            "teal" => Ok(Accent::Teal),
            other => Err(format!("unknown accent `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_every_accent_resolves_to_a_color() {
        for accent in Accent::ALL {
            let display = accent.color().to_string();
            assert!(!display.is_empty());
        }
    }

    #[test]
    fn test_accent_display_parse_round_trip() {
        for accent in Accent::ALL {
            let parsed: Accent = accent.as_str().parse().unwrap();
            assert_eq!(parsed, accent);
        }
    }

    #[test]
    fn test_accent_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Accent::Amber).unwrap();
        assert_eq!(json, "\"amber\"");

        let parsed: Accent = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(parsed, Accent::Teal);
    }

    proptest! {
        #[test]
        fn parse_never_panics(s in "\\PC*") {
            let _ = s.parse::<Accent>();
        }

        #[test]
        fn parse_accepts_only_palette_tags(s in "[a-z]{1,12}") {
            let known = Accent::ALL.iter().any(|a| a.as_str() == s);
            prop_assert_eq!(s.parse::<Accent>().is_ok(), known);
        }
    }
}
