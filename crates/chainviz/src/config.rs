//! Configuration types for diagram export.
//!
//! This module provides configuration structures that control how
//! diagram trees are exported. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Visual options passed through to the exporters.
//!
//! # Example
//!
//! ```
//! # use chainviz::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use chainviz_core::color::Color;

/// Default class prefix for exported HTML fragments.
pub const DEFAULT_CLASS_PREFIX: &str = "cv";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual options for exported diagrams.
///
/// The exporters emit structure, not styling; these options only
/// control what structure is emitted. Fields that are not set fall
/// back to exporter defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagram containers, as a color
    /// string.
    #[serde(default)]
    background_color: Option<String>,

    /// Prefix for the structural class names in HTML output.
    #[serde(default)]
    class_prefix: Option<String>,

    /// Whether tooltip content is emitted alongside trigger elements.
    #[serde(default = "default_tooltips")]
    tooltips: bool,
}

fn default_tooltips() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            class_prefix: None,
            tooltips: true,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the class prefix for HTML output.
    pub fn class_prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or(DEFAULT_CLASS_PREFIX)
    }

    /// Returns whether tooltip content is emitted.
    pub fn tooltips(&self) -> bool {
        self.tooltips
    }

    /// Sets whether tooltip content is emitted.
    pub fn set_tooltips(&mut self, tooltips: bool) {
        self.tooltips = tooltips;
    }

    /// Sets the class prefix for HTML output.
    pub fn set_class_prefix(&mut self, prefix: impl Into<String>) {
        self.class_prefix = Some(prefix.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.style().class_prefix(), "cv");
        assert!(config.style().tooltips());
        assert_eq!(config.style().background_color().unwrap(), None);
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "style": { "background_color": "not-a-color" } }"#,
        )
        .unwrap();
        assert!(config.style().background_color().is_err());
    }

    #[test]
    fn test_partial_style_section_deserializes() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "style": { "tooltips": false } }"#).unwrap();
        assert!(!config.style().tooltips());
        assert_eq!(config.style().class_prefix(), "cv");
    }
}
