//! Hover tooltip content.
//!
//! A [`Tooltip`] carries the explanatory detail behind a visual
//! element: a heading, running paragraphs, bullet points, an optional
//! code line, and an optional muted note. The host's tooltip primitive
//! reveals it on hover; exporters emit it alongside the trigger
//! element.

use serde::{Deserialize, Serialize};

use crate::color::Accent;

/// Structured hover content for a diagram element.
///
/// # Examples
///
/// ```
/// use chainviz_core::color::Accent;
/// use chainviz_core::model::Tooltip;
///
/// let tooltip = Tooltip::new("Transaction Fee")
///     .accent(Accent::Rose)
///     .paragraph("Fee = Sum(inputs) - Sum(outputs)")
///     .note("The miner collects the fee for including the transaction.");
/// assert_eq!(tooltip.heading(), "Transaction Fee");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent: Option<Accent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl Tooltip {
    /// Creates a tooltip with the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            accent: None,
            paragraphs: Vec::new(),
            bullets: Vec::new(),
            code: None,
            note: None,
        }
    }

    /// Sets the heading accent.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    /// Appends a running paragraph.
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Appends a bullet point.
    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.bullets.push(text.into());
        self
    }

    /// Sets a code line, rendered in a monospace block.
    pub fn code(mut self, text: impl Into<String>) -> Self {
        self.code = Some(text.into());
        self
    }

    /// Sets a trailing muted note.
    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.note = Some(text.into());
        self
    }

    /// Gets the heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Gets the heading accent, if set.
    pub fn heading_accent(&self) -> Option<Accent> {
        self.accent
    }

    /// Gets the running paragraphs.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Gets the bullet points.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Gets the code line, if set.
    pub fn code_line(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Gets the trailing note, if set.
    pub fn trailing_note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order_of_bullets() {
        let tooltip = Tooltip::new("EVM")
            .bullet("Stack: max 1024 elements")
            .bullet("Memory: byte-addressable")
            .bullet("Storage: persistent key-value");

        assert_eq!(tooltip.bullets().len(), 3);
        assert!(tooltip.bullets()[0].starts_with("Stack"));
        assert!(tooltip.bullets()[2].starts_with("Storage"));
    }

    #[test]
    fn test_empty_sections_serialize_away() {
        let json = serde_json::to_string(&Tooltip::new("Mempool")).unwrap();
        assert!(!json.contains("bullets"));
        assert!(!json.contains("code"));
    }
}
