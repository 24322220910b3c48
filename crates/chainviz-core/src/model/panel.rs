//! Panel and chip elements.

use serde::{Deserialize, Serialize};

use crate::{
    color::Accent,
    model::{Element, Tooltip},
};

/// An accent card with an optional title and nested children.
///
/// Panels group related content under a shared accent: a layer in a
/// stack diagram, one side of a comparison, a consensus variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    accent: Accent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
}

impl Panel {
    /// Creates an untitled panel with the given accent.
    pub fn new(accent: Accent) -> Self {
        Self {
            accent,
            title: None,
            children: Vec::new(),
            tooltip: None,
        }
    }

    /// Sets the panel title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several child elements.
    pub fn extend(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attaches hover content.
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Gets the accent tag.
    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Gets the title, if set.
    pub fn panel_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Gets the child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub(crate) fn tooltip_ref(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

/// A small labeled pill, with an optional caption line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chip {
    accent: Accent,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
}

impl Chip {
    /// Creates a chip with the given accent and text.
    pub fn new(accent: Accent, text: impl Into<String>) -> Self {
        Self {
            accent,
            text: text.into(),
            caption: None,
            tooltip: None,
        }
    }

    /// Sets a caption line under the chip text.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Attaches hover content.
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Gets the accent tag.
    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Gets the chip text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the caption, if set.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub(crate) fn tooltip_ref(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Label;

    use super::*;

    #[test]
    fn test_panel_collects_children_in_order() {
        let panel = Panel::new(Accent::Purple)
            .title("Layer 2")
            .child(Chip::new(Accent::Purple, "Osmosis"))
            .child(Chip::new(Accent::Purple, "dYdX"))
            .child(Label::muted("All connected via IBC"));

        assert_eq!(panel.panel_title(), Some("Layer 2"));
        assert_eq!(panel.children().len(), 3);
        assert!(matches!(panel.children()[0], Element::Chip(_)));
        assert!(matches!(panel.children()[2], Element::Label(_)));
    }

    #[test]
    fn test_chip_caption() {
        let chip = Chip::new(Accent::Rose, "Moonbeam").caption("EVM");
        assert_eq!(chip.caption_text(), Some("EVM"));
    }
}
