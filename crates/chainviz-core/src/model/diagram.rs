//! The titled diagram container.

use serde::{Deserialize, Serialize};

use crate::{color::Accent, model::Element};

/// A complete diagram: a title, an optional container accent, and an
/// ordered body of elements.
///
/// Every catalog entry produces exactly one `Diagram`. The container
/// maps onto the host's titled frame primitive; the body holds the
/// actual content tree.
///
/// # Examples
///
/// ```
/// use chainviz_core::color::Accent;
/// use chainviz_core::model::{Chip, Diagram};
///
/// let diagram = Diagram::new("IBC Protocol Components")
///     .accent(Accent::Green)
///     .push(Chip::new(Accent::Green, "Light Clients"));
/// assert_eq!(diagram.title(), "IBC Protocol Components");
/// assert!(!diagram.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent: Option<Accent>,
    children: Vec<Element>,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            accent: None,
            children: Vec::new(),
        }
    }

    /// Sets the container accent.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    /// Appends a body element.
    pub fn push(mut self, element: impl Into<Element>) -> Self {
        self.children.push(element.into());
        self
    }

    /// Gets the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the container accent, if set.
    pub fn container_accent(&self) -> Option<Accent> {
        self.accent
    }

    /// Gets the body elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns true if the diagram has no body elements.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Visits every element in the body, depth-first.
    pub fn visit(&self, f: &mut impl FnMut(&Element)) {
        for child in &self.children {
            child.visit(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Label;

    use super::*;

    #[test]
    fn test_new_diagram_is_empty() {
        let diagram = Diagram::new("Bitcoin Block Structure");
        assert!(diagram.is_empty());
        assert_eq!(diagram.container_accent(), None);
    }

    #[test]
    fn test_push_preserves_order() {
        let diagram = Diagram::new("T")
            .push(Label::new("first"))
            .push(Label::new("second"));

        assert_eq!(diagram.children().len(), 2);
    }
}
