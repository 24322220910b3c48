//! The visual element model for course diagrams.
//!
//! Diagram builder functions in the catalog produce trees of these
//! types; exporters walk the trees and emit markup. The model is the
//! narrow contract between content and presentation: it records what an
//! element is (a flow node, an arrow, a titled container) and which
//! accent it carries, never how the host page styles it.
//!
//! # Overview
//!
//! - [`Diagram`] - The titled container, exactly one per catalog entry
//! - [`FlowNode`] - A labeled box with a visual [`NodeKind`]
//! - [`Arrow`] - A directional connector
//! - [`Panel`] - An accent card with optional title and nested children
//! - [`Chip`] - A small labeled pill
//! - [`Label`] - Free text with a [`Tone`]
//! - [`FactList`] - Key/value rows
//! - [`Group`] - Row, column, or grid arrangement of children
//! - [`Tooltip`] - Hover content attached to an element
//!
//! Every type is plain data: `Clone`, `PartialEq`, and serde-serializable,
//! so whole trees can be compared for equality and exported as JSON.

mod arrow;
mod diagram;
mod group;
mod node;
mod panel;
mod text;
mod tooltip;

pub use arrow::{Arrow, ArrowDirection};
pub use diagram::Diagram;
pub use group::{Group, GroupLayout};
pub use node::{FlowNode, NodeKind};
pub use panel::{Chip, Panel};
pub use text::{Fact, FactList, Label, Tone};
pub use tooltip::Tooltip;

use serde::{Deserialize, Serialize};

/// One element of a diagram tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Node(FlowNode),
    Arrow(Arrow),
    Panel(Panel),
    Chip(Chip),
    Label(Label),
    Facts(FactList),
    Group(Group),
}

impl Element {
    /// Visits this element and every nested element, depth-first.
    ///
    /// Tooltips are not elements and are not visited; they hang off the
    /// element that triggers them.
    pub fn visit(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        match self {
            Element::Panel(panel) => {
                for child in panel.children() {
                    child.visit(f);
                }
            }
            Element::Group(group) => {
                for child in group.children() {
                    child.visit(f);
                }
            }
            Element::Node(_)
            | Element::Arrow(_)
            | Element::Chip(_)
            | Element::Label(_)
            | Element::Facts(_) => {}
        }
    }

    /// The tooltip attached to this element, if any.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            Element::Node(node) => node.tooltip_ref(),
            Element::Panel(panel) => panel.tooltip_ref(),
            Element::Chip(chip) => chip.tooltip_ref(),
            Element::Facts(facts) => facts.tooltip_ref(),
            Element::Arrow(_) | Element::Label(_) | Element::Group(_) => None,
        }
    }
}

impl From<FlowNode> for Element {
    fn from(node: FlowNode) -> Self {
        Element::Node(node)
    }
}

impl From<Arrow> for Element {
    fn from(arrow: Arrow) -> Self {
        Element::Arrow(arrow)
    }
}

impl From<Panel> for Element {
    fn from(panel: Panel) -> Self {
        Element::Panel(panel)
    }
}

impl From<Chip> for Element {
    fn from(chip: Chip) -> Self {
        Element::Chip(chip)
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

impl From<FactList> for Element {
    fn from(facts: FactList) -> Self {
        Element::Facts(facts)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Element::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Accent;

    use super::*;

    fn sample_diagram() -> Diagram {
        Diagram::new("Sample")
            .push(Group::row(vec![
                FlowNode::new(NodeKind::Input, Accent::Blue, "TX")
                    .line("calldata")
                    .tooltip(Tooltip::new("Transaction").paragraph("Incoming transaction"))
                    .into(),
                Arrow::new(ArrowDirection::Right).into(),
                FlowNode::new(NodeKind::Output, Accent::Green, "State").into(),
            ]))
            .push(Label::muted("footnote"))
    }

    #[test]
    fn test_visit_reaches_nested_elements() {
        let diagram = sample_diagram();

        let mut count = 0;
        diagram.visit(&mut |_| count += 1);

        // One group, three children inside it, one trailing label.
        assert_eq!(count, 5);
    }

    #[test]
    fn test_tooltip_accessor() {
        let diagram = sample_diagram();

        let mut tooltips = 0;
        diagram.visit(&mut |element| {
            if element.tooltip().is_some() {
                tooltips += 1;
            }
        });

        assert_eq!(tooltips, 1);
    }

    #[test]
    fn test_trees_compare_equal_when_rebuilt() {
        assert_eq!(sample_diagram(), sample_diagram());
    }

    #[test]
    fn test_serialized_tree_round_trips() {
        let diagram = sample_diagram();
        let json = serde_json::to_string(&diagram).unwrap();
        let parsed: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diagram);
    }

    #[test]
    fn test_element_serialization_is_tagged() {
        let element: Element = Arrow::new(ArrowDirection::Down).into();
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"element\":\"arrow\""));
        assert!(json.contains("\"direction\":\"down\""));
    }
}
