//! Flow node elements.
//!
//! A [`FlowNode`] is the labeled box primitive: a visual [`NodeKind`],
//! an accent, a primary label, and optional secondary lines. It maps
//! directly onto the host's flow-node component.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{color::Accent, model::Tooltip};

/// The visual kind of a [`FlowNode`].
///
/// Kinds describe the role a box plays in a flow (a source, a sink, a
/// processing step, a store) and are rendered with distinct silhouettes
/// by the host's primitive layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Output,
    Process,
    Database,
    Service,
    Queue,
}

impl NodeKind {
    /// The lowercase kind tag used in serialized trees and exporter
    /// class names.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::Process => "process",
            NodeKind::Database => "database",
            NodeKind::Service => "service",
            NodeKind::Queue => "queue",
        }
    }
}

impl FromStr for NodeKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            "process" => Ok(Self::Process),
            "database" => Ok(Self::Database),
            "service" => Ok(Self::Service),
            "queue" => Ok(Self::Queue),
            _ => Err("Invalid node kind"),
        }
    }
}

/// A labeled flow-node box.
///
/// # Examples
///
/// ```
/// use chainviz_core::color::Accent;
/// use chainviz_core::model::{FlowNode, NodeKind};
///
/// let node = FlowNode::new(NodeKind::Input, Accent::Blue, "UTXO #1").line("0.5 BTC");
/// assert_eq!(node.label(), "UTXO #1");
/// assert_eq!(node.lines(), ["0.5 BTC"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    kind: NodeKind,
    accent: Accent,
    label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
}

impl FlowNode {
    /// Creates a new flow node with the given kind, accent, and primary
    /// label.
    pub fn new(kind: NodeKind, accent: Accent, label: impl Into<String>) -> Self {
        Self {
            kind,
            accent,
            label: label.into(),
            lines: Vec::new(),
            tooltip: None,
        }
    }

    /// Appends a secondary line below the label.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Attaches hover content.
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Gets the visual kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Gets the accent tag.
    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Gets the primary label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the secondary lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl FlowNode {
    pub(crate) fn tooltip_ref(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_round_trip() {
        for kind in [
            NodeKind::Input,
            NodeKind::Output,
            NodeKind::Process,
            NodeKind::Database,
            NodeKind::Service,
            NodeKind::Queue,
        ] {
            assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_node_kind_rejects_unknown() {
        assert!("widget".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_builder_accumulates_lines() {
        let node = FlowNode::new(NodeKind::Database, Accent::Purple, "Mempool")
            .line("Pending TXs")
            .line("fee-ordered");
        assert_eq!(node.lines().len(), 2);
    }
}
