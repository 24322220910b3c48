//! HTML fragment export.
//!
//! The exporter walks a diagram tree and builds markup by hand: nested
//! `div`/`span` structure, escaped text, and structural class names
//! derived from element kinds. It deliberately emits no styling beyond
//! the resolved accent color, exposed as a CSS custom property, so the
//! host site's stylesheet stays in charge of appearance.
//!
//! Class names follow a fixed scheme under a configurable prefix
//! (default `cv`): `cv-diagram`, `cv-node cv-node--input`,
//! `cv-accent-blue`, `cv-tooltip__panel`, and so on.

use std::fmt::Write;

use chainviz_core::{
    color::{Accent, Color},
    model::{
        Arrow, ArrowDirection, Chip, Diagram, Element, FactList, FlowNode, Group, GroupLayout,
        Label, Panel, Tone, Tooltip,
    },
};

use crate::{config::StyleConfig, error::ChainvizError};

/// Escapes text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// HTML exporter for diagram trees.
///
/// # Examples
///
/// ```
/// use chainviz::config::StyleConfig;
/// use chainviz::export::Html;
/// use chainviz_core::model::Diagram;
///
/// let exporter = Html::new(&StyleConfig::default()).unwrap();
/// let fragment = exporter.render(&Diagram::new("UTXO Transaction Model"));
/// assert!(fragment.contains("UTXO Transaction Model"));
/// ```
pub struct Html {
    prefix: String,
    tooltips: bool,
    background: Option<Color>,
}

impl Html {
    /// Creates an exporter from style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChainvizError::Config`] if the configured background
    /// color string does not parse.
    pub fn new(style: &StyleConfig) -> Result<Self, ChainvizError> {
        let background = style.background_color().map_err(ChainvizError::Config)?;
        Ok(Self {
            prefix: style.class_prefix().to_string(),
            tooltips: style.tooltips(),
            background,
        })
    }

    /// Renders a diagram to an HTML fragment.
    pub fn render(&self, diagram: &Diagram) -> String {
        let mut out = String::new();
        let p = &self.prefix;

        let mut style = String::new();
        if let Some(accent) = diagram.container_accent() {
            let _ = write!(style, "--{p}-accent: {};", accent.color());
        }
        if let Some(background) = self.background {
            let _ = write!(style, "background-color: {background};");
        }

        let _ = write!(out, "<section class=\"{p}-diagram");
        if let Some(accent) = diagram.container_accent() {
            let _ = write!(out, " {p}-accent-{accent}");
        }
        out.push('"');
        if !style.is_empty() {
            let _ = write!(out, " style=\"{style}\"");
        }
        out.push('>');

        let _ = write!(
            out,
            "<h3 class=\"{p}-diagram__title\">{}</h3>",
            escape(diagram.title())
        );

        let _ = write!(out, "<div class=\"{p}-diagram__body\">");
        for element in diagram.children() {
            self.write_element(&mut out, element);
        }
        out.push_str("</div></section>");

        out
    }

    fn write_element(&self, out: &mut String, element: &Element) {
        let tooltip = element.tooltip().filter(|_| self.tooltips);
        if let Some(tooltip) = tooltip {
            let _ = write!(out, "<span class=\"{}-tooltip\">", self.prefix);
            self.write_trigger(out, element);
            self.write_tooltip_panel(out, tooltip);
            out.push_str("</span>");
        } else {
            self.write_trigger(out, element);
        }
    }

    // The element itself, without its tooltip wrapper.
    fn write_trigger(&self, out: &mut String, element: &Element) {
        match element {
            Element::Node(node) => self.write_node(out, node),
            Element::Arrow(arrow) => self.write_arrow(out, arrow),
            Element::Panel(panel) => self.write_panel(out, panel),
            Element::Chip(chip) => self.write_chip(out, chip),
            Element::Label(label) => self.write_label(out, label),
            Element::Facts(facts) => self.write_facts(out, facts),
            Element::Group(group) => self.write_group(out, group),
        }
    }

    fn open_accented(&self, out: &mut String, classes: &str, accent: Accent) {
        let p = &self.prefix;
        let _ = write!(
            out,
            "<div class=\"{classes} {p}-accent-{accent}\" style=\"--{p}-accent: {}\">",
            accent.color()
        );
    }

    fn write_node(&self, out: &mut String, node: &FlowNode) {
        let p = &self.prefix;
        self.open_accented(
            out,
            &format!("{p}-node {p}-node--{}", node.kind().as_str()),
            node.accent(),
        );
        let _ = write!(
            out,
            "<div class=\"{p}-node__label\">{}</div>",
            escape(node.label())
        );
        for line in node.lines() {
            let _ = write!(out, "<div class=\"{p}-node__line\">{}</div>", escape(line));
        }
        out.push_str("</div>");
    }

    fn write_arrow(&self, out: &mut String, arrow: &Arrow) {
        let glyph = match arrow.direction() {
            ArrowDirection::Up => "\u{2191}",
            ArrowDirection::Down => "\u{2193}",
            ArrowDirection::Left => "\u{2190}",
            ArrowDirection::Right => "\u{2192}",
        };
        let p = &self.prefix;
        let _ = write!(
            out,
            "<span class=\"{p}-arrow {p}-arrow--{}\" aria-hidden=\"true\">{glyph}</span>",
            arrow.direction().as_str()
        );
    }

    fn write_panel(&self, out: &mut String, panel: &Panel) {
        let p = &self.prefix;
        self.open_accented(out, &format!("{p}-panel"), panel.accent());
        if let Some(title) = panel.panel_title() {
            let _ = write!(out, "<div class=\"{p}-panel__title\">{}</div>", escape(title));
        }
        let _ = write!(out, "<div class=\"{p}-panel__body\">");
        for child in panel.children() {
            self.write_element(out, child);
        }
        out.push_str("</div></div>");
    }

    fn write_chip(&self, out: &mut String, chip: &Chip) {
        let p = &self.prefix;
        self.open_accented(out, &format!("{p}-chip"), chip.accent());
        let _ = write!(out, "<span class=\"{p}-chip__text\">{}</span>", escape(chip.text()));
        if let Some(caption) = chip.caption_text() {
            let _ = write!(
                out,
                "<span class=\"{p}-chip__caption\">{}</span>",
                escape(caption)
            );
        }
        out.push_str("</div>");
    }

    fn write_label(&self, out: &mut String, label: &Label) {
        let p = &self.prefix;
        let tone = match label.label_tone() {
            Tone::Muted => "muted",
            Tone::Normal => "normal",
            Tone::Strong => "strong",
        };
        let _ = write!(out, "<p class=\"{p}-label {p}-label--{tone}");
        if let Some(accent) = label.label_accent() {
            let _ = write!(out, " {p}-accent-{accent}");
        }
        let _ = write!(out, "\">{}</p>", escape(label.text()));
    }

    fn write_facts(&self, out: &mut String, facts: &FactList) {
        let p = &self.prefix;
        let _ = write!(out, "<dl class=\"{p}-facts\">");
        for fact in facts.rows() {
            let _ = write!(out, "<dt class=\"{p}-facts__key\">{}</dt>", escape(fact.key()));
            let _ = write!(out, "<dd class=\"{p}-facts__value");
            if let Some(accent) = fact.value_accent() {
                let _ = write!(out, " {p}-accent-{accent}");
            }
            let _ = write!(out, "\">{}</dd>", escape(fact.value()));
        }
        out.push_str("</dl>");
    }

    fn write_group(&self, out: &mut String, group: &Group) {
        let p = &self.prefix;
        match group.layout() {
            GroupLayout::Row => {
                let _ = write!(out, "<div class=\"{p}-group {p}-group--row\">");
            }
            GroupLayout::Column => {
                let _ = write!(out, "<div class=\"{p}-group {p}-group--column\">");
            }
            GroupLayout::Grid { columns } => {
                let _ = write!(
                    out,
                    "<div class=\"{p}-group {p}-group--grid\" style=\"--{p}-grid-columns: {columns}\">"
                );
            }
        }
        for child in group.children() {
            self.write_element(out, child);
        }
        out.push_str("</div>");
    }

    fn write_tooltip_panel(&self, out: &mut String, tooltip: &Tooltip) {
        let p = &self.prefix;
        let _ = write!(out, "<span class=\"{p}-tooltip__panel\" role=\"tooltip\" hidden>");

        let _ = write!(out, "<strong class=\"{p}-tooltip__heading");
        if let Some(accent) = tooltip.heading_accent() {
            let _ = write!(out, " {p}-accent-{accent}");
        }
        let _ = write!(out, "\">{}</strong>", escape(tooltip.heading()));

        for paragraph in tooltip.paragraphs() {
            let _ = write!(out, "<p>{}</p>", escape(paragraph));
        }
        if !tooltip.bullets().is_empty() {
            out.push_str("<ul>");
            for bullet in tooltip.bullets() {
                let _ = write!(out, "<li>{}</li>", escape(bullet));
            }
            out.push_str("</ul>");
        }
        if let Some(code) = tooltip.code_line() {
            let _ = write!(out, "<code>{}</code>", escape(code));
        }
        if let Some(note) = tooltip.trailing_note() {
            let _ = write!(out, "<p class=\"{p}-tooltip__note\">{}</p>", escape(note));
        }

        out.push_str("</span>");
    }
}

#[cfg(test)]
mod tests {
    use chainviz_core::{
        color::Accent,
        model::{FlowNode, NodeKind},
    };

    use super::*;

    fn diagram_with_tooltip() -> Diagram {
        Diagram::new("Proof of Work Mining").push(
            FlowNode::new(NodeKind::Database, Accent::Purple, "Mempool")
                .line("Pending TXs")
                .tooltip(Tooltip::new("Mempool").paragraph("Pool of unconfirmed transactions")),
        )
    }

    #[test]
    fn test_fragment_has_container_and_title() {
        let html = Html::new(&StyleConfig::default()).unwrap();
        let fragment = html.render(&diagram_with_tooltip());

        assert!(fragment.starts_with("<section class=\"cv-diagram\""));
        assert!(fragment.contains("<h3 class=\"cv-diagram__title\">Proof of Work Mining</h3>"));
        assert!(fragment.ends_with("</section>"));
    }

    #[test]
    fn test_node_classes_and_accent_property() {
        let html = Html::new(&StyleConfig::default()).unwrap();
        let fragment = html.render(&diagram_with_tooltip());

        assert!(fragment.contains("cv-node cv-node--database cv-accent-purple"));
        assert!(fragment.contains("--cv-accent:"));
    }

    #[test]
    fn test_tooltip_toggle() {
        let mut style = StyleConfig::default();
        let with = Html::new(&style).unwrap().render(&diagram_with_tooltip());
        assert!(with.contains("cv-tooltip__panel"));

        style.set_tooltips(false);
        let without = Html::new(&style).unwrap().render(&diagram_with_tooltip());
        assert!(!without.contains("cv-tooltip__panel"));
        assert!(without.contains("Mempool"));
    }

    #[test]
    fn test_custom_class_prefix() {
        let mut style = StyleConfig::default();
        style.set_class_prefix("course");
        let fragment = Html::new(&style).unwrap().render(&diagram_with_tooltip());

        assert!(fragment.contains("course-diagram__title"));
        assert!(!fragment.contains("cv-diagram"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = Html::new(&StyleConfig::default()).unwrap();
        let diagram = Diagram::new("a < b & \"c\"");
        let fragment = html.render(&diagram);

        assert!(fragment.contains("a &lt; b &amp; &quot;c&quot;"));
    }

    #[test]
    fn test_escape_covers_all_special_characters() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }
}
