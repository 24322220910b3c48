//! Free text and key/value elements.

use serde::{Deserialize, Serialize};

use crate::{color::Accent, model::Tooltip};

/// The weight of a [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Muted,
    #[default]
    Normal,
    Strong,
}

/// A free-standing line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    text: String,
    #[serde(default, skip_serializing_if = "is_default_tone")]
    tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent: Option<Accent>,
}

fn is_default_tone(tone: &Tone) -> bool {
    *tone == Tone::Normal
}

impl Label {
    /// Creates a normal-weight label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
            accent: None,
        }
    }

    /// Creates a muted label, used for captions and footnotes.
    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text).tone(Tone::Muted)
    }

    /// Creates a strong label, used for emphasized callouts.
    pub fn strong(text: impl Into<String>) -> Self {
        Self::new(text).tone(Tone::Strong)
    }

    /// Sets the tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Sets an accent for the text color.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    /// Gets the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the tone.
    pub fn label_tone(&self) -> Tone {
        self.tone
    }

    /// Gets the accent, if set.
    pub fn label_accent(&self) -> Option<Accent> {
        self.accent
    }
}

/// One key/value row of a [`FactList`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    key: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent: Option<Accent>,
}

impl Fact {
    /// Creates a fact row.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            accent: None,
        }
    }

    /// Sets an accent for the value.
    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    /// Gets the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Gets the value accent, if set.
    pub fn value_accent(&self) -> Option<Accent> {
        self.accent
    }
}

/// An ordered list of key/value rows, rendered as a two-column table
/// inside a card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactList {
    rows: Vec<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
}

impl FactList {
    /// Creates an empty fact list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn row(mut self, fact: Fact) -> Self {
        self.rows.push(fact);
        self
    }

    /// Attaches hover content.
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Gets the rows.
    pub fn rows(&self) -> &[Fact] {
        &self.rows
    }

    pub(crate) fn tooltip_ref(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_constructors_set_tone() {
        assert_eq!(Label::muted("x").label_tone(), Tone::Muted);
        assert_eq!(Label::new("x").label_tone(), Tone::Normal);
        assert_eq!(Label::strong("x").label_tone(), Tone::Strong);
    }

    #[test]
    fn test_fact_list_keeps_row_order() {
        let facts = FactList::new()
            .row(Fact::new("Validity", "Assumed"))
            .row(Fact::new("Proof", "Fraud proof"))
            .row(Fact::new("Finality", "7 days").accent(Accent::Amber));

        let keys: Vec<_> = facts.rows().iter().map(Fact::key).collect();
        assert_eq!(keys, ["Validity", "Proof", "Finality"]);
        assert_eq!(facts.rows()[2].value_accent(), Some(Accent::Amber));
    }
}
