//! JSON export for diagram trees.

use chainviz_core::model::Diagram;

use crate::error::ChainvizError;

/// Serializes a diagram tree to pretty-printed JSON.
///
/// The output mirrors the model one-to-one: internally tagged elements,
/// lowercase accent and kind tags, empty sections omitted.
///
/// # Errors
///
/// Returns [`ChainvizError::Json`] if serialization fails.
pub fn to_json(diagram: &Diagram) -> Result<String, ChainvizError> {
    Ok(serde_json::to_string_pretty(diagram)?)
}

#[cfg(test)]
mod tests {
    use chainviz_core::{
        color::Accent,
        model::{Chip, Diagram},
    };

    use super::*;

    #[test]
    fn test_json_carries_title_and_tags() {
        let diagram = Diagram::new("IBC Protocol Components")
            .accent(Accent::Green)
            .push(Chip::new(Accent::Green, "Light Clients"));

        let json = to_json(&diagram).unwrap();
        assert!(json.contains("\"title\": \"IBC Protocol Components\""));
        assert!(json.contains("\"green\""));
        assert!(json.contains("\"element\": \"chip\""));
    }
}
