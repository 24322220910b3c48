//! Row, column, and grid arrangements.

use serde::{Deserialize, Serialize};

use crate::model::Element;

/// How a [`Group`] arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupLayout {
    Row,
    Column,
    /// A grid with a fixed column count.
    Grid {
        columns: usize,
    },
}

/// An ordered arrangement of child elements.
///
/// Groups carry no visual identity of their own; they only tell the
/// host how to flow their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    layout: GroupLayout,
    children: Vec<Element>,
}

impl Group {
    /// Creates a horizontal row.
    pub fn row(children: Vec<Element>) -> Self {
        Self {
            layout: GroupLayout::Row,
            children,
        }
    }

    /// Creates a vertical column.
    pub fn column(children: Vec<Element>) -> Self {
        Self {
            layout: GroupLayout::Column,
            children,
        }
    }

    /// Creates a grid with a fixed column count.
    pub fn grid(columns: usize, children: Vec<Element>) -> Self {
        Self {
            layout: GroupLayout::Grid { columns },
            children,
        }
    }

    /// Gets the layout.
    pub fn layout(&self) -> GroupLayout {
        self.layout
    }

    /// Gets the child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use crate::{color::Accent, model::Chip};

    use super::*;

    #[test]
    fn test_grid_records_column_count() {
        let grid = Group::grid(
            2,
            vec![
                Chip::new(Accent::Green, "Proof of History").into(),
                Chip::new(Accent::Green, "Tower BFT").into(),
                Chip::new(Accent::Green, "Turbine").into(),
            ],
        );

        assert_eq!(grid.layout(), GroupLayout::Grid { columns: 2 });
        assert_eq!(grid.children().len(), 3);
    }
}
