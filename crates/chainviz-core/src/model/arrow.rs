//! Arrow connector elements.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Defines the direction of an arrow connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    /// The lowercase direction tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
            ArrowDirection::Left => "left",
            ArrowDirection::Right => "right",
        }
    }
}

impl FromStr for ArrowDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err("Invalid arrow direction"),
        }
    }
}

/// A directional connector between neighboring elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    direction: ArrowDirection,
}

impl Arrow {
    /// Creates an arrow pointing in the given direction.
    pub fn new(direction: ArrowDirection) -> Self {
        Self { direction }
    }

    /// Gets the arrow direction.
    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        for direction in [
            ArrowDirection::Up,
            ArrowDirection::Down,
            ArrowDirection::Left,
            ArrowDirection::Right,
        ] {
            assert_eq!(
                direction.as_str().parse::<ArrowDirection>().unwrap(),
                direction
            );
        }
    }
}
