//! Compass headings and their rotation algebra.

use crate::error::ParseError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction the robot is facing.
///
/// Variants are declared in clockwise order; rotation works on that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, clockwise from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Turns 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        self.rotate(-1)
    }

    /// Turns 90 degrees clockwise.
    pub fn right(self) -> Self {
        self.rotate(1)
    }

    /// One table cell in the facing direction. North is `+Y`.
    pub fn unit_vector(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// The upper-case token used in commands and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }

    fn rotate(self, step: i32) -> Self {
        let len = Self::ALL.len() as i32;
        // rem_euclid keeps the index non-negative when stepping left from North.
        let index = (self as i32 + step).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    /// Accepts the four tokens in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|heading| heading.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::InvalidDirection(s.to_string()))
    }
}
