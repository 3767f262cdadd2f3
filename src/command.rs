//! The instructions a robot understands.

use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // --- Placement ---
    /// Put the robot on the table (`PLACE x,y,HEADING`).
    Place { position: IVec2, heading: Heading },

    // --- Motion ---
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn counter-clockwise (`LEFT`).
    Left,
    /// Turn clockwise (`RIGHT`).
    Right,

    // --- Query ---
    /// Announce position and heading (`REPORT`).
    Report,
}

impl Command {
    /// The command's keyword as written in input.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
        }
    }
}

impl fmt::Display for Command {
    /// Renders the command in input syntax, so it parses back to itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { position, heading } => {
                write!(f, "PLACE {},{},{}", position.x, position.y, heading)
            }
            other => f.write_str(other.keyword()),
        }
    }
}
