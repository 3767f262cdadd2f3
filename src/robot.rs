//! Robot state and the transitions that act on it.

use crate::board::Board;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

const CONTEXT: &str = "Robot";

/// Where the robot stands and which way it faces.
///
/// Displays as the report line, e.g. `3,3,NORTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotState {
    /// Current table cell.
    pub position: IVec2,

    /// Current facing.
    pub heading: Heading,
}

impl RobotState {
    pub fn new(position: IVec2, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The cell one step ahead, or `None` if it is not representable.
    pub fn ahead(&self) -> Option<IVec2> {
        let delta = self.heading.unit_vector();
        let x = self.position.x.checked_add(delta.x)?;
        let y = self.position.y.checked_add(delta.y)?;
        Some(IVec2::new(x, y))
    }
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.heading)
    }
}

/// A robot confined to a [`Board`].
///
/// The robot starts unplaced. Every transition other than [`place`](Self::place)
/// is refused until a placement succeeds. Refusals leave the state untouched,
/// emit a warning, and are reported as `false` / `None`.
pub struct Robot {
    board: Board,
    state: Option<RobotState>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl Robot {
    /// Creates an unplaced robot that logs through `tracing`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: None,
            diagnostics: Rc::new(TracingDiagnostics),
        }
    }

    /// Replaces the diagnostic sink (builder pattern).
    pub fn with_diagnostics(mut self, diagnostics: Rc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> Option<RobotState> {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_some()
    }

    /// Puts the robot at `position` facing `heading`.
    ///
    /// Placement is allowed at any time and overwrites any previous state.
    /// Returns `false` without touching the state if `position` is off the table.
    pub fn place(&mut self, position: IVec2, heading: Heading) -> bool {
        if !self.board.is_valid(position) {
            self.diagnostics.warn(
                CONTEXT,
                &format!("Invalid position provided: {},{}", position.x, position.y),
            );
            return false;
        }

        let state = RobotState::new(position, heading);
        self.state = Some(state);
        self.diagnostics
            .info(CONTEXT, &format!("Robot placed at {state}"));
        true
    }

    /// Advances one cell in the facing direction.
    ///
    /// Returns `false` if the robot is unplaced or the step would leave the table.
    pub fn move_forward(&mut self) -> bool {
        let Some(state) = self.placed_state("moving") else {
            return false;
        };

        match state.ahead() {
            Some(next) if self.board.is_valid(next) => {
                let moved = RobotState::new(next, state.heading);
                self.state = Some(moved);
                self.diagnostics
                    .info(CONTEXT, &format!("Robot moved to {},{}", next.x, next.y));
                true
            }
            _ => {
                self.diagnostics.warn(
                    CONTEXT,
                    &format!("Move from {state} would leave the table, ignoring"),
                );
                false
            }
        }
    }

    /// Turns 90 degrees counter-clockwise in place.
    pub fn rotate_left(&mut self) -> bool {
        self.rotate(Heading::left, "left")
    }

    /// Turns 90 degrees clockwise in place.
    pub fn rotate_right(&mut self) -> bool {
        self.rotate(Heading::right, "right")
    }

    /// Current state, or `None` if the robot has not been placed.
    pub fn report(&self) -> Option<RobotState> {
        let state = self.placed_state("reporting")?;
        self.diagnostics
            .info(CONTEXT, &format!("Robot report: {state}"));
        Some(state)
    }

    fn rotate(&mut self, turn: fn(Heading) -> Heading, side: &str) -> bool {
        let Some(state) = self.placed_state("rotating") else {
            return false;
        };

        let heading = turn(state.heading);
        self.state = Some(RobotState::new(state.position, heading));
        self.diagnostics.info(
            CONTEXT,
            &format!("Robot rotated {side}, now facing {heading}"),
        );
        true
    }

    fn placed_state(&self, action: &str) -> Option<RobotState> {
        if self.state.is_none() {
            self.diagnostics
                .warn(CONTEXT, &format!("Robot must be placed before {action}."));
        }
        self.state
    }
}

impl fmt::Debug for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robot")
            .field("board", &self.board)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
