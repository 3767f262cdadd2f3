//! Applies parsed commands to a [`Robot`].
//!
//! The entry point is [`CommandExecutor::execute`]. Until the robot has been
//! placed, every command except `PLACE` is dropped without reaching the robot.

use crate::board::Board;
use crate::command::Command;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::robot::{Robot, RobotState};
use std::rc::Rc;

const CONTEXT: &str = "CommandExecutor";

/// Dispatches [`Command`]s to the robot it owns.
pub struct CommandExecutor {
    robot: Robot,
    was_placed: bool,
    diagnostics: Rc<dyn Diagnostics>,
}

impl CommandExecutor {
    /// Creates an executor driving an unplaced robot on `board`.
    pub fn new(board: Board) -> Self {
        Self::from_robot(Robot::new(board))
    }

    /// Wraps an existing robot, keeping whatever state it already has.
    pub fn from_robot(robot: Robot) -> Self {
        Self {
            robot,
            was_placed: false,
            diagnostics: Rc::new(TracingDiagnostics),
        }
    }

    /// Replaces the diagnostic sink of the executor and of its robot.
    pub fn with_diagnostics(mut self, diagnostics: Rc<dyn Diagnostics>) -> Self {
        self.robot = self.robot.with_diagnostics(Rc::clone(&diagnostics));
        self.diagnostics = diagnostics;
        self
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Whether the robot was already on the table when the most recent
    /// `PLACE` was attempted.
    pub fn was_placed(&self) -> bool {
        self.was_placed
    }

    /// Applies `command` and returns the report it produced, if any.
    ///
    /// Rejected placements and moves are absorbed by the robot; they never
    /// surface as errors here.
    pub fn execute(&mut self, command: Command) -> Option<RobotState> {
        match command {
            Command::Place { position, heading } => {
                self.was_placed = self.robot.is_placed();
                self.robot.place(position, heading);
                None
            }
            _ if !self.robot.is_placed() => {
                self.diagnostics.debug(
                    CONTEXT,
                    &format!("Robot not placed, ignoring {}", command.keyword()),
                );
                None
            }
            Command::Move => {
                self.robot.move_forward();
                None
            }
            Command::Left => {
                self.robot.rotate_left();
                None
            }
            Command::Right => {
                self.robot.rotate_right();
                None
            }
            Command::Report => {
                let report = self.robot.report()?;
                self.diagnostics
                    .info("ReportCommand", &report.to_string());
                Some(report)
            }
        }
    }
}
