//! Line-oriented driver around the parser and executor.

use crate::board::Board;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ParseError;
use crate::executor::CommandExecutor;
use crate::parser::CommandParser;
use crate::robot::{Robot, RobotState};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Keyword that ends a session. Not a [`Command`](crate::Command).
pub const EXIT_KEYWORD: &str = "EXIT";

/// What happened to a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line.
    Skipped,
    /// The line asked to end the session.
    Exit,
    /// The line did not parse.
    Rejected(ParseError),
    /// A command ran, possibly producing a report.
    Executed(Option<RobotState>),
}

/// Counters collected over one [`Simulator::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub lines: usize,
    pub commands: usize,
    pub parse_errors: usize,
    pub reports: usize,
}

/// Parser and executor wired together.
pub struct Simulator {
    parser: CommandParser,
    executor: CommandExecutor,
}

impl Simulator {
    /// Creates a simulator with an unplaced robot on `board`.
    pub fn new(board: Board) -> Self {
        Self::with_diagnostics(board, Rc::new(TracingDiagnostics))
    }

    /// Creates a simulator whose components all share `diagnostics`.
    pub fn with_diagnostics(board: Board, diagnostics: Rc<dyn Diagnostics>) -> Self {
        Self {
            parser: CommandParser::new().with_diagnostics(Rc::clone(&diagnostics)),
            executor: CommandExecutor::new(board).with_diagnostics(diagnostics),
        }
    }

    pub fn robot(&self) -> &Robot {
        self.executor.robot()
    }

    /// Handles one line of input.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().eq_ignore_ascii_case(EXIT_KEYWORD) {
            return LineOutcome::Exit;
        }

        match self.parser.parse(line) {
            Ok(Some(command)) => LineOutcome::Executed(self.executor.execute(command)),
            Ok(None) => LineOutcome::Skipped,
            Err(err) => LineOutcome::Rejected(err),
        }
    }

    /// Reads `input` line by line until `EXIT` or end of input, writing each
    /// report to `output`.
    ///
    /// Bytes that are not valid UTF-8 are replaced before parsing, so such a
    /// line is rejected like any other malformed command.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            stats.lines += 1;

            match self.process_line(line) {
                LineOutcome::Exit => {
                    tracing::debug!(line = stats.lines, "exit requested");
                    break;
                }
                LineOutcome::Skipped => {}
                LineOutcome::Rejected(_) => stats.parse_errors += 1,
                LineOutcome::Executed(report) => {
                    stats.commands += 1;
                    if let Some(report) = report {
                        stats.reports += 1;
                        writeln!(output, "{report}")?;
                        output.flush()?;
                    }
                }
            }
        }

        tracing::info!(
            lines = stats.lines,
            commands = stats.commands,
            parse_errors = stats.parse_errors,
            reports = stats.reports,
            "session finished"
        );
        Ok(stats)
    }
}
