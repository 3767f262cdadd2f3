//! Text to [`Command`] conversion.
//!
//! Input is case-insensitive. Leading and trailing whitespace is ignored and
//! the keyword is separated from its arguments by any run of whitespace:
//!
//! ```text
//! PLACE <x>,<y>,<HEADING>
//! MOVE | LEFT | RIGHT | REPORT
//! ```

use crate::command::Command;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ParseError;
use crate::heading::Heading;
use glam::IVec2;
use std::rc::Rc;

/// Parses one line of input.
///
/// Returns `Ok(None)` for a blank line. Arguments after `MOVE`, `LEFT`,
/// `RIGHT` and `REPORT` are ignored.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_uppercase().as_str() {
        "PLACE" => parse_place(rest)?,
        "MOVE" => Command::Move,
        "LEFT" => Command::Left,
        "RIGHT" => Command::Right,
        "REPORT" => Command::Report,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_place(args: &str) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArguments);
    }

    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    let [x, y, heading] = fields.as_slice() else {
        return Err(ParseError::ArgumentCount {
            found: fields.len(),
        });
    };

    let position = IVec2::new(parse_coordinate(x)?, parse_coordinate(y)?);
    let heading = heading.parse::<Heading>()?;
    Ok(Command::Place { position, heading })
}

fn parse_coordinate(field: &str) -> Result<i32, ParseError> {
    field
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidCoordinates(field.to_string()))
}

/// [`parse_line`] plus error reporting through a diagnostic sink.
pub struct CommandParser {
    diagnostics: Rc<dyn Diagnostics>,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            diagnostics: Rc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Rc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Parses `line`, emitting an error diagnostic when it is malformed.
    pub fn parse(&self, line: &str) -> Result<Option<Command>, ParseError> {
        parse_line(line).inspect_err(|err| {
            self.diagnostics
                .error("CommandParser", &format!("Error: {err}"));
        })
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
