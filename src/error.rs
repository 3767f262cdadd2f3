//! Error types.
//!
//! Only parsing and startup can fail. Rejected moves are not errors: the
//! [`Robot`](crate::Robot) reports them as `false` / `None`.

use thiserror::Error;

/// Why a line of input did not produce a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("PLACE command requires arguments")]
    MissingArguments,

    #[error("PLACE expects 3 comma-separated arguments, found {found}")]
    ArgumentCount { found: usize },

    #[error("invalid position coordinate: {0:?}")]
    InvalidCoordinates(String),

    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
}

/// A table that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("table dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error(
        "table extent overflows the coordinate range (origin {origin_x},{origin_y}, size {width}x{height})"
    )]
    OutOfRange {
        origin_x: i32,
        origin_y: i32,
        width: i32,
        height: i32,
    },
}

/// Failures while loading a [`SimulatorConfig`](crate::SimulatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid table configuration: {0}")]
    Board(#[from] BoardError),
}
