//! Simulator configuration.
//!
//! ```toml
//! [table]
//! width = 5
//! height = 5
//! origin = [0, 0]
//! ```

use crate::board::Board;
use crate::error::{BoardError, ConfigError};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration. Missing keys fall back to [`Default`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub table: TableConfig,
}

/// Table geometry. Validated only when turned into a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub width: i32,
    pub height: i32,
    /// Lower-left cell of the table.
    pub origin: IVec2,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: Board::DEFAULT_WIDTH,
            height: Board::DEFAULT_HEIGHT,
            origin: IVec2::ZERO,
        }
    }
}

impl SimulatorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the table described by this configuration.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::with_origin(self.table.width, self.table.height, self.table.origin)
    }
}
