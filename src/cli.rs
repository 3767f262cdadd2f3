//! Command-line arguments for the `toy-robot` binary.

use crate::config::SimulatorConfig;
use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "toy-robot")]
#[command(about = "Simulates a toy robot moving on a rectangular table")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Table width (overrides the config file)
    #[arg(long)]
    pub width: Option<i32>,

    /// Table height (overrides the config file)
    #[arg(long)]
    pub height: Option<i32>,

    /// X coordinate of the table's lower-left cell
    #[arg(long, allow_hyphen_values = true)]
    pub origin_x: Option<i32>,

    /// Y coordinate of the table's lower-left cell
    #[arg(long, allow_hyphen_values = true)]
    pub origin_y: Option<i32>,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress the banner and farewell message
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<SimulatorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_file(path)?,
            None => SimulatorConfig::default(),
        };

        let table = &mut config.table;
        if let Some(width) = self.width {
            table.width = width;
        }
        if let Some(height) = self.height {
            table.height = height;
        }
        if let Some(x) = self.origin_x {
            table.origin.x = x;
        }
        if let Some(y) = self.origin_y {
            table.origin.y = y;
        }
        Ok(config)
    }
}
