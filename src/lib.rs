//! # toy-robot
//!
//! A robot on a rectangular table, driven by text commands.
//!
//! Lines are parsed into [`Command`]s, which a [`CommandExecutor`] applies to a
//! [`Robot`]. The robot ignores everything but `PLACE` until it is on the
//! table, and refuses any move that would take it off.
//!
//! ```
//! use toy_robot::{Board, Simulator};
//!
//! let mut simulator = Simulator::new(Board::default());
//! let mut output = Vec::new();
//! simulator
//!     .run("PLACE 0,0,NORTH\nMOVE\nREPORT\n".as_bytes(), &mut output)
//!     .unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "0,1,NORTH\n");
//! ```

pub mod board;
pub mod cli;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod heading;
pub mod logger;
pub mod parser;
pub mod robot;
pub mod session;

pub use board::*;
pub use cli::Cli;
pub use command::*;
pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use executor::*;
pub use heading::*;
pub use parser::*;
pub use robot::*;
pub use session::*;
