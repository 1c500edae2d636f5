//! Console front end for playing checkers against the engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, EngineOption, GoParams, parse_command};
pub use error::CommandError;
pub use session::{EngineConfig, Session};
