//! Hipsum Library
//!
//! Inserts hipster ipsum from hipsum.co into the active editor selection.

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod generate;
pub mod host;
pub mod quick_pick;

pub use commands::{CommandRegistry, TextEditorCommand};
pub use config::Config;
pub use error::{HipsumError, HipsumResult};
pub use generate::{activate, GenerateCommand, OperationState, Outcome, COMMAND_ID};
