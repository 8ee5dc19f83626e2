//! CLI module for regen-score
//!
//! Provides command-line interface for:
//! - validate: One-shot validation of a metrics or score document
//! - serve: Start the HTTP validation boundary

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ModelKind};
pub use commands::{run, run_command, serve, validate, validate_text};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_input, write_response, write_validation_error};
