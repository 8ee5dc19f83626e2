//! CLI command implementations
//!
//! Commands are thin: they load configuration, build a `Validator` and hand
//! input to it. All validation rules live in the validation module.

use std::path::Path;

use super::args::{Cli, Command, ModelKind};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_response, write_validation_error};
use crate::http_server::HttpServer;
use crate::metrics::SustainabilityMetrics;
use crate::observability::{log_event_with_fields, Event};
use crate::score::RegenScoreBreakdown;
use crate::validation::{BoundaryModel, ValidationError, Validator};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate {
            model,
            input,
            strict,
            config,
        } => validate(model, input.as_deref(), strict, config.as_deref()),
        Command::Serve {
            config,
            port,
            strict,
        } => serve(config.as_deref(), port, strict),
    }
}

/// Validate one document and print the result envelope.
///
/// A rejected document still prints its violations on stdout; the returned
/// error only drives the exit status.
pub fn validate(
    model: ModelKind,
    input: Option<&Path>,
    strict: bool,
    config_path: Option<&Path>,
) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_strict(strict);
    let validator = Validator::new(config.policy)
        .map_err(|e| CliError::config_error(format!("Policy config error: {}", e)))?;
    let text = read_input(input)?;

    match model {
        ModelKind::Metrics => emit(validate_text::<SustainabilityMetrics>(&validator, &text)),
        ModelKind::Score => emit(validate_text::<RegenScoreBreakdown>(&validator, &text)),
    }
}

/// Runs the validator over raw text
pub fn validate_text<T: BoundaryModel>(validator: &Validator, text: &str) -> Result<T, ValidationError> {
    validator.validate_str::<T>(text)
}

fn emit<T: BoundaryModel>(result: Result<T, ValidationError>) -> CliResult<()> {
    match result {
        Ok(value) => write_response(&value),
        Err(err) => {
            write_validation_error(&err)?;
            Err(CliError::validation_failed(err.model(), err.violations().len()))
        }
    }
}

/// Start the HTTP validation server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>, strict: bool) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?.with_strict(strict);
    if let Some(port) = port {
        config.server.port = port;
    }
    config
        .server
        .validate()
        .map_err(|e| CliError::config_error(format!("Server config error: {}", e)))?;
    let validator = Validator::new(config.policy)
        .map_err(|e| CliError::config_error(format!("Policy config error: {}", e)))?;

    let addr = config.server.socket_addr();
    let strict_str = validator.policy().is_strict().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", addr.as_str()),
            ("strict", strict_str.as_str()),
        ],
    );

    let server = HttpServer::with_config(config.server, validator);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let message = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("error", message.as_str())]);
            CliError::serve_failed(format!("HTTP server failed: {}", message))
        })
    })?;

    Ok(())
}
