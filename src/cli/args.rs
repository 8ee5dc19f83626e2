//! CLI argument definitions using clap
//!
//! Commands:
//! - regen-score validate <metrics|score> [--input <path>] [--strict] [--config <path>]
//! - regen-score serve [--config <path>] [--port <port>] [--strict]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// regen-score - Validation boundary for sustainability metrics and REGEN Scores
#[derive(Parser, Debug)]
#[command(name = "regen-score")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON document and print the normalized result
    Validate {
        /// Which model the document must satisfy
        #[arg(value_enum)]
        model: ModelKind,

        /// File to read; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Enforce every optional invariant
        #[arg(long)]
        strict: bool,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP validation server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,

        /// Enforce every optional invariant
        #[arg(long)]
        strict: bool,
    },
}

/// Models accepted by the validator
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Sustainability metrics
    Metrics,
    /// REGEN Score breakdown
    Score,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
