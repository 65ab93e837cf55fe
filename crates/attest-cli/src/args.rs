//! Command-line argument definitions for the Attest CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional with a default, so a bare
//! `attest` invocation runs the entire pipeline.

use clap::Parser;

/// Command-line arguments for the Attest report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output report file
    #[arg(short, long, default_value = attest::REPORT_FILE)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
