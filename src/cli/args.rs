//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::runner::VerifyMode;
use crate::version::{ParseError, Version, PREFIX};

/// go-compat - Check a Go package against every installed Go release.
#[derive(Debug, Parser)]
#[command(name = "go-compat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Oldest Go release to check (e.g. go1.16 or 1.16)
    #[arg(short, long, value_name = "VERSION", value_parser = parse_since)]
    pub since: Option<Version>,

    /// Verification to run against each release
    #[arg(short, long, value_enum, default_value_t = VerifyMode::Vet)]
    pub mode: VerifyMode,

    /// Go SDK directory [env: GOSDK] [default: ~/sdk]
    #[arg(long, value_name = "DIR")]
    pub sdk: Option<PathBuf>,

    /// List discovered releases and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Package patterns passed to the go command
    #[arg(value_name = "PACKAGES")]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Minimum version to check; zero when unset.
    pub fn since(&self) -> Version {
        self.since.clone().unwrap_or_default()
    }
}

/// Parse `--since`, accepting the version with or without the `go` prefix.
pub fn parse_since(value: &str) -> Result<Version, ParseError> {
    if value.starts_with(PREFIX) {
        Version::parse(value)
    } else {
        Version::parse(&format!("{}{}", PREFIX, value))
    }
}
