//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Streams`] for the output and error writers commands print to
//! - [`CommandDispatcher`] for routing parsed arguments

use std::io::Write;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::sdk::SdkConfig;
use crate::shell::Invoker;

/// Writers a command prints to.
pub struct Streams<'a> {
    /// Regular output (release listings, completion scripts).
    pub out: &'a mut dyn Write,
    /// Diagnostics.
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `streams` - Writers for output and diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Routes parsed arguments to the matching command.
pub struct CommandDispatcher<'a> {
    invoker: &'a dyn Invoker,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher running toolchains through `invoker`.
    pub fn new(invoker: &'a dyn Invoker) -> Self {
        Self { invoker }
    }

    /// Dispatch and execute a command.
    ///
    /// `--completions` needs no SDK; everything else resolves the SDK root
    /// first and then lists or checks releases.
    pub fn dispatch(&self, cli: &Cli, streams: &mut Streams<'_>) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return super::completions::CompletionsCommand::new(shell).execute(streams);
        }

        let config = SdkConfig::resolve(cli.sdk.as_deref())?;
        tracing::debug!("Using SDK root {}", config.root.display());

        if cli.list {
            let cmd = super::list::ListCommand::new(self.invoker, config, cli.since());
            cmd.execute(streams)
        } else {
            let cmd = super::check::CheckCommand::new(
                self.invoker,
                config,
                cli.since(),
                cli.mode,
                cli.patterns.clone(),
            );
            cmd.execute(streams)
        }
    }
}
