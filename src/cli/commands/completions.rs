//! Shell completions generation.
//!
//! `go-compat --completions <shell>` prints a completion script.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;

use super::dispatcher::{Command, CommandResult, Streams};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, streams: &mut Streams<'_>) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "go-compat", &mut *streams.out);
        Ok(CommandResult::success())
    }
}
