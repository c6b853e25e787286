//! List command implementation.
//!
//! `go-compat --list` prints the releases a check would use, one per line,
//! with the directory each lives in.

use anyhow::Context;

use crate::error::Result;
use crate::sdk::{discover, SdkConfig};
use crate::shell::Invoker;
use crate::version::Version;

use super::dispatcher::{Command, CommandResult, Streams};

/// The list command implementation.
pub struct ListCommand<'a> {
    invoker: &'a dyn Invoker,
    config: SdkConfig,
    since: Version,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(invoker: &'a dyn Invoker, config: SdkConfig, since: Version) -> Self {
        Self {
            invoker,
            config,
            since,
        }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult> {
        let releases = discover(&self.config, &self.since, self.invoker)?;

        for release in &releases {
            writeln!(streams.out, "{}\t{}", release, release.root.display())
                .with_context(|| format!("failed to list {}", release))?;
        }

        Ok(CommandResult::success())
    }
}
