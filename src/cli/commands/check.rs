//! Check command implementation.
//!
//! The default `go-compat` action: discover releases, verify the package
//! against each one and print diagnostics to the error stream.

use crate::error::Result;
use crate::runner::{write_report, ScanRunner, VerifyMode};
use crate::sdk::{discover, SdkConfig};
use crate::shell::Invoker;
use crate::version::Version;

use super::dispatcher::{Command, CommandResult, Streams};

/// The check command implementation.
pub struct CheckCommand<'a> {
    invoker: &'a dyn Invoker,
    config: SdkConfig,
    since: Version,
    mode: VerifyMode,
    patterns: Vec<String>,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        invoker: &'a dyn Invoker,
        config: SdkConfig,
        since: Version,
        mode: VerifyMode,
        patterns: Vec<String>,
    ) -> Self {
        Self {
            invoker,
            config,
            since,
            mode,
            patterns,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult> {
        let releases = discover(&self.config, &self.since, self.invoker)?;

        let report = ScanRunner::new(self.invoker, self.mode).run_all(&releases, &self.patterns);
        write_report(report, &mut *streams.err)?;

        // Diagnostics are findings, not failures of the tool.
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompatError;
    use crate::sdk::go_command;
    use crate::shell::{MockInvoker, MockResponse};
    use std::fs;
    use tempfile::TempDir;

    fn setup_sdk(invoker: &MockInvoker, names: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in names {
            let root = temp.path().join(name);
            fs::create_dir_all(&root).unwrap();
            invoker.respond(
                go_command(&root),
                "version",
                MockResponse::stdout(&format!("go version {} linux/amd64", name)),
            );
        }
        temp
    }

    fn respond_vet(invoker: &MockInvoker, temp: &TempDir, name: &str, response: MockResponse) {
        invoker.respond(go_command(&temp.path().join(name)), "vet", response);
    }

    fn run(
        invoker: &MockInvoker,
        temp: &TempDir,
        since: Version,
    ) -> (Result<CommandResult>, String) {
        let cmd = CheckCommand::new(
            invoker,
            SdkConfig::new(temp.path()),
            since,
            VerifyMode::Vet,
            vec!["./...".to_string()],
        );
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = cmd.execute(&mut Streams::new(&mut out, &mut err));
        (result, String::from_utf8(err).unwrap())
    }

    #[test]
    fn diagnostics_are_printed_and_command_succeeds() {
        let invoker = MockInvoker::new();
        let temp = setup_sdk(&invoker, &["go1.15", "go1.16"]);
        respond_vet(&invoker, &temp, "go1.15", MockResponse::exit(1, "vet: old"));
        respond_vet(&invoker, &temp, "go1.16", MockResponse::clean());

        let (result, stderr) = run(&invoker, &temp, Version::default());

        assert!(result.unwrap().success);
        assert_eq!(stderr, "using go1.15\nvet: old\n");
    }

    #[test]
    fn since_limits_checked_releases() {
        let invoker = MockInvoker::new();
        let temp = setup_sdk(&invoker, &["go1.14", "go1.15"]);
        respond_vet(&invoker, &temp, "go1.14", MockResponse::exit(1, "old"));
        respond_vet(&invoker, &temp, "go1.15", MockResponse::clean());

        let (result, stderr) = run(&invoker, &temp, Version::new(1, 15, 0));

        assert!(result.is_ok());
        assert!(stderr.is_empty());
    }

    #[test]
    fn fatal_outcome_is_returned_as_error() {
        let invoker = MockInvoker::new();
        let temp = setup_sdk(&invoker, &["go1.15"]);
        // No vet response: the go command cannot be started.

        let (result, _) = run(&invoker, &temp, Version::default());

        assert!(matches!(result, Err(CompatError::Verification(_))));
    }
}
