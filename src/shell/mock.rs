//! Mock invoker for testing.
//!
//! `MockInvoker` implements [`Invoker`] without spawning processes. Each
//! response is keyed by program path and subcommand (the first argument),
//! and every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use go_compat::shell::{Invocation, Invoker, MockInvoker, MockResponse};
//!
//! let invoker = MockInvoker::new();
//! let go = "/sdk/go1.16/bin/go";
//! invoker.respond(go, "version", MockResponse::stdout("go version go1.16 linux/amd64"));
//!
//! let out = invoker.output(&Invocation::new(go).arg("version")).unwrap();
//! assert_eq!(out.stdout_text(), "go version go1.16 linux/amd64");
//! assert_eq!(invoker.calls().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use super::command::{CommandOutput, FailureKind, Invocation, InvokeError, Invoker};

/// Canned result for a mocked invocation.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Exit 0 with the given output.
    Success { stdout: String, stderr: String },

    /// Exit non-zero with the given output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// Fail to start.
    SpawnFailure(io::ErrorKind),
}

impl MockResponse {
    /// Exit 0 printing `stdout`.
    pub fn stdout(stdout: &str) -> Self {
        Self::Success {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Exit 0 printing nothing.
    pub fn clean() -> Self {
        Self::stdout("")
    }

    /// Exit with `code` printing `stderr`.
    pub fn exit(code: i32, stderr: &str) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Exit with `code` printing only to stdout, as `go test` does.
    pub fn exit_stdout(code: i32, stdout: &str) -> Self {
        Self::Exit {
            code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }
}

/// [`Invoker`] returning canned responses.
///
/// Unconfigured invocations fail to start with `NotFound`, like a missing
/// executable.
#[derive(Debug, Default)]
pub struct MockInvoker {
    responses: RefCell<HashMap<(PathBuf, String), MockResponse>>,
    calls: RefCell<Vec<Invocation>>,
}

impl MockInvoker {
    /// Create a mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for `program` run with `subcommand`.
    pub fn respond(&self, program: impl Into<PathBuf>, subcommand: &str, response: MockResponse) {
        self.responses
            .borrow_mut()
            .insert((program.into(), subcommand.to_string()), response);
    }

    /// All invocations seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl Invoker for MockInvoker {
    fn output(&self, invocation: &Invocation) -> Result<CommandOutput, InvokeError> {
        self.calls.borrow_mut().push(invocation.clone());

        let key = (
            invocation.program.clone(),
            invocation.args.first().cloned().unwrap_or_default(),
        );
        let response = self
            .responses
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or(MockResponse::SpawnFailure(io::ErrorKind::NotFound));

        let trimmed = |s: &str| s.trim().as_bytes().to_vec();

        match response {
            MockResponse::Success { stdout, stderr } => Ok(CommandOutput {
                stdout: trimmed(&stdout),
                stderr: trimmed(&stderr),
            }),
            MockResponse::Exit {
                code,
                stdout,
                stderr,
            } => Err(InvokeError::new(
                invocation,
                trimmed(&stdout),
                trimmed(&stderr),
                FailureKind::Exited { code: Some(code) },
            )),
            MockResponse::SpawnFailure(kind) => Err(InvokeError::new(
                invocation,
                Vec::new(),
                Vec::new(),
                FailureKind::Spawn(io::Error::new(kind, "mock spawn failure")),
            )),
        }
    }
}
