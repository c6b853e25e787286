//! Subprocess invocation.
//!
//! Commands run synchronously with stdout and stderr captured separately
//! and trimmed of surrounding whitespace. Failures come back as an
//! [`InvokeError`] whose [`FailureKind`] tells apart a command that could not
//! be started from one that ran and exited non-zero. Both streams survive a
//! non-zero exit: `go test` reports failures on stdout.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// A command to execute: program, arguments and environment overrides.
///
/// The child inherits the current process environment, with `env` entries
/// layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run.
    pub program: PathBuf,

    /// Arguments, not including the program.
    pub args: Vec<String>,

    /// Environment variables overriding the inherited ones.
    pub env: Vec<(String, OsString)>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Override an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Look up an environment override.
    pub fn env_value(&self, key: &str) -> Option<&OsString> {
        self.env.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }
}

/// Output of a command that exited successfully.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Standard output, trimmed.
    pub stdout: Vec<u8>,

    /// Standard error, trimmed.
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Standard output as text, lossily decoded.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Why an invocation failed.
#[derive(Debug)]
pub enum FailureKind {
    /// The program could not be started (missing, not executable, ...).
    Spawn(io::Error),

    /// The program ran and exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    Exited { code: Option<i32> },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(err) => write!(f, "{}", err),
            Self::Exited { code: Some(code) } => write!(f, "exit status {}", code),
            Self::Exited { code: None } => f.write_str("terminated by signal"),
        }
    }
}

/// Structured error for a failed invocation.
#[derive(Debug)]
pub struct InvokeError {
    /// The program invoked.
    pub program: PathBuf,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Standard output of the command, trimmed.
    pub stdout: Vec<u8>,

    /// Entire standard error of the command, trimmed.
    pub stderr: Vec<u8>,

    /// Underlying cause.
    pub kind: FailureKind,
}

impl InvokeError {
    pub(crate) fn new(
        invocation: &Invocation,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        kind: FailureKind,
    ) -> Self {
        Self {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            stdout,
            stderr,
            kind,
        }
    }

    /// Whether the command could not be started at all.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self.kind, FailureKind::Spawn(_))
    }

    /// Exit code, when the command ran and exited with one.
    pub fn exit_code(&self) -> Option<i32> {
        match self.kind {
            FailureKind::Exited { code } => code,
            FailureKind::Spawn(_) => None,
        }
    }
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args.join(" "))?;
        }
        write!(f, ": {}", self.kind)?;
        if !self.stderr.is_empty() {
            write!(f, ": {}", String::from_utf8_lossy(&self.stderr))?;
        }
        Ok(())
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            FailureKind::Spawn(err) => Some(err),
            FailureKind::Exited { .. } => None,
        }
    }
}

/// Runs invocations. Abstracted so discovery and verification can be driven
/// by fake toolchains in tests.
pub trait Invoker {
    /// Run the invocation to completion, capturing its output.
    fn output(&self, invocation: &Invocation) -> Result<CommandOutput, InvokeError>;
}

/// [`Invoker`] backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn output(&self, invocation: &Invocation) -> Result<CommandOutput, InvokeError> {
        output(invocation)
    }
}

/// Execute an invocation and return its trimmed stdout and stderr.
pub fn output(invocation: &Invocation) -> Result<CommandOutput, InvokeError> {
    let start = Instant::now();

    tracing::debug!(
        "Invoking {} {}",
        invocation.program.display(),
        invocation.args.join(" ")
    );

    let out = invocation
        .to_command()
        .output()
        .map_err(|e| {
            InvokeError::new(invocation, Vec::new(), Vec::new(), FailureKind::Spawn(e))
        })?;

    tracing::debug!(
        "{} exited with {} after {:?}",
        invocation.program.display(),
        out.status,
        start.elapsed()
    );
    let stdout = normalize(&out.stdout);
    let stderr = normalize(&out.stderr);

    if out.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(InvokeError::new(
            invocation,
            stdout,
            stderr,
            FailureKind::Exited {
                code: out.status.code(),
            },
        ))
    }
}

/// Execute an invocation, discarding its output on success.
pub fn run(invocation: &Invocation) -> Result<(), InvokeError> {
    output(invocation).map(|_| ())
}

/// Strip leading and trailing whitespace.
fn normalize(bytes: &[u8]) -> Vec<u8> {
    bytes.trim_ascii().to_vec()
}
