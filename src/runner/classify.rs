//! Classification of verification results.
//!
//! A command that could not be started at all is fatal: the toolchain is
//! unusable and the scan stops. A command that ran and exited non-zero is a
//! diagnostic to report, since the usual cause is the package not
//! satisfying an older release. A [`FatalPredicate`] may escalate chosen
//! non-zero exits to fatal.
//!
//! A diagnostic carries stderr verbatim, or stdout when stderr is empty
//! (`go test` prints failing tests to stdout).

use crate::shell::{CommandOutput, InvokeError};

/// Result of verifying one release.
#[derive(Debug)]
pub enum Outcome {
    /// The command succeeded.
    Clean,

    /// The command ran and failed; carries its failure output.
    Diagnostic(Vec<u8>),

    /// The command could not be invoked; ends the scan.
    Fatal(InvokeError),
}

impl Outcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

/// Decides whether a command that ran and exited non-zero is fatal.
pub trait FatalPredicate {
    fn is_fatal(&self, err: &InvokeError) -> bool;
}

impl<F> FatalPredicate for F
where
    F: Fn(&InvokeError) -> bool,
{
    fn is_fatal(&self, err: &InvokeError) -> bool {
        self(err)
    }
}

/// Treats every non-zero exit as a diagnostic.
///
/// `go vet` exits 1 with stderr starting with `package` when build
/// constraints exclude all files, and exits 2 with stderr starting with
/// `# <pkg>` on syntax or type errors. Both are reported, not fatal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFatal;

impl FatalPredicate for NeverFatal {
    fn is_fatal(&self, _err: &InvokeError) -> bool {
        false
    }
}

/// Escalates non-zero exits whose stderr starts with one of the prefixes.
#[derive(Debug, Clone, Default)]
pub struct StderrPrefixFatal {
    prefixes: Vec<Vec<u8>>,
}

impl StderrPrefixFatal {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            prefixes: prefixes.into_iter().map(|p| p.as_ref().to_vec()).collect(),
        }
    }
}

impl FatalPredicate for StderrPrefixFatal {
    fn is_fatal(&self, err: &InvokeError) -> bool {
        self.prefixes.iter().any(|p| err.stderr.starts_with(p))
    }
}

/// Classify the result of running a verification command.
pub fn classify(
    result: Result<CommandOutput, InvokeError>,
    predicate: &dyn FatalPredicate,
) -> Outcome {
    match result {
        Ok(_) => Outcome::Clean,
        Err(err) if err.is_spawn_failure() => Outcome::Fatal(err),
        Err(err) if predicate.is_fatal(&err) => Outcome::Fatal(err),
        Err(err) if err.stderr.is_empty() => Outcome::Diagnostic(err.stdout),
        Err(err) => Outcome::Diagnostic(err.stderr),
    }
}
