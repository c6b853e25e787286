//! Scan orchestration across releases.

use std::time::{Duration, Instant};

use crate::error::CompatError;
use crate::sdk::Release;
use crate::shell::Invoker;

use super::classify::{classify, FatalPredicate, NeverFatal, Outcome};
use super::mode::VerifyMode;

/// A release the package failed to verify against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The release that reported the problem.
    pub release: Release,
    /// Failure output of the verification command.
    pub message: Vec<u8>,
}

/// Result of scanning a list of releases.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Number of releases verified, including the one that aborted the scan.
    pub checked: usize,
    /// Diagnostics, in ascending release order.
    pub diagnostics: Vec<Diagnostic>,
    /// Error that ended the scan early, if any.
    pub fatal: Option<CompatError>,
    /// Total duration, logged with the scan summary.
    pub duration: Duration,
}

impl ScanReport {
    /// Whether every verified release was clean.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.fatal.is_none()
    }

    /// Whether the scan stopped before the last release.
    pub fn aborted(&self) -> bool {
        self.fatal.is_some()
    }
}

/// Verifies a package against each release in turn.
///
/// Releases are processed one at a time. The runner performs no output of
/// its own; results are collected in a [`ScanReport`].
pub struct ScanRunner<'a> {
    invoker: &'a dyn Invoker,
    mode: VerifyMode,
    predicate: Box<dyn FatalPredicate + 'a>,
}

impl<'a> ScanRunner<'a> {
    /// Create a runner using [`NeverFatal`] classification.
    pub fn new(invoker: &'a dyn Invoker, mode: VerifyMode) -> Self {
        Self {
            invoker,
            mode,
            predicate: Box::new(NeverFatal),
        }
    }

    /// Replace the predicate deciding which non-zero exits are fatal.
    pub fn with_predicate(mut self, predicate: impl FatalPredicate + 'a) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    /// Verify a single release.
    pub fn verify(&self, release: &Release, patterns: &[String]) -> Outcome {
        let args =
            std::iter::once(self.mode.subcommand().to_string()).chain(patterns.iter().cloned());
        let invocation = release.invocation(args);

        classify(self.invoker.output(&invocation), self.predicate.as_ref())
    }

    /// Verify every release in order, stopping at the first fatal outcome.
    pub fn run_all(&self, releases: &[Release], patterns: &[String]) -> ScanReport {
        let start = Instant::now();
        let mut report = ScanReport::default();

        for release in releases {
            tracing::debug!("Running go {} with {}", self.mode, release);
            report.checked += 1;

            match self.verify(release, patterns) {
                Outcome::Clean => {}
                Outcome::Diagnostic(message) => report.diagnostics.push(Diagnostic {
                    release: release.clone(),
                    message,
                }),
                Outcome::Fatal(err) => {
                    report.fatal = Some(CompatError::Verification(err));
                    break;
                }
            }
        }

        report.duration = start.elapsed();
        tracing::info!(
            "Checked {} of {} releases in {:?}, {} with diagnostics",
            report.checked,
            releases.len(),
            report.duration,
            report.diagnostics.len()
        );

        report
    }
}
