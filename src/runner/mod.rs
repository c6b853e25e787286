//! Verification orchestration.
//!
//! - [`mode`] - Which `go` subcommand verifies a package
//! - [`classify`] - Turning command results into outcomes
//! - [`scan`] - Running the verification against each release
//! - [`report`] - Writing diagnostics

pub mod classify;
pub mod mode;
pub mod report;
pub mod scan;

pub use classify::{classify, FatalPredicate, NeverFatal, Outcome, StderrPrefixFatal};
pub use mode::VerifyMode;
pub use report::{write_diagnostic, write_report};
pub use scan::{Diagnostic, ScanReport, ScanRunner};
