//! go-compat - Check a Go package against every installed Go release.
//!
//! go-compat discovers the Go releases installed under an SDK directory
//! (by default `~/sdk`, where `golang.org/dl` wrappers put them), runs
//! `go vet`, `go build` or `go test` with each one, and reports the
//! releases the package does not work with.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Verification across releases and reporting
//! - [`sdk`] - SDK configuration and release discovery
//! - [`shell`] - Subprocess invocation
//! - [`version`] - Go version parsing and ordering
//!
//! # Example
//!
//! ```
//! use go_compat::runner::{ScanRunner, VerifyMode};
//! use go_compat::sdk::Release;
//! use go_compat::shell::{MockInvoker, MockResponse};
//! use go_compat::version::Version;
//!
//! let release = Release::new("/sdk/go1.16", Version::new(1, 16, 0));
//! let invoker = MockInvoker::new();
//! invoker.respond(release.go_command(), "vet", MockResponse::exit(1, "vet: unusedresult"));
//!
//! let report = ScanRunner::new(&invoker, VerifyMode::Vet).run_all(&[release], &[]);
//! assert_eq!(report.diagnostics.len(), 1);
//! ```

pub mod cli;
pub mod error;
pub mod runner;
pub mod sdk;
pub mod shell;
pub mod version;

pub use error::{CompatError, Result};
