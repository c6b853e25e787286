//! Error types for go-compat operations.
//!
//! This module defines [`CompatError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lower layers (version parsing, subprocess invocation) return fully
//!   structured errors and never swallow them
//! - Only the runner decides whether a failed verification is reported as a
//!   diagnostic or becomes a [`CompatError::Verification`] that ends the scan
//! - Use `anyhow::Error` (via `CompatError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::shell::InvokeError;
use crate::version::ParseError;

/// Core error type for go-compat operations.
#[derive(Debug, Error)]
pub enum CompatError {
    /// A version string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The SDK root could not be listed.
    #[error("failed to read sdk directory {path}: {source}")]
    SdkUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No release in the SDK root qualified.
    #[error("no go releases found in {path}")]
    NoReleases { path: PathBuf },

    /// A candidate toolchain could not report its version.
    #[error(transparent)]
    VersionProbe(InvokeError),

    /// A verification command could not be invoked; ends the scan.
    #[error(transparent)]
    Verification(InvokeError),

    /// The home directory is unknown and no SDK root was given.
    #[error("failed to get home directory; set GOSDK or pass --sdk")]
    NoHomeDir,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for go-compat operations.
pub type Result<T> = std::result::Result<T, CompatError>;
