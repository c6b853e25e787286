//! SDK root configuration.
//!
//! The SDK root is resolved once at startup and passed explicitly to
//! discovery. Lookup order:
//!
//! 1. An explicit path (the `--sdk` flag)
//! 2. The `GOSDK` environment variable, when set and non-empty
//! 3. `~/sdk`, where `golang.org/dl` wrappers install releases

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{CompatError, Result};

/// Environment variable overriding the SDK root.
pub const SDK_ENV_VAR: &str = "GOSDK";

/// Directory under the home directory used when nothing else is configured.
pub const DEFAULT_SDK_DIR: &str = "sdk";

/// Where installed Go releases live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Directory containing one `go*` subdirectory per release.
    pub root: PathBuf,
}

impl SdkConfig {
    /// Use an explicit SDK root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the SDK root from the real environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with_env(explicit, |key| std::env::var_os(key), dirs::home_dir)
    }

    /// Resolve the SDK root with custom environment and home lookups.
    pub fn resolve_with_env<E, H>(explicit: Option<&Path>, env_fn: E, home_fn: H) -> Result<Self>
    where
        E: Fn(&str) -> Option<OsString>,
        H: FnOnce() -> Option<PathBuf>,
    {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }

        if let Some(value) = env_fn(SDK_ENV_VAR).filter(|v| !v.is_empty()) {
            tracing::debug!("Using SDK root from {}", SDK_ENV_VAR);
            return Ok(Self::new(value));
        }

        let home = home_fn().ok_or(CompatError::NoHomeDir)?;
        Ok(Self::new(home.join(DEFAULT_SDK_DIR)))
    }
}
