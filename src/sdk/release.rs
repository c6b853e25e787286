//! Installed Go releases.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::shell::Invocation;
use crate::version::{Version, PREFIX};

/// Environment variable pinning a toolchain to its own installation.
pub const GOROOT_VAR: &str = "GOROOT";

/// One installed release: its version and the `GOROOT` it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub root: PathBuf,
    pub version: Version,
}

impl Release {
    pub fn new(root: impl Into<PathBuf>, version: Version) -> Self {
        Self {
            root: root.into(),
            version,
        }
    }

    /// Path of the `go` command for this release.
    pub fn go_command(&self) -> PathBuf {
        go_command(&self.root)
    }

    /// Build an invocation of this release's `go` command with `GOROOT`
    /// pinned to the release.
    pub fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        toolchain_invocation(&self.root, args)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.version)
    }
}

/// Path of the `go` command under a `GOROOT`.
pub fn go_command(root: &Path) -> PathBuf {
    let exe = if cfg!(windows) { "go.exe" } else { "go" };
    root.join("bin").join(exe)
}

pub(crate) fn toolchain_invocation<I, S>(root: &Path, args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Invocation::new(go_command(root))
        .args(args)
        .env(GOROOT_VAR, root.as_os_str())
}
