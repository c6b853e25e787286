//! Verification modes.

use std::fmt;

use clap::ValueEnum;

/// Which `go` subcommand verifies a package against a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VerifyMode {
    /// Static checks with `go vet`.
    #[default]
    Vet,
    /// Compile with `go build`.
    Build,
    /// Run `go test`.
    Test,
}

impl VerifyMode {
    /// The `go` subcommand for this mode.
    pub fn subcommand(self) -> &'static str {
        match self {
            Self::Vet => "vet",
            Self::Build => "build",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for VerifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}
