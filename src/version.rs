//! Go toolchain version parsing and ordering.
//!
//! Versions follow the shape `go<major>.<minor>[.<patch>][<pre-release>]`,
//! for example `go1.16`, `go1.16.3`, `go1.6beta1` or `go1.17-3f4977bd58`.
//! A leading `-` is kept as part of the pre-release suffix.
//!
//! # Example
//!
//! ```
//! use go_compat::version::Version;
//!
//! let v = Version::parse("go1.16beta1").unwrap();
//! assert_eq!(v.to_string(), "1.16beta1");
//! assert!(v < Version::parse("go1.16").unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Prefix every toolchain version carries.
pub const PREFIX: &str = "go";

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)(?:\.(0|[1-9]\d*))?(.*)$").unwrap()
});

/// Errors produced while parsing a version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not start with `go`.
    #[error("parse: version {0:?} does not have the \"go\" prefix")]
    MissingPrefix(String),

    /// The text after the prefix is not `major.minor[.patch][pre]`.
    #[error("parse: unable to parse version {0}")]
    Malformed(String),

    /// A numeric component does not fit in a `u32`.
    #[error("parse: invalid {component} in version {version}")]
    InvalidNumber {
        component: &'static str,
        version: String,
    },

    /// A `go version` line without a version field.
    #[error("parse: unexpected version line {0:?}")]
    MalformedLine(String),
}

/// A Go release version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Empty for final releases.
    pub pre_release: String,
}

impl Version {
    /// Create a final release version.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
        }
    }

    /// Attach a pre-release suffix.
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Parse a `go`-prefixed version such as `go1.16.3`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rest = text
            .strip_prefix(PREFIX)
            .ok_or_else(|| ParseError::MissingPrefix(text.to_string()))?;

        let caps = VERSION_REGEX
            .captures(rest)
            .ok_or_else(|| ParseError::Malformed(rest.to_string()))?;

        let number = |idx: usize, component: &'static str| -> Result<u32, ParseError> {
            match caps.get(idx) {
                None => Ok(0),
                Some(m) => m.as_str().parse().map_err(|_| ParseError::InvalidNumber {
                    component,
                    version: rest.to_string(),
                }),
            }
        };

        Ok(Self {
            major: number(1, "major")?,
            minor: number(2, "minor")?,
            patch: number(3, "patch")?,
            pre_release: caps
                .get(4)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Parse the first line printed by `go version`.
    ///
    /// Stable releases print `go version go<version> <os>/<arch>`, while
    /// development builds print
    /// `go version devel go<version> <timestamp> <os>/<arch>`.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let token = match fields.get(2) {
            Some(&"devel") => fields.get(3),
            other => other,
        };

        match token {
            Some(token) => Self::parse(token),
            None => Err(ParseError::MalformedLine(line.to_string())),
        }
    }

    /// Whether this is a final release.
    pub fn is_final(&self) -> bool {
        self.pre_release.is_empty()
    }

    /// Whether this is the zero version, used as "no lower bound".
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Compare two versions by precedence.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }

    /// Whether `self` has lower precedence than `other`.
    pub fn less(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// A final release outranks any pre-release of the same triple. Two
/// pre-releases compare as plain strings, so `rc1` > `beta2`.
fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        _ if a == b => Ordering::Equal,
        (true, _) => Ordering::Greater,
        (_, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch > 0 {
            write!(f, ".{}", self.patch)?;
        }
        f.write_str(&self.pre_release)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
