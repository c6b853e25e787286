//! Discovery of installed Go releases.
//!
//! Every `go*` directory under the SDK root is asked for its own version
//! with `go version`, run with `GOROOT` pinned to that directory so each
//! release reports itself rather than a globally configured toolchain.

use std::fs;
use std::path::PathBuf;

use crate::error::{CompatError, Result};
use crate::shell::Invoker;
use crate::version::{Version, PREFIX};

use super::config::SdkConfig;
use super::release::{toolchain_invocation, Release};

/// List the releases installed in the SDK root that are at least `since`,
/// sorted by ascending version.
///
/// A zero `since` keeps every release. Finding no qualifying release is an
/// error.
pub fn discover(
    config: &SdkConfig,
    since: &Version,
    invoker: &dyn Invoker,
) -> Result<Vec<Release>> {
    let mut releases = Vec::new();

    for root in candidate_roots(config)? {
        let release = probe(root, invoker)?;

        if !since.is_zero() && release.version.less(since) {
            tracing::debug!("Skipping {} (older than go{})", release, since);
            continue;
        }

        tracing::debug!("Found {} at {}", release, release.root.display());
        releases.push(release);
    }

    if releases.is_empty() {
        return Err(CompatError::NoReleases {
            path: config.root.clone(),
        });
    }

    // Stable: releases reporting the same version keep listing order.
    releases.sort_by(|a, b| a.version.cmp(&b.version));

    Ok(releases)
}

/// Directories under the SDK root whose name starts with `go`, sorted by name.
fn candidate_roots(config: &SdkConfig) -> Result<Vec<PathBuf>> {
    let unreadable = |source| CompatError::SdkUnreadable {
        path: config.root.clone(),
        source,
    };

    let mut roots = Vec::new();
    for entry in fs::read_dir(&config.root).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let is_candidate = entry.file_name().to_string_lossy().starts_with(PREFIX);
        let path = entry.path();
        if is_candidate && path.is_dir() {
            roots.push(path);
        }
    }
    roots.sort();

    Ok(roots)
}

/// Ask the toolchain at `root` for its version.
fn probe(root: PathBuf, invoker: &dyn Invoker) -> Result<Release> {
    let invocation = toolchain_invocation(&root, ["version"]);
    let output = invoker
        .output(&invocation)
        .map_err(CompatError::VersionProbe)?;

    let stdout = output.stdout_text();
    let line = stdout.lines().next().unwrap_or_default();
    let version = Version::parse_line(line)?;

    Ok(Release::new(root, version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::release::go_command;
    use crate::shell::{MockInvoker, MockResponse};
    use std::path::Path;
    use tempfile::TempDir;

    /// Creates `go*` directories and teaches the mock what each reports.
    fn setup_sdk(releases: &[(&str, &str)]) -> (TempDir, MockInvoker) {
        let temp = TempDir::new().unwrap();
        let invoker = MockInvoker::new();
        for (dir, report) in releases {
            let root = temp.path().join(dir);
            fs::create_dir_all(root.join("bin")).unwrap();
            invoker.respond(go_command(&root), "version", MockResponse::stdout(report));
        }
        (temp, invoker)
    }

    fn versions(releases: &[Release]) -> Vec<String> {
        releases.iter().map(ToString::to_string).collect()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn discover_all(temp: &TempDir, invoker: &MockInvoker) -> Result<Vec<Release>> {
        discover(&SdkConfig::new(temp.path()), &Version::default(), invoker)
    }

    #[test]
    fn discovers_and_sorts_releases() {
        let (temp, invoker) = setup_sdk(&[
            ("go1.16", "go version go1.16 linux/amd64"),
            ("go1.6", "go version go1.6 linux/amd64"),
            ("go1.16beta1", "go version go1.16beta1 linux/amd64"),
        ]);

        let releases = discover_all(&temp, &invoker).unwrap();

        assert_eq!(versions(&releases), ["go1.6", "go1.16beta1", "go1.16"]);
        assert_eq!(releases[0].root, temp.path().join("go1.6"));
    }

    #[test]
    fn filters_releases_older_than_since() {
        let (temp, invoker) = setup_sdk(&[
            ("go1.14", "go version go1.14 linux/amd64"),
            ("go1.15", "go version go1.15 linux/amd64"),
            ("go1.16", "go version go1.16 linux/amd64"),
        ]);

        let releases = discover(&SdkConfig::new(temp.path()), &v("go1.15"), &invoker).unwrap();

        assert_eq!(versions(&releases), ["go1.15", "go1.16"]);
    }

    #[test]
    fn version_reported_by_toolchain_wins_over_dir_name() {
        let (temp, invoker) = setup_sdk(&[(
            "gotip",
            "go version devel go1.17-3f4977bd58 Tue Apr 20 17:05:31 2021 +0000 linux/amd64",
        )]);

        let releases = discover_all(&temp, &invoker).unwrap();

        assert_eq!(versions(&releases), ["go1.17-3f4977bd58"]);
    }

    #[test]
    fn probe_pins_goroot() {
        let (temp, invoker) = setup_sdk(&[("go1.16", "go version go1.16 linux/amd64")]);

        discover_all(&temp, &invoker).unwrap();

        let calls = invoker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, ["version"]);
        assert_eq!(
            calls[0].env_value("GOROOT").map(|v| Path::new(v).to_path_buf()),
            Some(temp.path().join("go1.16"))
        );
    }

    #[test]
    fn ignores_files_and_unprefixed_dirs() {
        let (temp, invoker) = setup_sdk(&[("go1.16", "go version go1.16 linux/amd64")]);
        fs::create_dir_all(temp.path().join("cache")).unwrap();
        fs::write(temp.path().join("go1.15.tar.gz"), "").unwrap();

        let releases = discover_all(&temp, &invoker).unwrap();

        assert_eq!(versions(&releases), ["go1.16"]);
        assert_eq!(invoker.calls().len(), 1);
    }

    #[test]
    fn empty_sdk_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = discover(
            &SdkConfig::new(temp.path()),
            &Version::default(),
            &MockInvoker::new(),
        )
        .unwrap_err();

        assert!(matches!(err, CompatError::NoReleases { .. }));
    }

    #[test]
    fn everything_filtered_is_an_error() {
        let (temp, invoker) = setup_sdk(&[("go1.14", "go version go1.14 linux/amd64")]);

        let err = discover(&SdkConfig::new(temp.path()), &v("go1.15"), &invoker).unwrap_err();

        assert!(matches!(err, CompatError::NoReleases { .. }));
    }

    #[test]
    fn missing_sdk_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = SdkConfig::new(temp.path().join("nope"));

        let err = discover(&config, &Version::default(), &MockInvoker::new()).unwrap_err();

        assert!(matches!(err, CompatError::SdkUnreadable { .. }));
    }

    #[test]
    fn unparsable_version_is_an_error() {
        let (temp, invoker) = setup_sdk(&[("go1.16", "go version weird linux/amd64")]);

        let err = discover_all(&temp, &invoker).unwrap_err();

        assert!(matches!(err, CompatError::Parse(_)));
    }

    #[test]
    fn failing_probe_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("go1.16")).unwrap();

        // No response configured: the go command is missing.
        let err = discover(
            &SdkConfig::new(temp.path()),
            &Version::default(),
            &MockInvoker::new(),
        )
        .unwrap_err();

        match err {
            CompatError::VersionProbe(e) => assert!(e.is_spawn_failure()),
            other => panic!("expected VersionProbe, got {other:?}"),
        }
    }
}
