//! Version scanning for the `${#}` marker.
//!
//! After every context placeholder has been substituted, a surviving `${#}`
//! is replaced with one more than the highest number already used by
//! matching entries in the destination directory.
use crate::context::ResolutionContext;
use crate::fs::DestinationFs;
use crate::placeholder::VERSION_MARKER;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Capture group standing in for the marker: no leading zeros, minimum 1.
const VERSION_DIGITS: &str = "([1-9][0-9]*)";

/// Result of scanning for the next version number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionOutcome {
    /// The pattern has no version marker; nothing was scanned.
    NotRequested,
    /// The next unused version number (always at least 1).
    Resolved(u64),
    /// The destination directory could not be created or listed.
    ScanFailed { directory: PathBuf, reason: String },
}

impl VersionOutcome {
    /// Integer encoding used by hosts: -1 not requested, -2 scan failed,
    /// otherwise the version itself.
    pub fn code(&self) -> i64 {
        match self {
            VersionOutcome::NotRequested => -1,
            VersionOutcome::Resolved(version) => i64::try_from(*version).unwrap_or(i64::MAX),
            VersionOutcome::ScanFailed { .. } => -2,
        }
    }
}

/// Where a resolved pattern lands: its directory and final file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub directory: PathBuf,
    pub basename: String,
}

impl Destination {
    /// Absolute patterns keep their own directory; relative ones resolve
    /// against the directory of the context file.
    pub fn of(pattern: &str, ctx: &ResolutionContext) -> Self {
        let target = Path::new(pattern);
        let full = if target.is_absolute() {
            target.to_path_buf()
        } else {
            ctx.file_dir().join(target)
        };
        let directory = match full.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let basename = full
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            directory,
            basename,
        }
    }
}

/// Build the anchored regex matching entry names produced by `basename`.
///
/// Literal text is escaped; each `${#}` becomes a digit capture group.
pub fn version_regex(basename: &str) -> Result<Regex> {
    let body = basename
        .split(VERSION_MARKER)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(VERSION_DIGITS);
    Regex::new(&format!("^{body}$"))
        .with_context(|| format!("compile version regex for {basename:?}"))
}

/// Version number embedded in `entry`, if it matches.
///
/// With several markers every capture must carry the same number.
pub fn matched_version(regex: &Regex, entry: &str) -> Option<u64> {
    let captures = regex.captures(entry)?;
    let mut found = None;
    for group in captures.iter().skip(1) {
        let value = group?.as_str().parse::<u64>().ok()?;
        match found {
            Some(previous) if previous != value => return None,
            _ => found = Some(value),
        }
    }
    found
}

/// Create the destination directory when it is missing.
///
/// Only the leaf is created; a missing parent is an error.
pub async fn ensure_destination_dir<F: DestinationFs>(fs: &F, dir: &Path) -> Result<()> {
    if fs.exists(dir).await {
        return Ok(());
    }
    tracing::info!(directory = %dir.display(), "creating export directory");
    fs.create_dir(dir).await
}

/// Highest version among `entries` (0 when none match).
pub fn highest_version<'a>(regex: &Regex, entries: impl IntoIterator<Item = &'a str>) -> u64 {
    entries
        .into_iter()
        .filter_map(|entry| {
            let version = matched_version(regex, entry);
            if let Some(version) = version {
                tracing::debug!(entry, version, "existing version");
            }
            version
        })
        .max()
        .unwrap_or(0)
}

/// Compute the next version number for `pattern`.
///
/// Patterns without `${#}` return `NotRequested` without touching `fs`.
pub async fn next_version<F: DestinationFs>(
    pattern: &str,
    ctx: &ResolutionContext,
    fs: &F,
) -> VersionOutcome {
    if !pattern.contains(VERSION_MARKER) {
        return VersionOutcome::NotRequested;
    }

    let destination = Destination::of(pattern, ctx);
    let failed = |reason: anyhow::Error| VersionOutcome::ScanFailed {
        directory: destination.directory.clone(),
        reason: format!("{reason:#}"),
    };

    let regex = match version_regex(&destination.basename) {
        Ok(regex) => regex,
        Err(err) => return failed(err),
    };
    tracing::debug!(
        directory = %destination.directory.display(),
        regex = regex.as_str(),
        "scanning for existing versions"
    );

    if let Err(err) = ensure_destination_dir(fs, &destination.directory).await {
        return failed(err);
    }
    let entries = match fs.list_entries(&destination.directory).await {
        Ok(entries) => entries,
        Err(err) => return failed(err),
    };

    let highest = highest_version(&regex, entries.iter().map(String::as_str));
    let next = highest.saturating_add(1);
    tracing::debug!(highest, next, "version resolved");
    VersionOutcome::Resolved(next)
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
