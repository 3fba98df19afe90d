//! Pattern resolution.
//!
//! Resolution runs in two phases. The first substitutes every placeholder
//! the context can answer and leaves `${#}` in place. The second runs only
//! when `${#}` survived: it scans the destination directory and swaps in
//! the next version number. Only the second phase touches the filesystem.
use crate::config::ResolverConfig;
use crate::context::ResolutionContext;
use crate::fs::DestinationFs;
use crate::notify::Notifier;
use crate::placeholder::{evaluate, VERSION_MARKER};
use crate::root::ProjectRootLocator;
use crate::version::{next_version, VersionOutcome};
use regex::{Captures, Regex};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Pattern applied when the caller supplies none.
pub const DEFAULT_NAMING_PATTERN: &str = "${fileBasenameNoExtension}.${exportExtension}";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{(.*?)\}").expect("regex for placeholders"))
}

/// Substitute every context placeholder in `pattern`, left to right.
///
/// Unknown names and `${#}` are kept verbatim.
pub fn substitute(pattern: &str, ctx: &ResolutionContext) -> String {
    placeholder_regex()
        .replace_all(pattern, |caps: &Captures| evaluate(&caps[1], ctx))
        .into_owned()
}

/// A resolved string together with how its version marker was handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub pattern: String,
    pub resolved: String,
    #[serde(skip)]
    pub version: VersionOutcome,
    pub version_code: i64,
}

/// Resolves naming patterns for files.
///
/// Holds the configuration read-only; calls share no other state, so two
/// concurrent calls against one directory may pick the same version.
pub struct PatternResolver<'a, F, N> {
    config: &'a ResolverConfig,
    fs: F,
    notifier: N,
}

impl<'a, F: DestinationFs, N: Notifier> PatternResolver<'a, F, N> {
    pub fn new(config: &'a ResolverConfig, fs: F, notifier: N) -> Self {
        Self {
            config,
            fs,
            notifier,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        self.config
    }

    /// Build a context for `file`, falling back to the configured export
    /// extension when `export_extension` is absent or empty.
    pub fn context_for(
        &self,
        file: impl Into<PathBuf>,
        locator: &dyn ProjectRootLocator,
        export_extension: Option<String>,
    ) -> ResolutionContext {
        ResolutionContext::located(file, locator)
            .with_export_extension(export_extension)
            .with_default_export_extension(self.config.default_export_extension.as_deref())
    }

    /// Resolve `pattern` (or the configured default) into a final string.
    pub async fn resolve(&self, pattern: Option<&str>, ctx: &ResolutionContext) -> String {
        self.resolve_detailed(pattern, ctx).await.resolved
    }

    /// Like `resolve`, but also reports the version outcome.
    pub async fn resolve_detailed(
        &self,
        pattern: Option<&str>,
        ctx: &ResolutionContext,
    ) -> Resolution {
        let pattern = match pattern {
            Some(pattern) if !pattern.is_empty() => pattern,
            _ => self.config.naming_pattern.as_str(),
        };
        let intermediate = substitute(pattern, ctx);
        tracing::debug!(pattern, intermediate = %intermediate, "placeholders substituted");

        let version = next_version(&intermediate, ctx, &self.fs).await;
        let resolved = match &version {
            VersionOutcome::NotRequested => intermediate,
            VersionOutcome::Resolved(number) => {
                intermediate.replace(VERSION_MARKER, &number.to_string())
            }
            VersionOutcome::ScanFailed { directory, reason } => {
                self.notifier.warn(&format!(
                    "Could not determine the next version number for {}: {reason}",
                    directory.display()
                ));
                intermediate
            }
        };

        Resolution {
            pattern: pattern.to_string(),
            resolved,
            version_code: version.code(),
            version,
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
