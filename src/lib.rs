//! Export-name resolution for `${placeholder}` naming patterns.
//!
//! A pattern such as `${fileBasenameNoExtension}_v${#}.${exportExtension}`
//! is resolved against a source file, its project root, and an optional
//! export extension. The `${#}` marker becomes the next unused version
//! number found in the destination directory.
pub mod config;
pub mod context;
pub mod fs;
pub mod notify;
pub mod placeholder;
pub mod resolver;
pub mod root;
pub mod version;

#[cfg(test)]
mod test_support;

pub use config::ResolverConfig;
pub use context::ResolutionContext;
pub use fs::{DestinationFs, TokioFs};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use placeholder::{evaluate, Placeholder, VERSION_MARKER};
pub use resolver::{substitute, PatternResolver, Resolution, DEFAULT_NAMING_PATTERN};
pub use root::{MarkerRootLocator, NoRoot, ProjectRootLocator, WorkspaceFolders};
pub use version::{next_version, VersionOutcome};
