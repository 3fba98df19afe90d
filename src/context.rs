//! Inputs for one resolution call.
use crate::root::ProjectRootLocator;
use std::path::{Path, PathBuf};

/// File location, owning project root, and export extension for one call.
///
/// The context is built once and never mutated while a pattern resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    file: PathBuf,
    root: Option<PathBuf>,
    export_extension: Option<String>,
}

impl ResolutionContext {
    /// Context for `file` with no project root and no export extension.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            root: None,
            export_extension: None,
        }
    }

    /// Context whose root comes from `locator`.
    pub fn located(file: impl Into<PathBuf>, locator: &dyn ProjectRootLocator) -> Self {
        let file = file.into();
        let root = locator.locate(&file);
        Self::new(file).with_root(root)
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    /// Set the export extension override. Empty strings count as absent.
    pub fn with_export_extension(mut self, extension: Option<String>) -> Self {
        self.export_extension = extension.filter(|ext| !ext.is_empty());
        self
    }

    /// Fill the export extension from `default` when no override is set.
    pub fn with_default_export_extension(mut self, default: Option<&str>) -> Self {
        if self.export_extension.is_none() {
            self.export_extension = default.filter(|ext| !ext.is_empty()).map(str::to_string);
        }
        self
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn export_extension(&self) -> Option<&str> {
        self.export_extension.as_deref()
    }

    /// Directory holding the file; relative patterns resolve against it.
    pub fn file_dir(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new(""))
    }
}
