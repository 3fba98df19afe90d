//! Project-root lookup for files.
//!
//! Workspace-relative placeholders need the directory that governs a file.
//! Hosts supply that through a `ProjectRootLocator`; a file outside every
//! known root simply has none.
use std::path::{Path, PathBuf};

/// Find the project root governing a file, if any.
pub trait ProjectRootLocator {
    fn locate(&self, file: &Path) -> Option<PathBuf>;
}

/// Locator for files that never belong to a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoot;

impl ProjectRootLocator for NoRoot {
    fn locate(&self, _file: &Path) -> Option<PathBuf> {
        None
    }
}

/// An explicit set of workspace folders.
///
/// Nested folders are allowed; the deepest folder containing the file wins.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceFolders {
    folders: Vec<PathBuf>,
}

impl WorkspaceFolders {
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }
}

impl ProjectRootLocator for WorkspaceFolders {
    fn locate(&self, file: &Path) -> Option<PathBuf> {
        self.folders
            .iter()
            .filter(|folder| file.starts_with(folder))
            .max_by_key(|folder| folder.components().count())
            .cloned()
    }
}

/// Walks up from the file looking for a directory holding a marker entry.
#[derive(Debug, Clone)]
pub struct MarkerRootLocator {
    markers: Vec<String>,
}

impl MarkerRootLocator {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

impl ProjectRootLocator for MarkerRootLocator {
    fn locate(&self, file: &Path) -> Option<PathBuf> {
        let start = file.parent()?;
        let found = start.ancestors().find(|dir| {
            self.markers
                .iter()
                .any(|marker| dir.join(marker).exists())
        });
        if let Some(dir) = found {
            tracing::debug!(file = %file.display(), root = %dir.display(), "project root located");
        }
        found.map(Path::to_path_buf)
    }
}
