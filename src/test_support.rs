//! In-memory collaborators for unit tests.
use crate::fs::DestinationFs;
use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Directory tree held in memory; counts every filesystem call.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: Mutex<BTreeMap<PathBuf, Vec<String>>>,
    unreadable: BTreeSet<PathBuf>,
    calls: AtomicUsize,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, dir: &str, entries: &[&str]) -> Self {
        self.dirs.lock().expect("dirs lock").insert(
            PathBuf::from(dir),
            entries.iter().map(|entry| entry.to_string()).collect(),
        );
        self
    }

    /// Directory that exists but fails to list.
    pub fn with_unreadable_dir(mut self, dir: &str) -> Self {
        self.dirs
            .lock()
            .expect("dirs lock")
            .insert(PathBuf::from(dir), Vec::new());
        self.unreadable.insert(PathBuf::from(dir));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn has_dir(&self, dir: &str) -> bool {
        self.dirs
            .lock()
            .expect("dirs lock")
            .contains_key(Path::new(dir))
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl DestinationFs for MemoryFs {
    async fn exists(&self, dir: &Path) -> bool {
        self.record();
        self.dirs.lock().expect("dirs lock").contains_key(dir)
    }

    async fn create_dir(&self, dir: &Path) -> Result<()> {
        self.record();
        self.dirs
            .lock()
            .expect("dirs lock")
            .insert(dir.to_path_buf(), Vec::new());
        Ok(())
    }

    async fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        self.record();
        if self.unreadable.contains(dir) {
            return Err(anyhow!("permission denied: {}", dir.display()));
        }
        self.dirs
            .lock()
            .expect("dirs lock")
            .get(dir)
            .cloned()
            .ok_or_else(|| anyhow!("no such directory: {}", dir.display()))
    }
}
