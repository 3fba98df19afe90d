//! Filesystem access used by the version scanner.
//!
//! Only three operations are needed: an existence check, creating a single
//! missing directory, and listing a directory's immediate entries. Keeping
//! them behind a trait lets tests replace disk access entirely.
use anyhow::{Context, Result};
use std::future::Future;
use std::path::Path;

pub trait DestinationFs {
    fn exists(&self, dir: &Path) -> impl Future<Output = bool> + Send;

    /// Create `dir`. Its parent must already exist.
    fn create_dir(&self, dir: &Path) -> impl Future<Output = Result<()>> + Send;

    /// Names of the immediate entries of `dir`.
    fn list_entries(&self, dir: &Path) -> impl Future<Output = Result<Vec<String>>> + Send;
}

impl<F: DestinationFs + ?Sized> DestinationFs for &F {
    fn exists(&self, dir: &Path) -> impl Future<Output = bool> + Send {
        (**self).exists(dir)
    }

    fn create_dir(&self, dir: &Path) -> impl Future<Output = Result<()>> + Send {
        (**self).create_dir(dir)
    }

    fn list_entries(&self, dir: &Path) -> impl Future<Output = Result<Vec<String>>> + Send {
        (**self).list_entries(dir)
    }
}

/// Disk-backed implementation on top of `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl DestinationFs for TokioFs {
    async fn exists(&self, dir: &Path) -> bool {
        tokio::fs::try_exists(dir).await.unwrap_or(false)
    }

    async fn create_dir(&self, dir: &Path) -> Result<()> {
        tokio::fs::create_dir(dir)
            .await
            .with_context(|| format!("create directory {}", dir.display()))
    }

    async fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        let mut reader = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("read directory {}", dir.display()))?;
        let mut names = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .with_context(|| format!("read entry in {}", dir.display()))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
