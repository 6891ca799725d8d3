//! Cached access to the resolved type spec.
//!
//! Resolution of the extractor document is pure but not cheap, and the
//! document changes rarely. `TypeSpecStore` keeps the last result keyed on
//! the file's modification time:
//!
//! - A call with an unchanged mtime returns the cached modules.
//! - A changed mtime (even with identical content) triggers one re-resolution.
//! - The snapshot lock is held across the refresh, so concurrent callers
//!   wait for the in-flight computation and share its result.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use tokio::sync::Mutex;
use tracing::{debug, info};
use typespec_common::{Entry, EntryRef, Module};
use typespec_resolver::{ResolveOptions, parse_and_resolve};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read type spec {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("type spec {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("type spec resolution task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

struct Snapshot {
    modified: SystemTime,
    modules: Arc<[Module]>,
}

pub struct TypeSpecStore {
    path: PathBuf,
    options: ResolveOptions,
    snapshot: Mutex<Option<Snapshot>>,
    recomputations: AtomicU64,
}

impl TypeSpecStore {
    pub fn new(path: impl Into<PathBuf>, options: ResolveOptions) -> Self {
        Self {
            path: path.into(),
            options,
            snapshot: Mutex::new(None),
            recomputations: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times the document has been resolved.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// All resolved modules, re-resolving if the document changed.
    pub async fn modules(&self) -> Result<Arc<[Module]>, StoreError> {
        let mut snapshot = self.snapshot.lock().await;
        let modified = self.modified().await?;

        if let Some(current) = snapshot.as_ref() {
            if current.modified == modified {
                return Ok(Arc::clone(&current.modules));
            }
            debug!(path = %self.path.display(), "type spec changed on disk");
        }

        let modules = self.resolve().await?;
        *snapshot = Some(Snapshot {
            modified,
            modules: Arc::clone(&modules),
        });
        Ok(modules)
    }

    /// Find the signature or named type stored under `reference` in any
    /// module, first match wins.
    pub async fn lookup(&self, reference: &str) -> Result<Option<Entry>, StoreError> {
        let modules = self.modules().await?;
        Ok(modules
            .iter()
            .find_map(|module| module.lookup(reference))
            .map(EntryRef::cloned))
    }

    /// Drop the cached snapshot; the next call re-resolves.
    pub async fn invalidate(&self) {
        self.snapshot.lock().await.take();
    }

    async fn modified(&self) -> Result<SystemTime, StoreError> {
        tokio::fs::metadata(&self.path)
            .await
            .and_then(|metadata| metadata.modified())
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    async fn resolve(&self) -> Result<Arc<[Module]>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        let options = self.options.clone();
        let modules = tokio::task::spawn_blocking(move || parse_and_resolve(&bytes, &options))
            .await?
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        self.recomputations.fetch_add(1, Ordering::Relaxed);
        info!(
            path = %self.path.display(),
            modules = modules.len(),
            "resolved type spec"
        );
        Ok(modules.into())
    }
}
