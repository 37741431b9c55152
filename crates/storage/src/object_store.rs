//! Artifact file store for rendered previews.

use bytes::Bytes;
use object_store::{local::LocalFileSystem, memory::InMemory, path::Path, ObjectStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

use league_common::{LeagueError, LeagueResult};

/// File store rooted at the upload directory.
#[derive(Clone)]
pub struct ArtifactStore {
    store: Arc<dyn ObjectStore>,
    root: Option<PathBuf>,
}

impl ArtifactStore {
    /// Store files under `root`, creating the directory if needed.
    pub fn local(root: impl Into<PathBuf>) -> LeagueResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            LeagueError::StorageError(format!("Failed to create {}: {}", root.display(), e))
        })?;

        let store = LocalFileSystem::new_with_prefix(&root).map_err(|e| {
            LeagueError::StorageError(format!("Failed to open {}: {}", root.display(), e))
        })?;

        Ok(Self {
            store: Arc::new(store),
            root: Some(root),
        })
    }

    /// Volatile store for tests.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            root: None,
        }
    }

    /// On-disk location of `name`, for local stores.
    pub fn full_path(&self, name: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|r| r.join(name))
    }

    /// Write `data` to `name`, replacing any existing file.
    #[instrument(skip(self, data), fields(name = %name))]
    pub async fn put(&self, name: &str, data: Bytes) -> LeagueResult<()> {
        let location = Path::from(name);
        debug!(size = data.len(), "Writing artifact");

        self.store
            .put(&location, data)
            .await
            .map_err(|e| LeagueError::StorageError(format!("Failed to write {}: {}", name, e)))?;

        Ok(())
    }

    /// Read the bytes of `name`; `None` when it does not exist.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn get(&self, name: &str) -> LeagueResult<Option<Bytes>> {
        let location = Path::from(name);

        let result = match self.store.get(&location).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => {
                return Err(LeagueError::StorageError(format!(
                    "Failed to read {}: {}",
                    name, e
                )))
            }
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| LeagueError::StorageError(format!("Failed to read bytes: {}", e)))?;

        debug!(size = bytes.len(), "Read artifact");
        Ok(Some(bytes))
    }

    /// Check if an artifact exists.
    pub async fn exists(&self, name: &str) -> LeagueResult<bool> {
        let location = Path::from(name);

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(LeagueError::StorageError(format!(
                "Failed to check {}: {}",
                name, e
            ))),
        }
    }
}
