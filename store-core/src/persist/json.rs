//! JSON file persistent store.
//!
//! One store file per entity type, holding a JSON array of durable
//! records. Writes go through a temp file and an atomic rename, so a
//! failed write never corrupts the previously stored records.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use store_types::{EntityId, StorableData};

use super::{PersistError, PersistentStore};

/// File-backed persistent store using pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStore<S> {
    path: PathBuf,
    _marker: PhantomData<fn() -> S>,
}

impl<S: StorableData> JsonFileStore<S> {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<EntityId, S>, PersistError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(PersistError::Read(e.to_string())),
        };

        let records: Vec<S> = serde_json::from_str(&contents)
            .map_err(|e| PersistError::Corrupt(e.to_string()))?;

        Ok(records.into_iter().map(|r| (r.id(), r)).collect())
    }
}

#[async_trait]
impl<S: StorableData> PersistentStore<S> for JsonFileStore<S> {
    async fn read_all(&self) -> Result<Vec<S>, PersistError> {
        // BTreeMap iteration gives the ascending-id contract
        Ok(self.read_map().await?.into_values().collect())
    }

    async fn write_all(&self, records: &[S]) -> Result<(), PersistError> {
        let mut map = self.read_map().await?;
        for record in records {
            map.insert(record.id(), record.clone());
        }

        let all: Vec<&S> = map.values().collect();
        let contents = serde_json::to_string_pretty(&all)
            .map_err(|e| PersistError::Write(e.to_string()))?;

        // Write-then-rename keeps the previous file intact on failure
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| PersistError::Write(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| PersistError::Write(e.to_string()))?;

        Ok(())
    }
}
