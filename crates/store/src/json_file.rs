//! JSON-file store backend.
//!
//! Records live in one JSON array on disk; every mutation rewrites the whole
//! file. A process-local mutex serializes read-modify-write cycles.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tabrs_core::error::{Result, TabrsError};
use tokio::sync::Mutex;
use tracing::debug;

use crate::record::{NewTabSet, TabSetPatch, TabSetRecord};
use crate::store::{TabSetStore, list_view};

pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records, keyed by id in insertion order. A missing file is
    /// an empty store.
    async fn load(&self) -> Result<IndexMap<String, TabSetRecord>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file {:?} does not exist yet", self.path);
                return Ok(IndexMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<TabSetRecord> = serde_json::from_str(&raw)
            .map_err(|e| TabrsError::store(format!("corrupt store file {:?}: {e}", self.path)))?;

        Ok(records.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    async fn save(&self, records: &IndexMap<String, TabSetRecord>) -> Result<()> {
        let rows: Vec<&TabSetRecord> = records.values().collect();
        let raw = serde_json::to_string_pretty(&rows)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, raw).await?;
        debug!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl TabSetStore for JsonFileStore {
    async fn create(&self, draft: NewTabSet) -> Result<TabSetRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = TabSetRecord::create(draft);
        records.insert(record.id.clone(), record.clone());
        self.save(&records).await?;
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<TabSetRecord>> {
        let records = self.load().await?;
        Ok(list_view(records.into_values()))
    }

    async fn get(&self, id: &str) -> Result<TabSetRecord> {
        let records = self.load().await?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| TabrsError::not_found(id))
    }

    async fn update(&self, id: &str, patch: TabSetPatch) -> Result<TabSetRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = records
            .get_mut(id)
            .ok_or_else(|| TabrsError::not_found(id))?;
        record.apply(patch);
        let updated = record.clone();

        self.save(&records).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        if records.shift_remove(id).is_none() {
            return Err(TabrsError::not_found(id));
        }

        self.save(&records).await
    }
}
