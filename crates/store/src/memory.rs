//! In-memory store backend for tests and embedding.

use async_trait::async_trait;
use indexmap::IndexMap;
use tabrs_core::error::{Result, TabrsError};
use tokio::sync::Mutex;

use crate::record::{NewTabSet, TabSetPatch, TabSetRecord};
use crate::store::{TabSetStore, list_view};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<IndexMap<String, TabSetRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TabSetStore for MemoryStore {
    async fn create(&self, draft: NewTabSet) -> Result<TabSetRecord> {
        let record = TabSetRecord::create(draft);
        let mut records = self.records.lock().await;
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<TabSetRecord>> {
        let records = self.records.lock().await;
        Ok(list_view(records.values().cloned()))
    }

    async fn get(&self, id: &str) -> Result<TabSetRecord> {
        let records = self.records.lock().await;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| TabrsError::not_found(id))
    }

    async fn update(&self, id: &str, patch: TabSetPatch) -> Result<TabSetRecord> {
        let mut records = self.records.lock().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| TabrsError::not_found(id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().await;
        records
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| TabrsError::not_found(id))
    }
}
