//! Store trait for tab-set records.
//!
//! Backends implement create/list/get/update/delete by identifier. The store
//! never regenerates html itself; callers persist the generated document
//! verbatim alongside the tabs it was generated from.

use async_trait::async_trait;
use tabrs_core::error::Result;

use crate::record::{NewTabSet, TabSetPatch, TabSetRecord};

/// Maximum number of records returned by `list`
pub const LIST_LIMIT: usize = 50;

#[async_trait]
pub trait TabSetStore: Send + Sync {
    /// Persist a new record and return it with its assigned id
    async fn create(&self, draft: NewTabSet) -> Result<TabSetRecord>;

    /// Records newest-first, capped at [`LIST_LIMIT`]
    async fn list(&self) -> Result<Vec<TabSetRecord>>;

    /// Fetch one record; `NotFound` when the id is absent
    async fn get(&self, id: &str) -> Result<TabSetRecord>;

    /// Apply a partial update; `NotFound` when the id is absent
    async fn update(&self, id: &str, patch: TabSetPatch) -> Result<TabSetRecord>;

    /// Remove a record; `NotFound` when the id is absent
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Newest-first ordering by creation time, capped at the list limit
pub(crate) fn list_view(records: impl Iterator<Item = TabSetRecord>) -> Vec<TabSetRecord> {
    let mut rows: Vec<TabSetRecord> = records.collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.truncate(LIST_LIMIT);
    rows
}
