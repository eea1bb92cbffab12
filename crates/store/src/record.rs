use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tabrs_core::core::tabset::StoredTab;
use uuid::Uuid;

/// A persisted tab set: the originating tabs plus the generated document,
/// stored verbatim. Field names serialize camelCase to match the original
/// record wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSetRecord {
    pub id: String,
    pub title: String,
    pub tabs: Vec<StoredTab>,
    pub html: String,
    /// Unix seconds
    pub created_at: u64,
    /// Unix seconds
    pub updated_at: u64,
}

/// Input for creating a record
#[derive(Debug, Clone, Default)]
pub struct NewTabSet {
    pub title: String,
    pub tabs: Vec<StoredTab>,
    pub html: String,
}

/// Partial update for an existing record. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TabSetPatch {
    pub title: Option<String>,
    pub tabs: Option<Vec<StoredTab>>,
    pub html: Option<String>,
}

impl TabSetPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tabs(mut self, tabs: Vec<StoredTab>) -> Self {
        self.tabs = Some(tabs);
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

pub(crate) fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

impl TabSetRecord {
    /// Create a fresh record. The title is trimmed; an empty title becomes
    /// "Untitled".
    pub fn create(draft: NewTabSet) -> Self {
        let now = now_unix();
        let title = draft.title.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            title: if title.is_empty() {
                "Untitled".to_string()
            } else {
                title.to_string()
            },
            tabs: draft.tabs,
            html: draft.html,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`. A patched title is
    /// trimmed but, unlike create, an empty result is kept as-is.
    pub fn apply(&mut self, patch: TabSetPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(tabs) = patch.tabs {
            self.tabs = tabs;
        }
        if let Some(html) = patch.html {
            self.html = html;
        }
        self.updated_at = now_unix();
    }
}
