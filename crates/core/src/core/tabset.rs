use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TabrsError};

/// One tab of a tab set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInput {
    /// Label text; empty means "Tab N" is substituted at render time
    #[serde(default)]
    pub title: String,
    /// Free text; newlines become <br> in the generated document
    #[serde(default)]
    pub content: String,
}

impl TabInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The persisted editor shape of a tab: a numeric id plus the tab fields.
/// This is what tab-set records carry in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTab {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl StoredTab {
    /// Assign 1-based ids to plain tabs, matching the editor's numbering
    pub fn sequence(tabs: &[TabInput]) -> Vec<StoredTab> {
        tabs.iter()
            .enumerate()
            .map(|(i, t)| StoredTab {
                id: (i + 1) as u32,
                title: t.title.clone(),
                content: t.content.clone(),
            })
            .collect()
    }
}

impl From<StoredTab> for TabInput {
    fn from(tab: StoredTab) -> Self {
        TabInput {
            title: tab.title,
            content: tab.content,
        }
    }
}

impl From<&StoredTab> for TabInput {
    fn from(tab: &StoredTab) -> Self {
        TabInput {
            title: tab.title.clone(),
            content: tab.content.clone(),
        }
    }
}

/// Parse a tab-set source into tabs.
///
/// Accepts either a bare JSON array of tab objects (the editor's saved
/// state; extra fields such as `id` are ignored) or an object carrying a
/// `tabs` array (the saved-record shape).
pub fn parse_tabs(json: &str) -> Result<Vec<TabInput>> {
    let value: Value = serde_json::from_str(json)?;

    let items = match &value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("tabs")
            .and_then(Value::as_array)
            .ok_or_else(|| TabrsError::parse("expected an object with a \"tabs\" array"))?,
        _ => {
            return Err(TabrsError::parse(
                "expected a JSON array of tabs or an object with a \"tabs\" array",
            ));
        }
    };

    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(Into::into))
        .collect()
}
