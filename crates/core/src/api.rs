// Stable API facade for external consumers - Pure logic, no I/O

use crate::core::output::HtmlOutputHandler;
use crate::core::tabset::TabInput;
use crate::error::{Result, TabrsError};
use crate::util::html::HtmlEscape;
use crate::util::ident;

pub use crate::core::tabset::parse_tabs;

/// Export configuration for the pure core (no I/O)
#[derive(Clone, Debug, Default)]
pub struct ExportConfig {
    tabs: Vec<TabInput>,
    uid: Option<String>,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs<I>(mut self, tabs: I) -> Self
    where
        I: IntoIterator<Item = TabInput>,
    {
        self.tabs = tabs.into_iter().collect();
        self
    }

    /// Append one tab
    pub fn add_tab(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.tabs.push(TabInput::new(title, content));
        self
    }

    /// Override the generated id-prefix. Useful for reproducible output;
    /// normal callers let the compiler invent a fresh one per invocation.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }
}

/// Export output - the standalone document plus the prefix it was namespaced with
#[derive(Clone, Debug)]
pub struct ExportOutput {
    pub html: String,
    pub uid: String,
}

/// Compile a tab set into a standalone CSS-only interactive HTML document.
///
/// Only an invalid uid override can fail; with a generated uid this is total.
pub fn export(config: ExportConfig) -> Result<ExportOutput> {
    let uid = match config.uid {
        Some(uid) => {
            if uid.is_empty() || !uid.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
                return Err(TabrsError::invalid_config(format!(
                    "uid '{uid}' must be non-empty and contain only [A-Za-z0-9_-]"
                )));
            }
            uid
        }
        None => ident::fresh_uid(),
    };

    let html = HtmlOutputHandler::generate_html_with_uid(&config.tabs, &uid);
    Ok(ExportOutput { html, uid })
}

/// Escape the five reserved HTML characters
pub fn escape_html(s: &str) -> String {
    HtmlEscape::escape_content(s)
}

/// Escape, then render line breaks as <br>
pub fn text_to_html(s: &str) -> String {
    HtmlEscape::text_to_html(s)
}
