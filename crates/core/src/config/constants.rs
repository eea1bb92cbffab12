//! Constants for TabRS

use std::path::PathBuf;
use std::sync::OnceLock;

/// Full path of the executable file
pub static EXECUTABLE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Default file name for the tab-set record store
pub const DEFAULT_STORE_FILE: &str = "tabsets.json";

/// Supported tab-set source extensions
pub const TABSET_EXTENSIONS: &[&str] = &["json"];

pub fn init_constants() {
    let exe_path = std::env::current_exe().expect("Failed to get executable path");
    EXECUTABLE_PATH
        .set(exe_path)
        .expect("EXECUTABLE_PATH has already been initialized");
}
