pub mod commands;
pub mod json_file;
pub mod memory;
pub mod pipeline;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{NewTabSet, TabSetPatch, TabSetRecord};
pub use store::TabSetStore;
