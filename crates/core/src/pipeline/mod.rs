// Pipeline module - core logic only
// I/O nodes live in tabrs-store

pub mod core;
pub mod keys;

// Re-export core types
pub use core::*;
pub use keys::*;
