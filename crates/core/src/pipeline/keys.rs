use crate::core::tabset::TabInput;
/// Type-safe keys for PipeMap
use std::marker::PhantomData;
use std::path::PathBuf;

/// A type-safe key for PipeMap that enforces compile-time type checking
pub struct TypedKey<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> TypedKey<T> {
    /// Create a new typed key with a static name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    /// Get the key name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            _phantom: PhantomData,
        }
    }
}

impl<T> Copy for TypedKey<T> {}

// Common key definitions

/// Tab-set source file path
pub const SOURCE: TypedKey<PathBuf> = TypedKey::new("source");

/// Raw tab-set source text
pub const RAW_SOURCE: TypedKey<String> = TypedKey::new("raw_source");

/// Parsed tabs in document order
pub const TABS: TypedKey<Vec<TabInput>> = TypedKey::new("tabs");

/// Generated HTML document
pub const HTML_CONTENT: TypedKey<String> = TypedKey::new("html_content");

/// Output file path
pub const OUTPUT_PATH: TypedKey<PathBuf> = TypedKey::new("output_path");

/// Is rebuild flag (set by watch mode)
pub const IS_REBUILD: TypedKey<bool> = TypedKey::new("is_rebuild");
