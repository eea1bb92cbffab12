/// Centralized error handling for TabRS
pub mod tabrs;

pub use tabrs::{Result, TabrsError};
