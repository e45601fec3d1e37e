// Public modules
pub mod error;
pub mod git;
pub mod output;
pub mod rename;
pub mod sprite;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{BatchResult, BatchResultItem};
