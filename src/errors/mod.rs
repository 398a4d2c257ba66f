pub mod types;

pub use types::{AppError, ExportError, SourceError};

/// Convenience result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;
