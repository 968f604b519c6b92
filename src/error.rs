//! Error types for Sitegate
//!
//! Uses `thiserror` for library errors. Pattern violations and per-gate
//! preconditions are not errors - they travel through `GateReport` so the
//! binary can render them and pick the exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sitegate operations
pub type GateResult<T> = Result<T, GateError>;

/// Main error type for Sitegate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Repository root does not exist or is not a directory
    #[error("repository root not found: {path}")]
    RootNotFound { path: PathBuf },
}
