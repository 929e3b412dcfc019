//! Error type shared by the sort fast paths.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by the sort fast paths.
///
/// Degenerate inputs (length 0 or 1) are a defined no-op, not an error.
#[derive(Debug, Error)]
pub enum SortError {
    /// Scratch-buffer reservation failed. The input slice has not been
    /// mutated when this is returned.
    #[error("scratch allocation failed: {0}")]
    ScratchAlloc(#[from] TryReserveError),
}
