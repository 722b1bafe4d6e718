//! Core error types.
//!
//! Sub-crates define their own error enums and wrap [`HeapError`] via
//! `#[from]`, so heap invariant failures propagate with `?`.

use thiserror::Error;

/// Failures of [`MinHeap`](crate::MinHeap).  Both indicate a bug in the
/// caller: routing sizes the heap so that neither can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("extract-min on an empty heap")]
    Empty,

    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// The top-level error type for `pickup-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pickup-core`.
pub type CoreResult<T> = Result<T, CoreError>;
