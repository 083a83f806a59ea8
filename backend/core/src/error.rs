use thiserror::Error;

/// Capture-time failures.
///
/// Attribute absence is never an error; it degrades to a sentinel field.
/// The only failure is an empty hit-test.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The host found no element under the pointer. Recoverable: the caller
    /// simply re-invokes on the next input event.
    #[error("no element at pointer ({x}, {y})")]
    NoElementAtPointer { x: i32, y: i32 },
}

/// Failures decoding a `#ZVSP#`-delimited capture string.
///
/// Encoding is infallible; only the consumer side can fail.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("expected 6 wire fields, found {found}")]
    FieldCount { found: usize },

    #[error("coordinate field {field:?} is not an integer")]
    BadCoordinate { field: String },
}
