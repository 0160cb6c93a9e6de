//! Error handling for GCodeView
//!
//! Errors here represent collaborator bugs (bad machine limits, malformed
//! tool-library keys), never malformed G-code text. The toolpath engine is
//! best-effort by design and does not fail on program content.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Top-level error type for GCodeView core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Machine limits must describe exactly the X, Y, and Z axes
    #[error("Machine limits require exactly 3 axis extents, got {count}")]
    InvalidMachineLimits {
        /// Number of extents actually supplied.
        count: usize,
    },

    /// A tool-library key could not be normalized to a tool number
    #[error("Invalid tool number {key:?} in tool library")]
    InvalidToolNumber {
        /// The offending key as supplied by the caller.
        key: String,
    },
}

/// Result type alias using the GCodeView core error
pub type Result<T> = std::result::Result<T, Error>;
