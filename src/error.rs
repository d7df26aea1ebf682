//! Error types for vector2d

use thiserror::Error;

/// Error returned by the checked vector operations.
///
/// The plain operations on [`Vector2D`](crate::Vector2D) never fail; they follow
/// IEEE 754 semantics and may yield infinite or `NaN` components. The `checked_*`
/// and `try_*` companions report those cases through this type instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    /// Division by a zero scalar
    #[error("Division by zero")]
    DivisionByZero,

    /// Direction requested from a vector of zero length
    #[error("Zero-length vector has no direction")]
    ZeroLength,

    /// A component is infinite or NaN
    #[error("Non-finite vector: ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Result type alias for checked vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
