//! Error types for Celda operations

use thiserror::Error;

/// Result type for Celda operations
pub type Result<T> = std::result::Result<T, CeldaError>;

/// Errors that can occur while addressing or mutating a container
///
/// Contract violations (a reference whose length differs from the rank) are
/// not represented here: they panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CeldaError {
    /// Linear index outside `[0, count)`
    #[error("Index out of range: {index} (count {count})")]
    IndexOutOfRange {
        /// Offending linear index
        index: usize,
        /// Element count of the structure
        count: usize,
    },

    /// One coordinate of a reference outside its dimension's extent
    #[error("Coordinate out of range: {coordinate} in dimension {dimension} (extent {extent})")]
    CoordinateOutOfRange {
        /// Dimension of the offending coordinate
        dimension: usize,
        /// Offending coordinate
        coordinate: usize,
        /// Extent of that dimension
        extent: usize,
    },

    /// Supplier shape does not fit inside the receiver
    #[error("Not acceptable: receiver extent {receiver} < supplier extent {supplier} (dimension {dimension:?})")]
    NotAcceptable {
        /// First dimension that failed the check (`None` when only the total count failed)
        dimension: Option<usize>,
        /// Receiver extent (or count) in that dimension
        receiver: usize,
        /// Supplier extent (or count) in that dimension
        supplier: usize,
    },

    /// Operand element counts do not line up
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },
}
