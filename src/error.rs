//! # Row Operation Errors
//!
//! This module provides the failure taxonomy shared by every row path
//! (insert, fetch, text parse). A row operation either completes fully or
//! aborts on the first failing field; no path retries internally and no
//! failure is coerced into a default value.
//!
//! ## Failure Kinds
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `CapacityExceeded` | insert, fetch | store or row buffer could not hold the full value |
//! | `StoreMiss` | fetch | store reported no object under the oid |
//! | `WidthMismatch` | insert, fetch, view | byte count disagrees with the registered width |
//! | `ParseFailure` | to_binary | literal malformed, out of range, or destination too small |
//! | `UnknownRow` | fetch | row id has no entry in the row directory |

use crate::store::ObjectId;
use std::fmt;

/// Failure taxonomy for row encode/decode operations.
///
/// Every variant carries the zero-based column index it failed on, so a
/// bulk-load or transaction layer can report the offending field.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    /// The store accepted fewer bytes than the value requires, or the row
    /// buffer ran out of space before the field could be processed.
    CapacityExceeded {
        column: usize,
        expected: usize,
        actual: usize,
    },
    /// The store's success flag was false for this oid, regardless of the
    /// byte count it reported alongside.
    StoreMiss { column: usize, oid: ObjectId },
    /// A produced or consumed byte count disagrees with the registered
    /// width for the column's type.
    WidthMismatch {
        column: usize,
        expected: usize,
        actual: usize,
    },
    /// A textual literal could not be converted into the column's binary
    /// form. The cursor does not advance past the failing field.
    ParseFailure { column: usize, reason: String },
    /// The requested row id is not present in the row directory.
    UnknownRow { oid: ObjectId },
}

impl RowError {
    /// Returns the zero-based column index the operation failed on, or
    /// None when the failure precedes column processing.
    pub fn column(&self) -> Option<usize> {
        match self {
            RowError::CapacityExceeded { column, .. }
            | RowError::StoreMiss { column, .. }
            | RowError::WidthMismatch { column, .. }
            | RowError::ParseFailure { column, .. } => Some(*column),
            RowError::UnknownRow { .. } => None,
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::CapacityExceeded {
                column,
                expected,
                actual,
            } => write!(
                f,
                "capacity exceeded at column {}: needed {} bytes, got {}",
                column, expected, actual
            ),
            RowError::StoreMiss { column, oid } => {
                write!(f, "store miss at column {}: no object {}", column, oid)
            }
            RowError::WidthMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "width mismatch at column {}: registered {} bytes, got {}",
                column, expected, actual
            ),
            RowError::ParseFailure { column, reason } => {
                write!(f, "parse failure at column {}: {}", column, reason)
            }
            RowError::UnknownRow { oid } => write!(f, "unknown row {}", oid),
        }
    }
}

impl std::error::Error for RowError {}

/// Result alias for row codec operations.
pub type RowResult<T> = Result<T, RowError>;
