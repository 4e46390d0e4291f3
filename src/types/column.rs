//! # Column Definitions
//!
//! This module provides `ColumnDef`, the per-column metadata consumed by the
//! row codec: a name, a physical type tag, and (for the integer tags) a
//! signedness flag. Width always comes from the type registry; signedness
//! only selects which concrete integer the codec dispatches to.

use crate::types::DataType;

/// Definition of one column in a row schema.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    unsigned: bool,
}

impl ColumnDef {
    /// Creates a column of the given type. Integer columns default to
    /// signed.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            unsigned: false,
        }
    }

    /// Creates an unsigned integer column.
    ///
    /// Signedness only exists for the integer tags; requesting it for any
    /// other tag is a programming error.
    pub fn new_unsigned(name: impl Into<String>, data_type: DataType) -> Self {
        debug_assert!(
            data_type.is_integer(),
            "unsigned flag is only valid for integer types"
        );
        Self {
            name: name.into(),
            data_type,
            unsigned: true,
        }
    }

    /// Returns true if this integer column is unsigned.
    pub fn is_unsigned(&self) -> bool {
        self.unsigned
    }
}
