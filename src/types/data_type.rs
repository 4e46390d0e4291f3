//! # Column Type Registry
//!
//! This module provides the canonical `DataType` enum for celldb, the closed
//! catalog of physical column types the row codec can encode and decode.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: one enum shared by schema definitions,
//!    the row codec, and the object store paths
//! 2. **Storage-efficient**: `#[repr(u8)]` for single-byte discriminant
//! 3. **Closed set**: dispatch matches exhaustively; there is no
//!    runtime-recoverable "unknown type" branch inside the codec
//! 4. **Width as contract**: every successful encode or decode of a
//!    fixed-width type must advance the row cursor by exactly the width
//!    registered here
//!
//! ## Type Table
//!
//! | Tag | Width | Kind |
//! |-----|-------|------|
//! | SmallInt | 2 | fixed, signed or unsigned per column definition |
//! | Integer | 4 | fixed, signed or unsigned per column definition |
//! | BigInt | 8 | fixed, signed or unsigned per column definition |
//! | Real | 4 | fixed, IEEE-754 single |
//! | DoublePrecision | 8 | fixed, IEEE-754 double |
//! | Varchar | variable | u32 little-endian length prefix + payload |
//!
//! Signedness is column metadata (`ColumnDef`), not a separate tag: it
//! changes how a literal is range-checked and how bytes are interpreted,
//! never the registered width.
//!
//! ## Discriminant Values
//!
//! Discriminants group fixed-width primitives at 0-4 and variable-length
//! types from 20 up, leaving room for future tags in each band. The
//! `#[repr(u8)]` ensures the discriminant fits in a single byte for storage
//! in record headers and catalogs.

/// Physical column type tag.
///
/// Uses `#[repr(u8)]` for efficient single-byte storage encoding. Type
/// metadata (signedness) is stored in `ColumnDef`, not the enum.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    SmallInt = 0,
    Integer = 1,
    BigInt = 2,
    Real = 3,
    DoublePrecision = 4,

    Varchar = 20,
}

/// Registered storage width for a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// The encoding always occupies exactly this many bytes.
    Fixed(usize),
    /// The encoding is self-delimiting and its length depends on content.
    Variable,
}

impl DataType {
    /// Returns the registered storage width for this type.
    pub fn width(&self) -> Width {
        match self {
            DataType::SmallInt => Width::Fixed(2),
            DataType::Integer => Width::Fixed(4),
            DataType::BigInt => Width::Fixed(8),
            DataType::Real => Width::Fixed(4),
            DataType::DoublePrecision => Width::Fixed(8),
            DataType::Varchar => Width::Variable,
        }
    }

    /// Returns the fixed byte size for this type, or None for
    /// variable-length types.
    pub fn fixed_size(&self) -> Option<usize> {
        match self.width() {
            Width::Fixed(n) => Some(n),
            Width::Variable => None,
        }
    }

    /// Returns true if this type requires variable-length encoding.
    pub fn is_variable(&self) -> bool {
        self.fixed_size().is_none()
    }

    /// Returns true if this is an integer type (the tags whose signedness
    /// is selected per column definition).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::SmallInt | DataType::Integer | DataType::BigInt
        )
    }

    /// Returns true if this is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DataType::Real | DataType::DoublePrecision)
    }

    /// Returns the SQL-facing name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::SmallInt => "smallint",
            DataType::Integer => "integer",
            DataType::BigInt => "bigint",
            DataType::Real => "real",
            DataType::DoublePrecision => "double precision",
            DataType::Varchar => "varchar",
        }
    }
}

impl TryFrom<u8> for DataType {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DataType::SmallInt),
            1 => Ok(DataType::Integer),
            2 => Ok(DataType::BigInt),
            3 => Ok(DataType::Real),
            4 => Ok(DataType::DoublePrecision),
            20 => Ok(DataType::Varchar),
            _ => eyre::bail!("invalid DataType discriminant: {}", value),
        }
    }
}
