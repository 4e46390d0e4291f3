//! # Text-to-Binary Conversion
//!
//! This module converts textual field literals (one token per field, as
//! delivered by a bulk load or tuple splitter) into their binary encoding,
//! written directly into the row buffer. The object store is never touched
//! on this path.
//!
//! ## Conversion Rules
//!
//! - Integer columns: base-10, optionally signed for signed columns,
//!   range-checked against the destination's exact bit width. Surrounding
//!   whitespace is tolerated.
//! - Float columns: standard decimal literals into IEEE-754.
//! - Varchar columns: the token's raw bytes behind a u32 length prefix.
//!
//! Any malformed literal, out-of-range value, or destination too small for
//! a variable-length payload is a `ParseFailure`; no bytes are written and
//! the caller must abort the row rather than continue with a partially
//! filled buffer.

use crate::error::{RowError, RowResult};
use crate::rows::codec::FieldCodec;
use crate::types::{ColumnDef, DataType};

/// Converts one textual literal into its binary form at the start of
/// `out`, returning the bytes written.
pub fn parse_field(col: &ColumnDef, column: usize, text: &str, out: &mut [u8]) -> RowResult<usize> {
    match (col.data_type, col.is_unsigned()) {
        (DataType::SmallInt, false) => parse_as::<i16>(col, column, text, out),
        (DataType::SmallInt, true) => parse_as::<u16>(col, column, text, out),
        (DataType::Integer, false) => parse_as::<i32>(col, column, text, out),
        (DataType::Integer, true) => parse_as::<u32>(col, column, text, out),
        (DataType::BigInt, false) => parse_as::<i64>(col, column, text, out),
        (DataType::BigInt, true) => parse_as::<u64>(col, column, text, out),
        (DataType::Real, _) => parse_as::<f32>(col, column, text, out),
        (DataType::DoublePrecision, _) => parse_as::<f64>(col, column, text, out),
        (DataType::Varchar, _) => parse_as::<Vec<u8>>(col, column, text, out),
    }
}

fn parse_as<T: FieldCodec>(
    col: &ColumnDef,
    column: usize,
    text: &str,
    out: &mut [u8],
) -> RowResult<usize> {
    let value = T::parse_text(text).ok_or_else(|| RowError::ParseFailure {
        column,
        reason: format!("cannot convert '{}' to {}", text, col.data_type.name()),
    })?;

    let written = value.encode_into(out).ok_or_else(|| RowError::ParseFailure {
        column,
        reason: format!(
            "destination too small for {} value: {} bytes needed, {} available",
            col.data_type.name(),
            value.encoded_len(),
            out.len()
        ),
    })?;

    if let Some(width) = T::WIDTH {
        if written != width {
            return Err(RowError::WidthMismatch {
                column,
                expected: width,
                actual: written,
            });
        }
    }

    Ok(written)
}
