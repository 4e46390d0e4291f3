//! # Cursor-Advancing Field Codec
//!
//! This module is the dispatch core of the row codec. One generic
//! `FieldCodec` implementation per concrete Rust type replaces the
//! per-type branches a code generator would otherwise emit: each column's
//! type tag (plus its signedness flag) selects a monomorphized routine,
//! and the surrounding row loop advances the shared cursor by the byte
//! count the routine reports.
//!
//! ## Encoding
//!
//! | Type | Encoding |
//! |------|----------|
//! | i16/u16, i32/u32, i64/u64 | little-endian, exact width |
//! | f32, f64 | IEEE-754 little-endian, exact width |
//! | varchar payload | u32 little-endian length prefix + raw bytes |
//!
//! ## Invariant Enforcement
//!
//! The store-bound helpers (`insert_field`, `fetch_field`) validate every
//! byte count against the registered width before the cursor may advance:
//! a zero count, or a count disagreeing with a fixed width, aborts the row
//! operation. There is no partial recovery and no field skipping. Dispatch
//! on an unrecognized tag cannot occur: the tag enum is closed and every
//! match below is exhaustive.

use crate::error::{RowError, RowResult};
use crate::store::{ObjectId, ObjectStore};
use crate::types::{ColumnDef, DataType};

/// Binary codec for one concrete field type.
///
/// `WIDTH` mirrors the type registry: `Some(n)` for fixed-width types,
/// `None` for self-delimiting variable-width encodings. The slice-based
/// routines return `None` when the destination or source is too small;
/// they never write or consume partially.
pub trait FieldCodec: Sized + Default {
    /// Registered fixed width, or None for variable-length encodings.
    const WIDTH: Option<usize>;

    /// Exact number of bytes `encode_into` will produce for this value.
    fn encoded_len(&self) -> usize;

    /// Writes the encoding at the start of `out`, returning the byte
    /// count, or None if `out` is too small.
    fn encode_into(&self, out: &mut [u8]) -> Option<usize>;

    /// Reads one value from the start of `input`, returning it with the
    /// byte count consumed, or None if `input` is truncated.
    fn decode_from(input: &[u8]) -> Option<(Self, usize)>;

    /// Converts a base-10 textual literal, or None if the literal is
    /// malformed or out of this type's representable range.
    fn parse_text(text: &str) -> Option<Self>;
}

macro_rules! fixed_field_codec {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldCodec for $ty {
            const WIDTH: Option<usize> = Some(std::mem::size_of::<$ty>());

            fn encoded_len(&self) -> usize {
                std::mem::size_of::<$ty>()
            }

            fn encode_into(&self, out: &mut [u8]) -> Option<usize> {
                let bytes = self.to_le_bytes();
                if out.len() < bytes.len() {
                    return None;
                }
                out[..bytes.len()].copy_from_slice(&bytes);
                Some(bytes.len())
            }

            fn decode_from(input: &[u8]) -> Option<(Self, usize)> {
                let width = std::mem::size_of::<$ty>();
                let bytes = input.get(..width)?;
                Some((<$ty>::from_le_bytes(bytes.try_into().ok()?), width))
            }

            fn parse_text(text: &str) -> Option<Self> {
                text.trim().parse::<$ty>().ok()
            }
        }
    )*};
}

fixed_field_codec!(i16, u16, i32, u32, i64, u64, f32, f64);

impl FieldCodec for Vec<u8> {
    const WIDTH: Option<usize> = None;

    fn encoded_len(&self) -> usize {
        4 + self.len()
    }

    fn encode_into(&self, out: &mut [u8]) -> Option<usize> {
        let len = u32::try_from(self.len()).ok()?;
        let total = 4 + self.len();
        if out.len() < total {
            return None;
        }
        out[..4].copy_from_slice(&len.to_le_bytes());
        out[4..total].copy_from_slice(self);
        Some(total)
    }

    fn decode_from(input: &[u8]) -> Option<(Self, usize)> {
        let prefix = input.get(..4)?;
        let len = u32::from_le_bytes(prefix.try_into().ok()?) as usize;
        let payload = input.get(4..4 + len)?;
        Some((payload.to_vec(), 4 + len))
    }

    fn parse_text(text: &str) -> Option<Self> {
        Some(text.as_bytes().to_vec())
    }
}

/// Moves one field from the row buffer into the store under `oid`.
///
/// `buf` starts at the field's cursor position. Returns the bytes consumed
/// from the buffer, which the caller advances the cursor by.
pub fn insert_field<S: ObjectStore>(
    store: &mut S,
    col: &ColumnDef,
    column: usize,
    oid: ObjectId,
    buf: &[u8],
) -> RowResult<usize> {
    match (col.data_type, col.is_unsigned()) {
        (DataType::SmallInt, false) => insert_as::<i16, S>(store, column, oid, buf),
        (DataType::SmallInt, true) => insert_as::<u16, S>(store, column, oid, buf),
        (DataType::Integer, false) => insert_as::<i32, S>(store, column, oid, buf),
        (DataType::Integer, true) => insert_as::<u32, S>(store, column, oid, buf),
        (DataType::BigInt, false) => insert_as::<i64, S>(store, column, oid, buf),
        (DataType::BigInt, true) => insert_as::<u64, S>(store, column, oid, buf),
        (DataType::Real, _) => insert_as::<f32, S>(store, column, oid, buf),
        (DataType::DoublePrecision, _) => insert_as::<f64, S>(store, column, oid, buf),
        (DataType::Varchar, _) => insert_as::<Vec<u8>, S>(store, column, oid, buf),
    }
}

/// Moves one field from the store into the row buffer.
///
/// `out` starts at the field's cursor position. Returns the bytes written,
/// which the caller advances the cursor by.
pub fn fetch_field<S: ObjectStore>(
    store: &S,
    col: &ColumnDef,
    column: usize,
    oid: ObjectId,
    out: &mut [u8],
) -> RowResult<usize> {
    match (col.data_type, col.is_unsigned()) {
        (DataType::SmallInt, false) => fetch_as::<i16, S>(store, column, oid, out),
        (DataType::SmallInt, true) => fetch_as::<u16, S>(store, column, oid, out),
        (DataType::Integer, false) => fetch_as::<i32, S>(store, column, oid, out),
        (DataType::Integer, true) => fetch_as::<u32, S>(store, column, oid, out),
        (DataType::BigInt, false) => fetch_as::<i64, S>(store, column, oid, out),
        (DataType::BigInt, true) => fetch_as::<u64, S>(store, column, oid, out),
        (DataType::Real, _) => fetch_as::<f32, S>(store, column, oid, out),
        (DataType::DoublePrecision, _) => fetch_as::<f64, S>(store, column, oid, out),
        (DataType::Varchar, _) => fetch_as::<Vec<u8>, S>(store, column, oid, out),
    }
}

fn insert_as<T: FieldCodec, S: ObjectStore>(
    store: &mut S,
    column: usize,
    oid: ObjectId,
    buf: &[u8],
) -> RowResult<usize> {
    let (value, consumed) = T::decode_from(buf).ok_or(RowError::CapacityExceeded {
        column,
        expected: T::WIDTH.unwrap_or(4),
        actual: buf.len(),
    })?;

    let written = store.insert_object(oid, &value);
    if written == 0 || written != consumed {
        return Err(RowError::CapacityExceeded {
            column,
            expected: consumed,
            actual: written,
        });
    }
    if let Some(width) = T::WIDTH {
        if written != width {
            return Err(RowError::WidthMismatch {
                column,
                expected: width,
                actual: written,
            });
        }
    }

    Ok(consumed)
}

fn fetch_as<T: FieldCodec, S: ObjectStore>(
    store: &S,
    column: usize,
    oid: ObjectId,
    out: &mut [u8],
) -> RowResult<usize> {
    let mut slot = T::default();
    let (ok, read) = store.fetch_object(oid, &mut slot);
    if !ok {
        return Err(RowError::StoreMiss { column, oid });
    }
    if read == 0 || T::WIDTH.is_some_and(|w| read < w) {
        return Err(RowError::WidthMismatch {
            column,
            expected: T::WIDTH.unwrap_or(1),
            actual: read,
        });
    }

    let written = slot.encode_into(out).ok_or(RowError::CapacityExceeded {
        column,
        expected: slot.encoded_len(),
        actual: out.len(),
    })?;
    // Fixed types advance by their registered width even if the store
    // reported extra bytes; variable types must agree exactly.
    if T::WIDTH.is_none() && written != read {
        return Err(RowError::WidthMismatch {
            column,
            expected: read,
            actual: written,
        });
    }

    Ok(written)
}
