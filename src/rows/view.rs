//! # RowView - Serialized Row Read-Back
//!
//! This module provides `RowView` for reading a serialized row buffer back
//! into typed values. Construction walks the buffer once against the schema
//! and presence mask, validating every field's extent; getters then serve
//! values without re-scanning. Varchar payloads are returned as references
//! into the buffer for zero-copy reads.
//!
//! ## Usage
//!
//! ```ignore
//! let view = RowView::new(&buf, &schema, &present)?;
//! let id = view.get_integer(0);          // Some(7)
//! let name = view.get_text(3);           // Some("ok"), zero-copy
//! let value = view.value(1);             // Some(Value::BigInt(-42))
//! ```

use std::borrow::Cow;

use crate::error::{RowError, RowResult};
use crate::rows::cursor::RowCursor;
use crate::rows::schema::Schema;
use crate::types::{DataType, Value, Width};

/// Per-column location of a field's payload within the row buffer.
#[derive(Debug, Clone, Copy)]
struct FieldExtent {
    /// Payload offset; for varchar this is past the length prefix.
    offset: usize,
    /// Payload length in bytes.
    len: usize,
}

/// Read-only view over one serialized row.
#[derive(Debug)]
pub struct RowView<'a> {
    data: &'a [u8],
    schema: &'a Schema,
    fields: Vec<Option<FieldExtent>>,
    /// Total bytes the present fields occupy.
    extent: usize,
}

impl<'a> RowView<'a> {
    /// Walks `data` against the schema and presence mask, validating that
    /// every present field lies fully within the buffer.
    pub fn new(data: &'a [u8], schema: &'a Schema, present: &[bool]) -> RowResult<Self> {
        let mut cursor = RowCursor::new(data.len());
        let mut fields = Vec::with_capacity(schema.column_count());

        for (i, col) in schema.columns().iter().enumerate() {
            if !Schema::is_present(present, i) {
                fields.push(None);
                continue;
            }

            match col.data_type.width() {
                Width::Fixed(width) => {
                    if !cursor.has(width) {
                        return Err(RowError::WidthMismatch {
                            column: i,
                            expected: width,
                            actual: cursor.remaining(),
                        });
                    }
                    fields.push(Some(FieldExtent {
                        offset: cursor.position(),
                        len: width,
                    }));
                    cursor.advance(width);
                }
                Width::Variable => {
                    if !cursor.has(4) {
                        return Err(RowError::WidthMismatch {
                            column: i,
                            expected: 4,
                            actual: cursor.remaining(),
                        });
                    }
                    let pos = cursor.position();
                    let len = u32::from_le_bytes([
                        data[pos],
                        data[pos + 1],
                        data[pos + 2],
                        data[pos + 3],
                    ]) as usize;
                    cursor.advance(4);
                    if !cursor.has(len) {
                        return Err(RowError::WidthMismatch {
                            column: i,
                            expected: len,
                            actual: cursor.remaining(),
                        });
                    }
                    fields.push(Some(FieldExtent {
                        offset: cursor.position(),
                        len,
                    }));
                    cursor.advance(len);
                }
            }
        }

        Ok(Self {
            data,
            schema,
            fields,
            extent: cursor.position(),
        })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Total bytes the present fields occupy from the buffer start.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Returns true if the presence mask marked this column present.
    pub fn is_present(&self, idx: usize) -> bool {
        self.fields.get(idx).is_some_and(|f| f.is_some())
    }

    fn payload(&self, idx: usize) -> Option<&'a [u8]> {
        let extent = (*self.fields.get(idx)?)?;
        Some(&self.data[extent.offset..extent.offset + extent.len])
    }

    pub fn get_smallint(&self, idx: usize) -> Option<i16> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::SmallInt);
        let bytes = self.payload(idx)?;
        Some(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn get_integer(&self, idx: usize) -> Option<i32> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::Integer);
        let bytes = self.payload(idx)?;
        Some(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn get_bigint(&self, idx: usize) -> Option<i64> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::BigInt);
        let bytes = self.payload(idx)?;
        Some(i64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub fn get_real(&self, idx: usize) -> Option<f32> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::Real);
        let bytes = self.payload(idx)?;
        Some(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn get_double(&self, idx: usize) -> Option<f64> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::DoublePrecision);
        let bytes = self.payload(idx)?;
        Some(f64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Varchar payload bytes, zero-copy.
    pub fn get_varchar(&self, idx: usize) -> Option<&'a [u8]> {
        let col = self.schema.column(idx)?;
        debug_assert_eq!(col.data_type, DataType::Varchar);
        self.payload(idx)
    }

    /// Varchar payload as UTF-8 text, zero-copy.
    pub fn get_text(&self, idx: usize) -> Option<&'a str> {
        std::str::from_utf8(self.get_varchar(idx)?).ok()
    }

    /// Extracts the typed value of column `idx`, or None when the column
    /// is absent from this row.
    pub fn value(&self, idx: usize) -> Option<Value<'a>> {
        let col = self.schema.column(idx)?;
        let bytes = self.payload(idx)?;

        let value = match (col.data_type, col.is_unsigned()) {
            (DataType::SmallInt, false) => Value::SmallInt(i16::from_le_bytes([bytes[0], bytes[1]])),
            (DataType::SmallInt, true) => Value::SmallUint(u16::from_le_bytes([bytes[0], bytes[1]])),
            (DataType::Integer, false) => {
                Value::Integer(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
            (DataType::Integer, true) => {
                Value::Uint(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
            (DataType::BigInt, false) => Value::BigInt(i64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
            (DataType::BigInt, true) => Value::BigUint(u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
            (DataType::Real, _) => {
                Value::Real(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
            (DataType::DoublePrecision, _) => Value::DoublePrecision(f64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
            (DataType::Varchar, _) => Value::Varchar(Cow::Borrowed(bytes)),
        };

        Some(value)
    }
}
