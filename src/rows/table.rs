//! # Row Operations
//!
//! This module provides `Table`, the owner of the three row paths:
//!
//! - **insert**: read each present field from a serialized row buffer and
//!   persist it in that column's object store under a fresh oid
//! - **fetch**: read each present field back from the stores into a
//!   caller-provided buffer
//! - **to_binary**: convert a text tuple into the serialized row form,
//!   without touching the stores
//!
//! All three iterate columns left to right behind one shared cursor. The
//! first per-field failure aborts the whole operation; later fields are
//! never processed and the row directory is never updated on a failed
//! insert.
//!
//! ## Row Directory
//!
//! Insert records the oid assigned to each present column (and `NIL_OID`
//! for absent ones) under the caller's row id; fetch consults that record.
//! Transaction visibility and row versioning live above this layer.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::error::{RowError, RowResult};
use crate::rows::codec;
use crate::rows::cursor::RowCursor;
use crate::rows::parse;
use crate::rows::schema::Schema;
use crate::store::{ObjectId, ObjectStore, NIL_OID};

/// Per-row record of the oids each column's value was stored under.
#[derive(Debug, Clone)]
struct RowEntry {
    oids: SmallVec<[ObjectId; 8]>,
}

/// Column stores plus the row directory, generic over the store backend.
#[derive(Debug)]
pub struct Table<S: ObjectStore> {
    schema: Schema,
    columns: Vec<S>,
    rows: HashMap<ObjectId, RowEntry>,
}

impl<S: ObjectStore> Table<S> {
    /// Creates a table from a schema and one store per column.
    pub fn new(schema: Schema, columns: Vec<S>) -> eyre::Result<Self> {
        eyre::ensure!(
            columns.len() == schema.column_count(),
            "store count {} does not match column count {}",
            columns.len(),
            schema.column_count()
        );
        Ok(Self {
            schema,
            columns,
            rows: HashMap::new(),
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn contains_row(&self, row_id: ObjectId) -> bool {
        self.rows.contains_key(&row_id)
    }

    /// Reads each present field from `buf` and persists it in the matching
    /// column store, recording the assigned oids under `row_id`. Returns
    /// the total bytes consumed from the buffer.
    pub fn insert_row(
        &mut self,
        row_id: ObjectId,
        present: &[bool],
        buf: &[u8],
    ) -> RowResult<usize> {
        let mut cursor = RowCursor::new(buf.len());
        let mut oids: SmallVec<[ObjectId; 8]> = SmallVec::new();

        for (i, col) in self.schema.columns().iter().enumerate() {
            if !Schema::is_present(present, i) {
                oids.push(NIL_OID);
                continue;
            }

            if cursor.remaining() == 0 {
                return Err(RowError::CapacityExceeded {
                    column: i,
                    expected: col.data_type.fixed_size().unwrap_or(4),
                    actual: 0,
                });
            }

            let store = &mut self.columns[i];
            let oid = store.next_oid();
            let consumed = codec::insert_field(store, col, i, oid, &buf[cursor.position()..])?;
            cursor.advance(consumed);
            oids.push(oid);
        }

        self.rows.insert(row_id, RowEntry { oids });
        Ok(cursor.position())
    }

    /// Reads each present field of `row_id` from the column stores into
    /// `buf`. Returns the total bytes written.
    pub fn fetch_row(
        &self,
        row_id: ObjectId,
        present: &[bool],
        buf: &mut [u8],
    ) -> RowResult<usize> {
        let entry = self
            .rows
            .get(&row_id)
            .ok_or(RowError::UnknownRow { oid: row_id })?;

        let mut cursor = RowCursor::new(buf.len());

        for (i, col) in self.schema.columns().iter().enumerate() {
            if !Schema::is_present(present, i) {
                continue;
            }

            if cursor.remaining() == 0 {
                return Err(RowError::CapacityExceeded {
                    column: i,
                    expected: col.data_type.fixed_size().unwrap_or(4),
                    actual: 0,
                });
            }

            let pos = cursor.position();
            let written =
                codec::fetch_field(&self.columns[i], col, i, entry.oids[i], &mut buf[pos..])?;
            cursor.advance(written);
        }

        Ok(cursor.position())
    }

    /// Converts a text tuple (one token per present column) into the
    /// serialized row form in `buf`. Returns the total bytes written.
    ///
    /// The stores are not touched; pair with `insert_row` to load the
    /// result, or with `RowView` to read it back.
    pub fn to_binary(
        &self,
        present: &[bool],
        tuple: &[impl AsRef<str>],
        buf: &mut [u8],
    ) -> RowResult<usize> {
        let mut cursor = RowCursor::new(buf.len());

        for (i, col) in self.schema.columns().iter().enumerate() {
            if !Schema::is_present(present, i) {
                continue;
            }

            let text = tuple.get(i).ok_or_else(|| RowError::ParseFailure {
                column: i,
                reason: "tuple has no token for this column".to_string(),
            })?;

            let pos = cursor.position();
            let written = parse::parse_field(col, i, text.as_ref(), &mut buf[pos..])?;
            cursor.advance(written);
        }

        Ok(cursor.position())
    }
}

impl Table<crate::store::Page> {
    /// Creates a table backed by one default-capacity in-memory page per
    /// column.
    pub fn in_memory(schema: Schema) -> Self {
        let columns = (0..schema.column_count())
            .map(|_| crate::store::Page::new())
            .collect();
        Self {
            schema,
            columns,
            rows: HashMap::new(),
        }
    }
}
