//! # celldb - Row Serialization for Column-Oriented Storage
//!
//! celldb is the row codec core of an embedded column-oriented storage
//! engine: it encodes and decodes typed row data (integers of several
//! widths, floating-point values, variable-length text) between a
//! contiguous row buffer, a per-column object store, and textual bulk-load
//! input.
//!
//! ## Quick Start
//!
//! ```ignore
//! use celldb::{ColumnDef, DataType, Schema, Table};
//!
//! let schema = Schema::new(vec![
//!     ColumnDef::new("id", DataType::Integer),
//!     ColumnDef::new("name", DataType::Varchar),
//! ]);
//! let mut table = Table::in_memory(schema);
//!
//! // Bulk-load path: text tuple -> binary row -> column stores.
//! let present = [true, true];
//! let mut buf = vec![0u8; table.schema().binary_size(&present, &["7", "ok"])];
//! let len = table.to_binary(&present, &["7", "ok"], &mut buf)?;
//! table.insert_row(1, &present, &buf[..len])?;
//!
//! // Read it back.
//! let mut out = vec![0u8; len];
//! table.fetch_row(1, &present, &mut out)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------+
//! |   Row Paths (insert / fetch / parse) |
//! +--------------------------------------+
//! |   Cursor-Advancing Field Codec       |
//! +-------------------+------------------+
//! |   Type Registry   |  Object Store    |
//! +-------------------+------------------+
//! ```
//!
//! Every row operation iterates columns left to right behind one shared
//! forward-only cursor; each field dispatches on its type tag to a
//! monomorphized codec routine. No field's encoding depends on another
//! field's value. The first per-field failure aborts the whole row
//! operation; there is no partial recovery and no silent coercion.
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous. A row buffer and its cursor belong
//! exclusively to one row operation; concurrent rows use independent
//! buffers. The object store is the only shared resource and brings its
//! own per-oid guarantees.
//!
//! ## Module Overview
//!
//! - [`types`]: closed type-tag registry, column definitions, values
//! - [`rows`]: cursor, field codec, text parse, row loops, read-back
//! - [`store`]: object store interface and the in-memory reference page
//! - [`error`]: the failure taxonomy shared by all row paths

#[macro_use]
mod macros;

pub mod error;
pub mod rows;
pub mod store;
pub mod types;

pub use error::{RowError, RowResult};
pub use rows::{FieldCodec, RowCursor, RowView, Schema, Table};
pub use store::{ObjectId, ObjectStore, Page, NIL_OID};
pub use types::{ColumnDef, DataType, Value, Width};
