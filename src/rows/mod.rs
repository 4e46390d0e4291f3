//! # Row Serialization
//!
//! This module implements the row codec: typed field values moving between
//! a contiguous row buffer, an external object store, and textual bulk-load
//! input, behind one shared forward-only cursor.
//!
//! ## Row Binary Layout
//!
//! Present fields are concatenated in column order with no header:
//!
//! ```text
//! +----------------+----------------+-----+----------------------+
//! | field 0        | field 1        | ... | field N-1            |
//! | (fixed width)  | (fixed width)  |     | (u32 len + payload)  |
//! +----------------+----------------+-----+----------------------+
//! ```
//!
//! Fixed-width fields occupy exactly their registered width; varchar
//! fields are self-delimiting via a u32 little-endian length prefix.
//! Columns absent from the presence mask contribute no bytes.
//!
//! ## Module Structure
//!
//! - `cursor`: the shared forward-only offset
//! - `codec`: `FieldCodec` dispatch and the store-bound field moves
//! - `parse`: text-to-binary conversion
//! - `schema`: ordered column layout and buffer pre-sizing
//! - `table`: the insert/fetch/to_binary row loops and row directory
//! - `view`: typed read-back of a serialized row

pub mod codec;
pub mod cursor;
pub mod parse;
pub mod schema;
pub mod table;
pub mod view;

#[cfg(test)]
mod tests;

pub use codec::{fetch_field, insert_field, FieldCodec};
pub use cursor::RowCursor;
pub use parse::parse_field;
pub use schema::Schema;
pub use table::Table;
pub use view::RowView;
