//! # Type System
//!
//! This module provides the closed column type catalog (`DataType`), column
//! metadata (`ColumnDef`), and the runtime value representation (`Value`).
//!
//! - `data_type`: type tags and the width registry
//! - `column`: per-column definitions (name, tag, signedness)
//! - `value`: typed runtime values with zero-copy varchar payloads

pub mod column;
pub mod data_type;
pub mod value;

pub use column::ColumnDef;
pub use data_type::{DataType, Width};
pub use value::Value;
