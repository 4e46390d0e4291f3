//! # Row Schema
//!
//! This module provides the `Schema` struct that defines the ordered column
//! layout of a row. The schema answers the sizing questions callers need
//! before running a row operation: how many bytes a fixed prefix occupies,
//! and exactly how large a buffer a given text tuple will serialize into.

use crate::types::{ColumnDef, Width};

/// Ordered column definitions for one table's rows.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnDef>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, idx: usize) -> Option<&ColumnDef> {
        self.columns.get(idx)
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns true if the presence mask marks column `idx` present.
    /// Columns past the end of the mask are absent.
    pub fn is_present(present: &[bool], idx: usize) -> bool {
        present.get(idx).copied().unwrap_or(false)
    }

    /// Minimum bytes a serialized row occupies under this mask: the sum of
    /// fixed widths plus the length prefix of each present varchar.
    pub fn min_size(&self, present: &[bool]) -> usize {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| Self::is_present(present, *i))
            .map(|(_, col)| match col.data_type.width() {
                Width::Fixed(n) => n,
                Width::Variable => 4,
            })
            .sum()
    }

    /// Exact bytes `to_binary` will produce for this text tuple, assuming
    /// every present literal parses.
    pub fn binary_size(&self, present: &[bool], tuple: &[impl AsRef<str>]) -> usize {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| Self::is_present(present, *i))
            .map(|(i, col)| match col.data_type.width() {
                Width::Fixed(n) => n,
                Width::Variable => 4 + tuple.get(i).map_or(0, |t| t.as_ref().len()),
            })
            .sum()
    }
}
