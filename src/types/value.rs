//! # Runtime Value Representation
//!
//! This module provides `Value<'a>`, the typed runtime representation of one
//! field. Values use `Cow` for varchar payloads to enable zero-copy when
//! reading from a serialized row buffer while supporting owned data when a
//! value must outlive its buffer.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Column Type |
//! |---------|-----------|-------------|
//! | SmallInt | i16 | smallint |
//! | SmallUint | u16 | smallint (unsigned) |
//! | Integer | i32 | integer |
//! | Uint | u32 | integer (unsigned) |
//! | BigInt | i64 | bigint |
//! | BigUint | u64 | bigint (unsigned) |
//! | Real | f32 | real |
//! | DoublePrecision | f64 | double precision |
//! | Varchar | Cow<[u8]> | varchar |

use crate::types::DataType;
use std::borrow::Cow;

/// Typed runtime representation of one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    SmallInt(i16),
    SmallUint(u16),
    Integer(i32),
    Uint(u32),
    BigInt(i64),
    BigUint(u64),
    Real(f32),
    DoublePrecision(f64),
    Varchar(Cow<'a, [u8]>),
}

impl<'a> Value<'a> {
    /// Returns the column type tag this value encodes as.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::SmallInt(_) | Value::SmallUint(_) => DataType::SmallInt,
            Value::Integer(_) | Value::Uint(_) => DataType::Integer,
            Value::BigInt(_) | Value::BigUint(_) => DataType::BigInt,
            Value::Real(_) => DataType::Real,
            Value::DoublePrecision(_) => DataType::DoublePrecision,
            Value::Varchar(_) => DataType::Varchar,
        }
    }

    /// Returns the varchar payload bytes, or None for scalar values.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Varchar(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the varchar payload as UTF-8 text, or None for scalar
    /// values or non-UTF-8 payloads.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Widens any integer variant to i64, or None for other variants.
    /// BigUint values above `i64::MAX` do not fit and return None.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::SmallInt(v) => Some(i64::from(*v)),
            Value::SmallUint(v) => Some(i64::from(*v)),
            Value::Integer(v) => Some(i64::from(*v)),
            Value::Uint(v) => Some(i64::from(*v)),
            Value::BigInt(v) => Some(*v),
            Value::BigUint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Widens either float variant to f64, or None for other variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(f64::from(*v)),
            Value::DoublePrecision(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts into a value that owns its payload.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::SmallInt(v) => Value::SmallInt(v),
            Value::SmallUint(v) => Value::SmallUint(v),
            Value::Integer(v) => Value::Integer(v),
            Value::Uint(v) => Value::Uint(v),
            Value::BigInt(v) => Value::BigInt(v),
            Value::BigUint(v) => Value::BigUint(v),
            Value::Real(v) => Value::Real(v),
            Value::DoublePrecision(v) => Value::DoublePrecision(v),
            Value::Varchar(b) => Value::Varchar(Cow::Owned(b.into_owned())),
        }
    }
}
