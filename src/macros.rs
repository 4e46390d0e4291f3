//! # Internal Macros
//!
//! This module provides internal macros for reducing boilerplate in celldb.
//!
//! ## zerocopy_accessors!
//!
//! Generates getter and setter methods for zerocopy struct fields that use
//! little-endian wrapper types (U32, U64).
//!
//! ### Usage
//!
//! ```ignore
//! use zerocopy::little_endian::{U32, U64};
//!
//! #[repr(C)]
//! struct Header {
//!     used: U32,
//!     next_oid: U64,
//! }
//!
//! impl Header {
//!     zerocopy_accessors! {
//!         used: u32,
//!         next_oid: u64,
//!     }
//! }
//!
//! // Generates:
//! // pub fn used(&self) -> u32 { self.used.get() }
//! // pub fn set_used(&mut self, val: u32) { self.used = U32::new(val); }
//! // pub fn next_oid(&self) -> u64 { self.next_oid.get() }
//! // pub fn set_next_oid(&mut self, val: u64) { self.next_oid = U64::new(val); }
//! ```

/// Generates getter and setter methods for zerocopy little-endian fields.
#[macro_export]
macro_rules! zerocopy_accessors {
    (@impl $field:ident, u32) => {
        ::paste::paste! {
            #[inline]
            pub fn $field(&self) -> u32 {
                self.$field.get()
            }

            #[inline]
            pub fn [<set_ $field>](&mut self, val: u32) {
                self.$field = ::zerocopy::little_endian::U32::new(val);
            }
        }
    };
    (@impl $field:ident, u64) => {
        ::paste::paste! {
            #[inline]
            pub fn $field(&self) -> u64 {
                self.$field.get()
            }

            #[inline]
            pub fn [<set_ $field>](&mut self, val: u64) {
                self.$field = ::zerocopy::little_endian::U64::new(val);
            }
        }
    };
    ($($field:ident : $ty:tt),* $(,)?) => {
        $(
            $crate::zerocopy_accessors!(@impl $field, $ty);
        )*
    };
}
