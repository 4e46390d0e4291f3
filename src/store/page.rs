//! # In-Memory Object Page
//!
//! This module provides `Page`, the reference `ObjectStore` implementation:
//! an append-only byte heap with an oid index and a fixed byte capacity.
//! Each column of a table owns one page, so oids are scoped per column.
//!
//! ## Page Layout
//!
//! ```text
//! +------------------+
//! | PageHeader (40B) |  magic, version, capacity, used, count, next oid
//! +------------------+
//! | Heap             |  concatenated value encodings, append-only
//! +------------------+
//! ```
//!
//! The oid index (oid -> heap offset) is runtime state and is not part of
//! the serialized layout, mirroring how a storage engine rebuilds its
//! object directory on open.
//!
//! ## Capacity
//!
//! A page never grows past its configured capacity. `insert_object` returns
//! 0 once the heap is full, which the row paths surface as a capacity
//! failure; nothing is partially written.
//!
//! ## Endianness
//!
//! Header fields use little-endian encoding via the zerocopy wrapper types,
//! so the header bytes are stable across platforms.

use eyre::{ensure, Result};
use hashbrown::HashMap;
use zerocopy::little_endian::{U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::rows::codec::FieldCodec;
use crate::store::{ObjectId, ObjectStore, NIL_OID};

pub const PAGE_MAGIC: &[u8; 8] = b"celldbpg";
pub const CURRENT_VERSION: u32 = 1;
pub const PAGE_HEADER_SIZE: usize = 40;
pub const DEFAULT_PAGE_CAPACITY: usize = 16384;

/// Fixed-size page header with little-endian fields.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct PageHeader {
    magic: [u8; 8],
    version: U32,
    capacity: U32,
    used: U32,
    object_count: U32,
    next_oid: U64,
    reserved: [u8; 8],
}

const _: () = assert!(std::mem::size_of::<PageHeader>() == PAGE_HEADER_SIZE);

impl PageHeader {
    pub fn new(capacity: u32) -> Self {
        Self {
            magic: *PAGE_MAGIC,
            version: U32::new(CURRENT_VERSION),
            capacity: U32::new(capacity),
            used: U32::new(0),
            object_count: U32::new(0),
            next_oid: U64::new(NIL_OID + 1),
            reserved: [0u8; 8],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= PAGE_HEADER_SIZE,
            "buffer too small for PageHeader: {} < {}",
            bytes.len(),
            PAGE_HEADER_SIZE
        );

        let header = Self::ref_from_bytes(&bytes[..PAGE_HEADER_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse PageHeader: {:?}", e))?;

        ensure!(&header.magic == PAGE_MAGIC, "invalid magic bytes in page");

        ensure!(
            header.version.get() == CURRENT_VERSION,
            "unsupported page version: {} (expected {})",
            header.version.get(),
            CURRENT_VERSION
        );

        Ok(header)
    }

    pub fn version(&self) -> u32 {
        self.version.get()
    }

    zerocopy_accessors! {
        capacity: u32,
        used: u32,
        object_count: u32,
        next_oid: u64,
    }
}

/// Append-only in-memory object store with a fixed byte capacity.
#[derive(Debug)]
pub struct Page {
    header: PageHeader,
    heap: Vec<u8>,
    index: HashMap<ObjectId, usize>,
}

impl Page {
    /// Creates a page with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PAGE_CAPACITY)
    }

    /// Creates a page holding at most `capacity` heap bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            header: PageHeader::new(capacity as u32),
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn header(&self) -> &PageHeader {
        &self.header
    }

    /// Heap bytes currently in use.
    pub fn used(&self) -> usize {
        self.header.used() as usize
    }

    /// Maximum heap bytes this page will hold.
    pub fn capacity(&self) -> usize {
        self.header.capacity() as usize
    }

    /// Number of objects stored.
    pub fn object_count(&self) -> usize {
        self.header.object_count() as usize
    }

    /// Returns true if an object exists under `oid`.
    pub fn contains(&self, oid: ObjectId) -> bool {
        self.index.contains_key(&oid)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for Page {
    fn next_oid(&mut self) -> ObjectId {
        let oid = self.header.next_oid();
        self.header.set_next_oid(oid + 1);
        oid
    }

    fn insert_object<T: FieldCodec>(&mut self, oid: ObjectId, value: &T) -> usize {
        let len = value.encoded_len();
        if len == 0 || self.used() + len > self.capacity() {
            return 0;
        }

        let start = self.heap.len();
        self.heap.resize(start + len, 0);
        let written = match value.encode_into(&mut self.heap[start..]) {
            Some(n) => n,
            None => {
                self.heap.truncate(start);
                return 0;
            }
        };
        debug_assert_eq!(written, len);

        self.index.insert(oid, start);
        self.header.set_used((self.used() + written) as u32);
        self.header.set_object_count(self.header.object_count() + 1);
        written
    }

    fn fetch_object<T: FieldCodec>(&self, oid: ObjectId, out: &mut T) -> (bool, usize) {
        let Some(&start) = self.index.get(&oid) else {
            return (false, 0);
        };

        match T::decode_from(&self.heap[start..]) {
            Some((value, read)) => {
                *out = value;
                (true, read)
            }
            None => (false, 0),
        }
    }
}
