//! Grow-only byte buffer backing a packed AST.
//!
//! The buffer owns its storage; callers address regions by offset, never by
//! raw pointer or slice, because growth may relocate the backing store.
//! Offsets stay valid across growth; any slice borrowed from the buffer does
//! not.

use smallvec::SmallVec;

/// Inline capacity before a [`ByteBuffer`] spills onto the heap.
const INLINE_CAPACITY: usize = 64;

/// A contiguous, append/insert/trim region of memory addressed by offset.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    bytes: SmallVec<[u8; INLINE_CAPACITY]>,
}

impl ByteBuffer {
    /// An empty buffer with no backing allocation yet.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty buffer that can hold at least `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: SmallVec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends `data` and returns the starting offset of the new region.
    pub fn append(&mut self, data: &[u8]) -> u32 {
        let start = self.bytes.len() as u32;
        self.bytes.extend_from_slice(data);
        start
    }

    /// Appends `n` zeroed bytes and returns the starting offset. Used to
    /// reserve skip slots that the writer will patch in once their target
    /// is known.
    pub fn append_reserved(&mut self, n: usize) -> u32 {
        let start = self.bytes.len();
        self.bytes.resize(start + n, 0);
        start as u32
    }

    /// Inserts `data` at `offset`, shifting the tail right by `data.len()`.
    pub fn insert(&mut self, offset: u32, data: &[u8]) {
        let idx = offset as usize;
        debug_assert!(idx <= self.bytes.len(), "insert offset out of bounds");
        let tail: SmallVec<[u8; INLINE_CAPACITY]> = self.bytes.drain(idx..).collect();
        self.bytes.extend_from_slice(data);
        self.bytes.extend(tail);
    }

    /// Inserts `n` zeroed bytes at `offset`, shifting the tail right.
    pub fn insert_reserved(&mut self, offset: u32, n: usize) {
        let idx = offset as usize;
        debug_assert!(idx <= self.bytes.len(), "insert offset out of bounds");
        let tail: SmallVec<[u8; INLINE_CAPACITY]> = self.bytes.drain(idx..).collect();
        self.bytes.resize(idx + n, 0);
        self.bytes.extend(tail);
    }

    /// Overwrites `data.len()` bytes starting at `offset` in place.
    pub fn set(&mut self, offset: u32, data: &[u8]) {
        let idx = offset as usize;
        self.bytes[idx..idx + data.len()].copy_from_slice(data);
    }

    /// Shrinks the backing allocation to fit the current length.
    pub fn trim(&mut self) {
        self.bytes.shrink_to_fit();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, offset: u32) -> u8 {
        self.bytes[offset as usize]
    }

    pub fn get_slice(&self, offset: u32, len: usize) -> &[u8] {
        let idx = offset as usize;
        &self.bytes[idx..idx + len]
    }

    /// Bounds-checked counterpart to [`Self::get`], for callers reading a
    /// buffer of unguaranteed provenance.
    pub fn get_checked(&self, offset: u32) -> Option<u8> {
        self.bytes.get(offset as usize).copied()
    }

    /// Bounds-checked counterpart to [`Self::get_slice`].
    pub fn get_slice_checked(&self, offset: u32, len: usize) -> Option<&[u8]> {
        let idx = offset as usize;
        let end = idx.checked_add(len)?;
        self.bytes.get(idx..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_prior_length_as_offset() {
        let mut buf = ByteBuffer::new();
        assert_eq!(buf.append(&[1, 2, 3]), 0);
        assert_eq!(buf.append(&[4, 5]), 3);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn reserved_bytes_are_zeroed_and_patchable() {
        let mut buf = ByteBuffer::new();
        let off = buf.append_reserved(2);
        assert_eq!(buf.get_slice(off, 2), &[0, 0]);
        buf.set(off, &[0x01, 0xff]);
        assert_eq!(buf.get_slice(off, 2), &[0x01, 0xff]);
    }

    #[test]
    fn insert_shifts_tail_right() {
        let mut buf = ByteBuffer::new();
        buf.append(&[1, 2, 3]);
        buf.insert(1, &[9, 9]);
        assert_eq!(buf.as_slice(), &[1, 9, 9, 2, 3]);
    }

    #[test]
    fn insert_reserved_zeroes_new_region() {
        let mut buf = ByteBuffer::new();
        buf.append(&[1, 2]);
        buf.insert_reserved(1, 3);
        assert_eq!(buf.as_slice(), &[1, 0, 0, 0, 2]);
    }

    #[test]
    fn offsets_survive_growth_past_inline_capacity() {
        let mut buf = ByteBuffer::new();
        let first = buf.append(&[0xaa]);
        for _ in 0..INLINE_CAPACITY * 4 {
            buf.append(&[0]);
        }
        assert_eq!(buf.get(first), 0xaa);
    }
}
