//! Slot states and the quadratic probe sequence.

/// One cell of the table.
#[derive(Debug, Clone)]
pub(crate) enum Slot<K, V> {
    /// Never held an entry since the last clear or resize.
    Empty,
    /// Held an entry that was removed; probes continue past it.
    Tombstone,
    Occupied { key: K, value: V, hash: u64 },
}

impl<K, V> Slot<K, V> {
    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    #[inline]
    pub(crate) fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied { key, value, .. } => Some((key, value)),
            _ => None,
        }
    }
}

pub(crate) fn empty_slots<K, V>(len: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, || Slot::Empty);
    slots
}

/// Candidate indices for a hash in a table of `len` slots.
///
/// Starts at `hash mod len`; step `i` adds `i * i` to the previous index,
/// so offsets from the base accumulate as 1, 5, 14, 30, ... At most `len`
/// indices are produced.
#[derive(Debug, Clone)]
pub(crate) struct ProbeSeq {
    index: usize,
    step: usize,
    len: usize,
}

impl ProbeSeq {
    pub(crate) fn new(hash: u64, len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            index: (hash % len as u64) as usize,
            step: 0,
            len,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.step == self.len {
            return None;
        }
        let current = self.index;
        self.step += 1;
        self.index = (self.index + (self.step * self.step) % self.len) % self.len;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.step;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProbeSeq {}
