//! Borrowing iterators over the occupied slots of a table.
//!
//! All three walk the backing storage in ascending slot order, skipping
//! empty and tombstoned slots. They hold a shared borrow of the table, so
//! the table cannot be mutated (or grown) while one is alive.

use crate::error::TableError;
use crate::slot::Slot;
use core::iter::FusedIterator;

/// Iterator over `(&K, &V)` pairs.
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: len,
        }
    }

    /// Like `next`, but reports exhaustion as an error.
    pub fn try_next(&mut self) -> Result<(&'a K, &'a V), TableError> {
        self.next().ok_or(TableError::IteratorExhausted)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.by_ref().find_map(Slot::entry)?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over keys, in slot order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    /// Like `next`, but reports exhaustion as an error.
    pub fn try_next(&mut self) -> Result<&'a K, TableError> {
        self.next().ok_or(TableError::IteratorExhausted)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over values, in slot order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    /// Like `next`, but reports exhaustion as an error.
    pub fn try_next(&mut self) -> Result<&'a V, TableError> {
        self.next().ok_or(TableError::IteratorExhausted)
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(key: &'static str, value: i32) -> Slot<&'static str, i32> {
        Slot::Occupied {
            key,
            value,
            hash: 0,
        }
    }

    #[test]
    fn skips_empty_and_tombstones_in_slot_order() {
        let slots = vec![
            Slot::Empty,
            occupied("b", 2),
            Slot::Tombstone,
            occupied("a", 1),
            Slot::Empty,
        ];
        let pairs: Vec<_> = Iter::new(&slots, 2).collect();
        assert_eq!(pairs, [(&"b", &2), (&"a", &1)]);

        let mut keys = Keys {
            inner: Iter::new(&slots, 2),
        };
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.try_next(), Ok(&"b"));
        assert_eq!(keys.try_next(), Ok(&"a"));
        assert_eq!(keys.try_next(), Err(TableError::IteratorExhausted));
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn values_exhaust_with_error() {
        let slots: Vec<Slot<&str, i32>> = vec![Slot::Tombstone, Slot::Empty];
        let mut values = Values {
            inner: Iter::new(&slots, 0),
        };
        assert_eq!(values.try_next(), Err(TableError::IteratorExhausted));
    }
}
