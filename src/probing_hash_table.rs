//! ProbingHashTable: open addressing with quadratic probing and tombstones.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::iter::{Iter, Keys, Values};
use crate::prime::{is_prime, next_prime};
use crate::slot::{empty_slots, ProbeSeq, Slot};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::hash_map::DefaultHashBuilder;

/// A key-value dictionary stored in a prime-length array of slots.
///
/// Collisions are resolved by quadratic probing, removed entries leave
/// tombstones behind, and the table roughly doubles to the next prime
/// whenever the load factor would exceed [`TableConfig::max_load_factor`].
pub struct ProbingHashTable<K, V, S = DefaultHashBuilder> {
    hasher: S,
    config: TableConfig,
    slots: Vec<Slot<K, V>>,
    len: usize,
}

/// Outcome of walking a probe sequence for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Found(usize),
    /// Key absent; the first tombstone seen, else the terminating empty slot.
    Vacant(usize),
    /// Key absent and the probe budget ran out with nowhere to insert.
    Exhausted,
}

impl<K, V> ProbingHashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates a table with the default configuration and hasher.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, TableError> {
        Self::with_config_and_hasher(initial_capacity, TableConfig::default(), Default::default())
    }

    pub fn with_config(initial_capacity: usize, config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(initial_capacity, config, Default::default())
    }
}

impl<K, V, S> ProbingHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    pub fn with_capacity_and_hasher(initial_capacity: usize, hasher: S) -> Result<Self, TableError> {
        Self::with_config_and_hasher(initial_capacity, TableConfig::default(), hasher)
    }

    /// Creates a table whose length is the smallest prime at or above
    /// `initial_capacity` (after raising it to `config.min_capacity`).
    ///
    /// Fails with [`TableError::Capacity`] when `initial_capacity` is above
    /// `config.max_capacity`, and with [`TableError::Size`] when the chosen
    /// prime is above `2 * config.max_capacity`.
    pub fn with_config_and_hasher(
        initial_capacity: usize,
        config: TableConfig,
        hasher: S,
    ) -> Result<Self, TableError> {
        config.validate()?;
        let capacity = config.coerce_capacity(initial_capacity)?;
        let table_len = next_prime(capacity);
        check_size(table_len, &config)?;
        log::debug!("new table: requested {initial_capacity}, allocated {table_len} slots");
        Ok(Self {
            hasher,
            config,
            slots: empty_slots(table_len),
            len: 0,
        })
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current table length (number of slots).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    fn check_integrity(&self) -> Result<(), TableError> {
        if self.slots.is_empty() {
            return Err(TableError::Integrity);
        }
        Ok(())
    }

    /// Backing storage for infallible accessors; missing storage is fatal.
    fn storage(&self) -> &[Slot<K, V>] {
        assert!(!self.slots.is_empty(), "{}", TableError::Integrity);
        &self.slots
    }

    fn probe<Q>(&self, hash: u64, q: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let slots = self.storage();
        let mut tombstone = None;
        for index in ProbeSeq::new(hash, slots.len()) {
            match &slots[index] {
                Slot::Empty => return Probe::Vacant(tombstone.unwrap_or(index)),
                Slot::Tombstone => {
                    tombstone.get_or_insert(index);
                }
                Slot::Occupied { key, hash: h, .. } => {
                    if *h == hash && key.borrow() == q {
                        return Probe::Found(index);
                    }
                }
            }
        }
        match tombstone {
            Some(index) => Probe::Vacant(index),
            None => Probe::Exhausted,
        }
    }

    fn find_index<Q>(&self, q: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.probe(self.make_hash(q), q) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Inserts `key -> value`.
    ///
    /// Returns the previous value when `key` was already present (the entry
    /// is updated in place), or `None` for a new entry. A new entry that
    /// pushes the load factor over the limit grows the table before
    /// returning; if growth would exceed the size limit the insert is
    /// rolled back and [`TableError::Size`] is returned.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        self.check_integrity()?;
        let hash = self.make_hash(&key);
        loop {
            match self.probe(hash, &key) {
                Probe::Found(index) => {
                    let Slot::Occupied { value: slot_value, .. } = &mut self.slots[index] else {
                        return Err(TableError::Integrity);
                    };
                    return Ok(Some(mem::replace(slot_value, value)));
                }
                Probe::Vacant(index) => {
                    let previous =
                        mem::replace(&mut self.slots[index], Slot::Occupied { key, value, hash });
                    self.len += 1;
                    if self.is_too_full() {
                        if let Err(e) = self.grow() {
                            self.slots[index] = previous;
                            self.len -= 1;
                            return Err(e);
                        }
                    }
                    return Ok(None);
                }
                Probe::Exhausted => {
                    log::trace!(
                        "probe budget exhausted at {} of {} slots; growing",
                        self.len,
                        self.slots.len()
                    );
                    self.grow()?;
                }
            }
        }
    }

    /// Removes `key`, leaving a tombstone in its slot.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(q)?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                Some(value)
            }
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(q)?;
        self.slots[index].entry().map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(q)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(q).is_some()
    }

    /// Empties every slot. The table keeps its current length.
    pub fn clear(&mut self) {
        self.storage();
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.storage(), self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// One line per slot: `i: empty`, `i: available` or `i: key -> value`.
    pub fn dump(&self) -> Dump<'_, K, V> {
        Dump {
            slots: self.storage(),
        }
    }

    fn is_too_full(&self) -> bool {
        self.len as f64 > self.config.max_load_factor * self.slots.len() as f64
    }

    fn grow(&mut self) -> Result<(), TableError> {
        let target = next_prime(self.slots.len().saturating_mul(2));
        check_size(target, &self.config)?;
        self.rehash(target)
    }

    /// Moves every live entry into a fresh table of (at least) `table_len`
    /// slots, in ascending old-slot order. Tombstones are dropped.
    ///
    /// Placement is planned from the cached hashes before anything moves,
    /// so a failure leaves the table untouched.
    fn rehash(&mut self, mut table_len: usize) -> Result<(), TableError> {
        let plan = loop {
            match plan_placement(&self.slots, table_len) {
                Some(plan) => break plan,
                None => {
                    let bigger = next_prime(table_len.saturating_mul(2));
                    check_size(bigger, &self.config)?;
                    table_len = bigger;
                }
            }
        };
        log::debug!(
            "growing table from {} to {} slots ({} entries)",
            self.slots.len(),
            table_len,
            self.len
        );
        let mut fresh = empty_slots(table_len);
        let old = mem::take(&mut self.slots);
        for (slot, target) in old.into_iter().zip(plan) {
            if let Some(target) = target {
                fresh[target] = slot;
            }
        }
        self.slots = fresh;
        Ok(())
    }

    /// Full consistency scan, for debugging and tests.
    ///
    /// Checks that the length is prime and within bounds, that the stored
    /// count matches the occupied slots, that the load factor holds, and
    /// that every entry is found again by probing for its own key.
    pub fn verify(&self) -> Result<(), TableError> {
        self.check_integrity()?;
        let table_len = self.slots.len();
        if !is_prime(table_len) || table_len > self.config.max_table_len() {
            return Err(TableError::Integrity);
        }
        let occupied = self.slots.iter().filter(|s| s.is_occupied()).count();
        if occupied != self.len || self.is_too_full() {
            return Err(TableError::Integrity);
        }
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { key, hash, .. } = slot {
                if *hash != self.make_hash(key) || self.probe(*hash, key) != Probe::Found(index) {
                    return Err(TableError::Integrity);
                }
            }
        }
        Ok(())
    }
}

fn check_size(table_len: usize, config: &TableConfig) -> Result<(), TableError> {
    let max = config.max_table_len();
    if table_len > max {
        return Err(TableError::Size {
            size: table_len,
            max,
        });
    }
    Ok(())
}

/// Target index for each old slot (`None` for non-occupied), or `None` if
/// some entry finds no free slot within its probe budget.
fn plan_placement<K, V>(slots: &[Slot<K, V>], table_len: usize) -> Option<Vec<Option<usize>>> {
    let mut taken = vec![false; table_len];
    let mut plan = Vec::with_capacity(slots.len());
    for slot in slots {
        let target = match slot {
            Slot::Occupied { hash, .. } => {
                let index = ProbeSeq::new(*hash, table_len).find(|&i| !taken[i])?;
                taken[index] = true;
                Some(index)
            }
            Slot::Empty | Slot::Tombstone => None,
        };
        plan.push(target);
    }
    Some(plan)
}

impl<'a, K, V, S> IntoIterator for &'a ProbingHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> fmt::Debug for ProbingHashTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().filter_map(Slot::entry))
            .finish()
    }
}

/// Slot-by-slot rendering returned by [`ProbingHashTable::dump`].
pub struct Dump<'a, K, V> {
    slots: &'a [Slot<K, V>],
}

impl<K, V> fmt::Display for Dump<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: empty")?,
                Slot::Tombstone => writeln!(f, "{index}: available")?,
                Slot::Occupied { key, value, .. } => writeln!(f, "{index}: {key:?} -> {value:?}")?,
            }
        }
        Ok(())
    }
}
