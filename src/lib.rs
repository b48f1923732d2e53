//! probing-dict: an open-addressing dictionary with quadratic probing,
//! tombstone deletion and prime-sized storage.
//!
//! Internal Design:
//!
//! Summary
//! - `ProbingHashTable<K, V, S>` keeps its entries in a `Vec` of slots whose
//!   length is always prime. Each slot is `Empty`, `Tombstone` or
//!   `Occupied { key, value, hash }`.
//! - `CharacterDatabase` is a small client: a list of `Character` rows plus a
//!   `ProbingHashTable<String, usize>` mapping names to rows.
//!
//! Probing
//! - A key starts at `hash mod len`. Step `i` moves the running index forward
//!   by `i * i`, so the offsets from the start are 1, 5, 14, 30, ...
//! - Lookups stop at the first empty slot or matching key and walk past
//!   tombstones. Inserts remember the first tombstone and reuse it.
//! - A probe looks at no more than `len` slots. An insert that runs out of
//!   budget with no tombstone to reuse grows the table and retries.
//!
//! Growth
//! - Once `len / capacity` would exceed the load factor (0.5 by default) the
//!   table moves to the next prime at or above twice its length. The length
//!   never exceeds `2 * max_capacity`; an insert that would need more is
//!   rolled back and reported as `TableError::Size`.
//! - Each entry stores its `u64` hash, so rehashing never calls `K: Hash`
//!   or `K: Eq`. The new layout is planned before any entry moves.
//!
//! Errors
//! - Ordinary failures (`Capacity`, `Size`, `InvalidArgument`,
//!   `IteratorExhausted`) are returned as `TableError`.
//! - Missing backing storage is `TableError::Integrity` from fallible calls
//!   and a panic from the infallible accessors (`get`, `remove`, ...).
//!   `verify()` runs a full consistency scan.
//!
//! Notes and non-goals
//! - Single-threaded; no interior mutability.
//! - The table never shrinks; `clear()` keeps the current length.
//! - Iterators borrow the table, so mutation during iteration does not
//!   compile.

pub mod character;
pub mod character_database;
pub mod config;
pub mod error;
pub mod iter;
pub mod prime;
pub mod probing_hash_table;
mod probing_hash_table_proptest;
mod slot;

// Public surface
pub use character::Character;
pub use character_database::CharacterDatabase;
pub use config::TableConfig;
pub use error::TableError;
pub use prime::{is_prime, next_prime};
pub use probing_hash_table::{Dump, ProbingHashTable};
