//! Construction-time limits for [`ProbingHashTable`](crate::ProbingHashTable).

use crate::error::TableError;

/// Sizing and growth limits, fixed for the lifetime of a table.
///
/// The table length never drops below `min_capacity` and never exceeds
/// `2 * max_capacity`; growth triggers once `len / capacity` would go above
/// `max_load_factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub min_capacity: usize,
    pub max_capacity: usize,
    pub max_load_factor: f64,
}

impl TableConfig {
    pub const DEFAULT_MIN_CAPACITY: usize = 5;
    pub const DEFAULT_MAX_CAPACITY: usize = 10_000;
    pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

    pub const fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
            max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
        }
    }

    /// Upper bound on the table length, including after growth.
    pub fn max_table_len(&self) -> usize {
        self.max_capacity.saturating_mul(2)
    }

    pub(crate) fn validate(&self) -> Result<(), TableError> {
        if self.min_capacity < 2 {
            return Err(TableError::InvalidArgument("minimum capacity must be at least 2"));
        }
        if self.min_capacity > self.max_capacity {
            return Err(TableError::InvalidArgument(
                "minimum capacity must not exceed maximum capacity",
            ));
        }
        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(TableError::InvalidArgument("load factor must be in (0, 1]"));
        }
        Ok(())
    }

    /// Clamps `requested` up to the minimum; rejects it above the maximum.
    pub(crate) fn coerce_capacity(&self, requested: usize) -> Result<usize, TableError> {
        if requested > self.max_capacity {
            return Err(TableError::Capacity {
                requested,
                max: self.max_capacity,
            });
        }
        if requested < self.min_capacity {
            log::trace!(
                "requested capacity {requested} raised to minimum {}",
                self.min_capacity
            );
        }
        Ok(requested.max(self.min_capacity))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
