//! Error type shared by the table and its collaborators.

use core::fmt;

/// Failures reported by [`ProbingHashTable`](crate::ProbingHashTable) and
/// the character database built on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A caller-supplied argument was rejected before any state changed.
    InvalidArgument(&'static str),
    /// The requested initial capacity is above the configured maximum.
    Capacity { requested: usize, max: usize },
    /// A computed table length is above twice the configured maximum.
    Size { size: usize, max: usize },
    /// The table's backing storage is missing or inconsistent.
    Integrity,
    /// `try_next` was called on an exhausted iterator.
    IteratorExhausted,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            TableError::Capacity { requested, max } => write!(
                f,
                "attempt to create a dictionary whose capacity {requested} is larger than {max}"
            ),
            TableError::Size { size, max } => write!(
                f,
                "dictionary has become too large: {size} slots exceeds {max}"
            ),
            TableError::Integrity => f.write_str("object is corrupt"),
            TableError::IteratorExhausted => f.write_str("iterator has no more elements"),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(TableError::Integrity.to_string(), "object is corrupt");
        assert_eq!(
            TableError::Capacity {
                requested: 999_999,
                max: 10_000
            }
            .to_string(),
            "attempt to create a dictionary whose capacity 999999 is larger than 10000"
        );
        assert_eq!(
            TableError::InvalidArgument("must be a positive number").to_string(),
            "invalid argument: must be a positive number"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err::<(), _>(TableError::IteratorExhausted)?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "iterator has no more elements");
    }
}
