use alloc::collections::TryReserveError;
use cfg_if::cfg_if;
use core::fmt;

/// The ways in which constructing or growing a [`PriorityHeap`](crate::PriorityHeap)
/// can fail.
///
/// Failing to find an item to remove is not an error; [`remove`] simply returns
/// `None`.
///
/// [`remove`]: crate::PriorityHeap::remove
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// A capacity of zero was requested.
    InvalidCapacity,
    /// A vector offered as an already-built heap has a child at `index` that
    /// orders strictly before its parent.
    HeapViolation {
        /// Position of the first offending child.
        index: usize,
    },
    /// The backing buffer could not be grown.
    Alloc(TryReserveError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidCapacity => f.write_str("heap capacity must be positive"),
            HeapError::HeapViolation { index } => write!(
                f,
                "item at index {index} orders before its parent at index {}",
                index.saturating_sub(1) / 2
            ),
            HeapError::Alloc(err) => write!(f, "failed to grow heap storage: {err}"),
        }
    }
}

impl From<TryReserveError> for HeapError {
    fn from(err: TryReserveError) -> Self {
        HeapError::Alloc(err)
    }
}

cfg_if! {
    if #[cfg(feature = "error_in_core")] {
        impl core::error::Error for HeapError {
            fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
                match self {
                    HeapError::Alloc(err) => Some(err),
                    _ => None,
                }
            }
        }
    } else if #[cfg(feature = "std")] {
        impl std::error::Error for HeapError {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    HeapError::Alloc(err) => Some(err),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_pair() {
        let err = HeapError::HeapViolation { index: 5 };
        assert_eq!(err.to_string(), "item at index 5 orders before its parent at index 2");
    }

    #[test]
    fn display_invalid_capacity() {
        assert_eq!(HeapError::InvalidCapacity.to_string(), "heap capacity must be positive");
    }
}
