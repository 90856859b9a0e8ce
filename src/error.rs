use std::error::Error;
use std::fmt;

/// Failure modes for tree builds and updates. A failed build leaves the
/// previous tree untouched; a failed update keeps the boxes refreshed so
/// far and leaves the rest as they were, so the tree stays queryable
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BvhError {
    /// The bounds adapter returned `None` for the object at this index.
    ObjectBounds(usize),
    /// More objects than the node arena can address.
    CapacityExceeded(usize),
}

impl fmt::Display for BvhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BvhError::ObjectBounds(index) => {
                write!(f, "bounds adapter failed for object {index}")
            }
            BvhError::CapacityExceeded(count) => {
                write!(f, "{count} objects exceed the addressable node count")
            }
        }
    }
}

impl Error for BvhError {}
