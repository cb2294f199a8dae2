use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};
use serde::Serialize;

/// Trait bound for edge weights stored in a graph
///
/// Weights are unsigned integers, so a negative edge cannot be represented.
/// The largest representable value is reserved as the "infinite" distance.
pub trait EdgeWeight:
    PrimInt + Unsigned + Debug + Display + Serialize + Send + Sync + 'static
{
    /// Returns the sentinel used for an infinite (unreached) distance
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the infinite sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::max_value()
    }
}

impl<W> EdgeWeight for W where
    W: PrimInt + Unsigned + Debug + Display + Serialize + Send + Sync + 'static
{
}
