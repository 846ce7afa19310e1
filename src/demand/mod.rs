use auto_impl::auto_impl;

use crate::time::{Duration, Service};

/// The general interface for processor demand. This can represent the
/// demand of a single task, or the cumulative demand of multiple tasks.
#[auto_impl(&, Box, Rc)]
pub trait RequestBound {
    /// Bound the total amount of service needed in an interval of length
    /// `delta`. Yields `None` if the bound exceeds the range of [Service].
    fn service_needed(&self, delta: Duration) -> Option<Service>;
}

mod rbf;
mod slice;

pub use rbf::RBF;
pub use slice::Slice;
