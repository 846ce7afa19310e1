use super::RequestBound;
use crate::time::{Duration, Service};

/// A wrapper type for representing the total demand of a contiguous
/// run of individual demand sources, e.g., all tasks that precede the
/// task under analysis in an evaluation order.
#[derive(Clone, Debug)]
pub struct Slice<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    pub fn of(slice: &'a [T]) -> Self {
        Slice { slice }
    }
}

impl<'a, T: RequestBound> RequestBound for Slice<'a, T> {
    fn service_needed(&self, delta: Duration) -> Option<Service> {
        self.slice.iter().try_fold(Service::none(), |total, rbf| {
            total.checked_add(rbf.service_needed(delta)?)
        })
    }
}
