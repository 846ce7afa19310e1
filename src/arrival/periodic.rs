use super::{divide_with_ceil, ArrivalBound};
use crate::time::Duration;

/// Classic jitter-free periodic activation as introduced by Liu & Layland.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Periodic {
    /// The exact separation between two job releases.
    pub period: Duration,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Periodic { period }
    }
}

impl ArrivalBound for Periodic {
    /// Panics if the period is zero; check [ArrivalBound::is_well_formed]
    /// first.
    fn number_arrivals(&self, delta: Duration) -> usize {
        divide_with_ceil(delta, self.period) as usize
    }

    fn is_well_formed(&self) -> bool {
        self.period.is_non_zero()
    }
}
