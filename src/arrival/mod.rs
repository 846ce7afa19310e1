/*! Models of task activation processes

This module provides the trait [ArrivalBound], which bounds how often a
task can be activated within an interval, and the [Periodic] model used
by the benchmark task set.
*/

use auto_impl::auto_impl;

use crate::time::Duration;

/// The main interface for models describing activation processes.
#[auto_impl(&, Box, Rc)]
pub trait ArrivalBound {
    /// Bound the number of jobs released in any interval of length `delta`.
    fn number_arrivals(&self, delta: Duration) -> usize;

    /// Whether the model can be evaluated at all. A model that would
    /// divide by zero reports `false` here.
    fn is_well_formed(&self) -> bool {
        true
    }
}

mod periodic;

pub use periodic::Periodic;

// common helper function
fn divide_with_ceil(a: Duration, b: Duration) -> u64 {
    let (a, b) = (a.in_units(), b.in_units());
    a / b + (a % b > 0) as u64
}

#[cfg(test)]
mod tests;
