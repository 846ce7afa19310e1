use auto_impl::auto_impl;

use crate::time::Service;

/// The interface for models of per-job and per-job-sequence
/// *maximum* execution costs.
#[auto_impl(&, Box, Rc)]
pub trait JobCostModel {
    /// Model: yield the maximum cumulative processor demand of any
    /// `n` consecutive jobs, or `None` if it exceeds the range of
    /// [Service].
    fn cost_of_jobs(&self, n: usize) -> Option<Service>;

    /// Model: the WCET of a single job.
    fn per_job_cost(&self) -> Service;
}

mod scalar;

pub use scalar::Scalar;

#[cfg(test)]
mod tests;
