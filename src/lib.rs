/*! Single-pass slack estimation for periodic task sets

This crate estimates the timing margin ("slack") of the tasks of a small
periodic task set scheduled by a fixed-priority preemptive scheduler. For
each task, the interference of the tasks preceding it in an evaluation
order (and its own demand) is summed over a window as long as its
deadline and subtracted from that deadline.

The estimate is a single pass, not a fixed-point response-time analysis;
see [slack] for the exact definition.

The modules follow the usual decomposition of the analysis of
real-time systems:

- [arrival] bounds how often a task is activated,
- [wcet] bounds how much each activation costs,
- [demand] combines both into request-bound functions,
- [slack] turns demand into per-task slack and report lines.

The [table] and [intake] modules provide the benchmark task set and its
console-supplied WCETs.
*/

pub mod arrival;
pub mod demand;
pub mod intake;
pub mod slack;
pub mod table;
pub mod task;
pub mod time;
pub mod wcet;

#[cfg(test)]
mod tests {
    use crate::time::{Duration, Service};

    /// Shorthand for creating interval lengths in tests.
    pub fn d(units: u64) -> Duration {
        Duration::from(units)
    }

    /// Shorthand for creating amounts of service in tests.
    pub fn s(units: u64) -> Service {
        Service::from(units)
    }
}
