//! The periodic task record.

use crate::arrival::Periodic;
use crate::demand::RBF;
use crate::time::{Duration, Service};
use crate::wcet;

/// Type of fixed task priorities. Larger values denote more urgent tasks.
pub type Priority = u32;

/// One periodic real-time workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Display label.
    pub name: String,
    /// Separation between two successive activations.
    pub period: Duration,
    /// Relative deadline, measured from each activation.
    pub deadline: Duration,
    /// Fixed priority. Stored for reporting; the list-order slack
    /// estimate does not consult it.
    pub priority: Priority,
    /// Worst-case execution time of one activation.
    pub wcet: Service,
}

impl Task {
    /// Constructs a task that does not yet have a WCET bound (i.e., with
    /// a zero WCET). Use [`Task::with_wcet`] to supply it.
    pub fn new(
        name: impl Into<String>,
        period: Duration,
        deadline: Duration,
        priority: Priority,
    ) -> Self {
        Task {
            name: name.into(),
            period,
            deadline,
            priority,
            wcet: Service::none(),
        }
    }

    /// Returns the task with WCET `wcet`.
    pub fn with_wcet(self, wcet: Service) -> Self {
        Task { wcet, ..self }
    }

    pub fn arrivals(&self) -> Periodic {
        Periodic::new(self.period)
    }

    pub fn cost_model(&self) -> wcet::Scalar {
        wcet::Scalar::new(self.wcet)
    }

    /// The request-bound function of the task: `ceil(delta / period) * wcet`.
    pub fn rbf(&self) -> RBF<Periodic, wcet::Scalar> {
        RBF::new(self.arrivals(), self.cost_model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::RequestBound;
    use crate::tests::{d, s};

    #[test]
    fn wcet_is_supplied_after_construction() {
        let t = Task::new("Regular producer", d(1000), d(500), 6);
        assert!(t.wcet.is_none());
        let t = t.with_wcet(s(50));
        assert_eq!(t.wcet, s(50));
        assert_eq!(t.name, "Regular producer");
        assert_eq!(t.priority, 6);
    }

    #[test]
    fn rbf_uses_own_period_and_wcet() {
        let t = Task::new("On call producer", d(3000), d(800), 4).with_wcet(s(30));
        assert_eq!(t.rbf().service_needed(d(800)), Some(s(30)));
        assert_eq!(t.rbf().service_needed(d(3001)), Some(s(60)));
    }
}
