use super::JobCostModel;
use crate::time::Service;

/// The classic and most simple characterization of the worst-case
/// processor demand of a single job: the scalar WCET bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    pub wcet: Service,
}

impl Scalar {
    /// Construct a new `Scalar` cost model by wrapping a given WCET bound.
    pub fn new(wcet: Service) -> Self {
        Scalar { wcet }
    }
}

impl From<Service> for Scalar {
    fn from(val: Service) -> Self {
        Self::new(val)
    }
}

impl JobCostModel for Scalar {
    fn cost_of_jobs(&self, n: usize) -> Option<Service> {
        self.wcet.checked_mul(n as u64)
    }

    fn per_job_cost(&self) -> Service {
        self.wcet
    }
}
