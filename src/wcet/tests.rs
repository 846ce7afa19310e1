use crate::tests::s;
use crate::wcet::{self, JobCostModel};

#[test]
fn cost_models() {
    let wcet: wcet::Scalar = wcet::Scalar::from(s(10));

    assert_eq!(wcet.cost_of_jobs(0), Some(s(0)));
    assert_eq!(wcet.cost_of_jobs(1), Some(s(10)));
    assert_eq!(wcet.cost_of_jobs(3), Some(s(30)));
    assert_eq!(wcet.cost_of_jobs(10), Some(s(100)));
    assert_eq!(wcet.per_job_cost(), s(10));
}

#[test]
fn zero_wcet_costs_nothing() {
    let wcet = wcet::Scalar::new(s(0));
    assert_eq!(wcet.cost_of_jobs(0), Some(s(0)));
    assert_eq!(wcet.cost_of_jobs(1000), Some(s(0)));
    assert!(wcet.per_job_cost().is_none());
}

#[test]
fn cost_beyond_range() {
    let wcet = wcet::Scalar::new(s(u64::MAX));
    assert_eq!(wcet.cost_of_jobs(1), Some(s(u64::MAX)));
    assert_eq!(wcet.cost_of_jobs(2), None);
}
