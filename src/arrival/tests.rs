use crate::arrival::{self, ArrivalBound};

use crate::tests::d;

#[test]
fn periodic_arrivals() {
    let a = arrival::Periodic { period: d(10) };
    assert_eq!(a.number_arrivals(d(0)), 0);
    assert_eq!(a.number_arrivals(d(1)), 1);
    assert_eq!(a.number_arrivals(d(8)), 1);
    assert_eq!(a.number_arrivals(d(10)), 1);
    assert_eq!(a.number_arrivals(d(11)), 2);
    assert_eq!(a.number_arrivals(d(12)), 2);
    assert_eq!(a.number_arrivals(d(13)), 2);
    assert_eq!(a.number_arrivals(d(100)), 10);
    assert_eq!(a.number_arrivals(d(105)), 11);
}

#[test]
fn window_shorter_than_period() {
    // a window shorter than the period still admits one activation
    let a = arrival::Periodic::new(d(5000));
    assert_eq!(a.number_arrivals(d(100)), 1);
    assert_eq!(a.number_arrivals(d(4999)), 1);
    assert_eq!(a.number_arrivals(d(5000)), 1);
    assert_eq!(a.number_arrivals(d(5001)), 2);
}

#[test]
fn zero_period_is_ill_formed() {
    assert!(arrival::Periodic::new(d(1)).is_well_formed());
    assert!(!arrival::Periodic::new(d(0)).is_well_formed());

    // the trait is also usable through references and boxes
    let boxed: Box<dyn ArrivalBound> = Box::new(arrival::Periodic::new(d(0)));
    assert!(!boxed.is_well_formed());
}
