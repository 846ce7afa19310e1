use derive_more::{Add, Display, From, Into, Sub};

/// An interval length in the discrete time model (periods, deadlines,
/// analysis windows). The unit is left to the user; the benchmark table
/// uses milliseconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Add,
    Sub,
)]
pub struct Duration(u64);

impl Duration {
    pub const fn from_units(units: u64) -> Self {
        Duration(units)
    }

    pub fn zero() -> Self {
        Duration(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }

    pub fn in_units(self) -> u64 {
        self.0
    }
}

/// An amount of processor service, i.e., execution time demanded by
/// jobs (WCETs and the interference they cause). Arithmetic on service
/// is checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Add,
    Sub,
)]
pub struct Service(u64);

impl Service {
    pub const fn from_units(units: u64) -> Self {
        Service(units)
    }

    pub fn none() -> Self {
        Service(0)
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    pub fn in_units(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Service) -> Option<Service> {
        self.0.checked_add(other.0).map(Service)
    }

    /// The service of `n` jobs of this cost each, if representable.
    pub fn checked_mul(self, n: u64) -> Option<Service> {
        self.0.checked_mul(n).map(Service)
    }
}

/// The signed margin between a deadline and the service that must fit
/// before it. Negative values denote a (predicted) deadline miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct Slack(i64);

impl Slack {
    /// Compute `window - demand`, or `None` if the difference is not
    /// representable.
    pub fn between(window: Duration, demand: Service) -> Option<Self> {
        let window = i64::try_from(window.in_units()).ok()?;
        let demand = i64::try_from(demand.in_units()).ok()?;
        window.checked_sub(demand).map(Slack)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn in_units(self) -> i64 {
        self.0
    }
}
