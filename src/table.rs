//! # Benchmark task table
//!
//! The fixed task set of the benchmark application. Times are in
//! milliseconds; larger priorities are more urgent. The table order is
//! also the evaluation order of [compute_slack](crate::slack::compute_slack).

use crate::task::{Priority, Task};
use crate::time::{Duration, Service};

/// Sporadic server of the (emulated) push-button interrupt.
pub const PUSH_BUTTON_SERVER: &str = "Push button server";
pub const PUSH_BUTTON_SERVER_PERIOD: Duration = Duration::from_units(5000);
pub const PUSH_BUTTON_SERVER_DEADLINE: Duration = Duration::from_units(100);
pub const PUSH_BUTTON_SERVER_PRIORITY: Priority = 7;
/// The only WCET that is not supplied at run time.
pub const PUSH_BUTTON_SERVER_WCET: Service = Service::from_units(1);

/// Periodic producer that also triggers the on-call producer.
pub const REGULAR_PRODUCER: &str = "Regular producer";
pub const REGULAR_PRODUCER_PERIOD: Duration = Duration::from_units(1000);
pub const REGULAR_PRODUCER_DEADLINE: Duration = Duration::from_units(500);
pub const REGULAR_PRODUCER_PRIORITY: Priority = 6;

pub const ON_CALL_PRODUCER: &str = "On call producer";
pub const ON_CALL_PRODUCER_PERIOD: Duration = Duration::from_units(3000);
pub const ON_CALL_PRODUCER_DEADLINE: Duration = Duration::from_units(800);
pub const ON_CALL_PRODUCER_PRIORITY: Priority = 4;

pub const ACTIVATION_LOG_READER: &str = "Activation log reader";
pub const ACTIVATION_LOG_READER_PERIOD: Duration = Duration::from_units(3000);
pub const ACTIVATION_LOG_READER_DEADLINE: Duration = Duration::from_units(1000);
pub const ACTIVATION_LOG_READER_PRIORITY: Priority = 2;

/// The WCETs supplied at run time, one per prompted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcetInput {
    pub regular_producer: Service,
    pub on_call_producer: Service,
    pub activation_log_reader: Service,
}

/// Build the benchmark task set, in table order, with the given WCETs.
pub fn benchmark_tasks(wcets: WcetInput) -> Vec<Task> {
    vec![
        Task::new(
            PUSH_BUTTON_SERVER,
            PUSH_BUTTON_SERVER_PERIOD,
            PUSH_BUTTON_SERVER_DEADLINE,
            PUSH_BUTTON_SERVER_PRIORITY,
        )
        .with_wcet(PUSH_BUTTON_SERVER_WCET),
        Task::new(
            REGULAR_PRODUCER,
            REGULAR_PRODUCER_PERIOD,
            REGULAR_PRODUCER_DEADLINE,
            REGULAR_PRODUCER_PRIORITY,
        )
        .with_wcet(wcets.regular_producer),
        Task::new(
            ON_CALL_PRODUCER,
            ON_CALL_PRODUCER_PERIOD,
            ON_CALL_PRODUCER_DEADLINE,
            ON_CALL_PRODUCER_PRIORITY,
        )
        .with_wcet(wcets.on_call_producer),
        Task::new(
            ACTIVATION_LOG_READER,
            ACTIVATION_LOG_READER_PERIOD,
            ACTIVATION_LOG_READER_DEADLINE,
            ACTIVATION_LOG_READER_PRIORITY,
        )
        .with_wcet(wcets.activation_log_reader),
    ]
}
