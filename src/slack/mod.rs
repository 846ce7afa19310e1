/*! Single-pass slack estimation

For every task `T` at position `i` of an evaluation order, the estimate
sums the request-bound functions of the tasks at positions `0..=i`,
evaluated over a window as long as `T`'s deadline:

`interference(T) = Σ_{j=0}^{i} ceil(T.deadline / period_j) * wcet_j`

and reports `slack(T) = T.deadline - interference(T)`.

This is *not* a response-time analysis: there is no
fixed-point iteration over the busy window, and the tasks considered
interfering are selected by their position in the list rather than by
priority. The `priority` field is carried along for reporting only.

With the `priority-order` feature enabled, `compute_slack_by_priority`
computes the same estimate with the interfering tasks selected by
priority instead. It exists to compare the two readings on a given task
set; [compute_slack] remains the reference estimate and the only one the
binary uses.
*/

use log::{debug, log_enabled, warn, Level};
use thiserror::Error;

use crate::arrival::ArrivalBound;
use crate::demand::{self, RequestBound};
use crate::task::Task;
use crate::time::Slack;

mod report;

pub use report::{float_repr, format_report, render_reports, ReportError};

/// Error type returned when the slack of a task set cannot be estimated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlackError {
    /// The estimate is undefined for an empty task set.
    #[error("cannot estimate slack of an empty task set")]
    EmptyTaskSet,
    /// An interfering task has a zero period, so its number of
    /// activations within a window is unbounded.
    #[error("task '{task}' has a zero period")]
    ZeroPeriod { task: String },
    /// The slack of a task does not fit into the signed time range.
    #[error("slack of task '{task}' is out of range")]
    Overflow { task: String },
}

pub type SlackResult = Result<Vec<TaskSlack>, SlackError>;

/// A task together with its estimated slack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSlack {
    pub task: Task,
    pub slack: Slack,
}

impl TaskSlack {
    /// The slack relative to the task's own WCET, in percent. The value
    /// is not rounded and may be negative.
    pub fn percentage(&self) -> Result<f64, ReportError> {
        if self.task.wcet.is_none() {
            return Err(ReportError::ZeroWcet {
                task: self.task.name.clone(),
            });
        }
        Ok(self.slack.in_units() as f64 / self.task.wcet.in_units() as f64 * 100.0)
    }
}

/// Estimate the slack of the task under analysis given the tasks that
/// interfere with it (which must include the task itself).
fn estimate<'a>(
    task: &Task,
    interfering: impl Iterator<Item = &'a Task>,
) -> Result<TaskSlack, SlackError> {
    let overflow = || SlackError::Overflow {
        task: task.name.clone(),
    };

    let rbfs = interfering
        .map(|other| {
            if !other.arrivals().is_well_formed() {
                return Err(SlackError::ZeroPeriod {
                    task: other.name.clone(),
                });
            }
            let rbf = other.rbf();
            if log_enabled!(Level::Debug) {
                if let Some(term) = rbf.service_needed(task.deadline) {
                    debug!(
                        "{}: interference of '{}' over {} is {}",
                        task.name, other.name, task.deadline, term
                    );
                }
            }
            Ok(rbf)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let interference = demand::Slice::of(&rbfs)
        .service_needed(task.deadline)
        .ok_or_else(overflow)?;
    let slack = Slack::between(task.deadline, interference).ok_or_else(overflow)?;

    debug!(
        "{}: deadline {}, total interference {}, slack {}",
        task.name, task.deadline, interference, slack
    );
    if slack.is_negative() {
        warn!(
            "{}: interference exceeds the deadline by {}",
            task.name,
            slack.in_units().unsigned_abs()
        );
    }

    Ok(TaskSlack {
        task: task.clone(),
        slack,
    })
}

/// Estimate the slack of each task in `tasks`.
///
/// Tasks are evaluated in list order; the task at position `i` suffers
/// interference from itself and from every task at positions `0..i`,
/// regardless of the `priority` field. The input is not modified; the
/// result pairs each task with its slack, in the same order.
///
/// Fails if `tasks` is empty, if any task scanned for interference
/// has a zero period, or if the interference or slack of a task exceeds
/// the representable range. No partial results are returned.
pub fn compute_slack(tasks: &[Task]) -> SlackResult {
    if tasks.is_empty() {
        return Err(SlackError::EmptyTaskSet);
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| estimate(task, tasks[..=i].iter()))
        .collect()
}

/// Variant of [compute_slack] in which a task suffers interference from
/// all tasks of higher priority, wherever they appear in the list, plus
/// equal-priority tasks at or before its own position (which includes
/// the task itself).
///
/// For a list already sorted by decreasing priority with distinct
/// priorities, this coincides with [compute_slack].
#[cfg(feature = "priority-order")]
pub fn compute_slack_by_priority(tasks: &[Task]) -> SlackResult {
    if tasks.is_empty() {
        return Err(SlackError::EmptyTaskSet);
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let interfering = tasks.iter().enumerate().filter_map(|(j, other)| {
                let counts = other.priority > task.priority
                    || (other.priority == task.priority && j <= i);
                counts.then(|| other)
            });
            estimate(task, interfering)
        })
        .collect()
}
