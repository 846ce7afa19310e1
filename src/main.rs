use std::io::{self, BufRead, Write};
use std::process;

use log::info;
use thiserror::Error;

use slack_estimator::intake::{self, InputError};
use slack_estimator::slack::{self, ReportError, SlackError};
use slack_estimator::table;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Slack(#[from] SlackError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Prompt for the WCETs on `output`, read them from `input`, and write
/// the report of the benchmark task set to `output`.
fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), Error> {
    let wcets = intake::read_wcets(input, &mut output)?;
    let tasks = table::benchmark_tasks(wcets);
    info!("estimating slack of {} tasks", tasks.len());

    let estimates = slack::compute_slack(&tasks)?;
    let report = slack::render_reports(&estimates)?;

    writeln!(output, "\n")?;
    writeln!(output, "{}", report)?;
    output.flush()?;
    Ok(())
}

/// Run to completion and return the process exit status; failures are
/// described on `errors`.
fn execute<R: BufRead, W: Write, E: Write>(input: R, output: W, mut errors: E) -> i32 {
    match run(input, output) {
        Ok(()) => 0,
        Err(err) => {
            // nothing left to report to if stderr itself fails
            let _ = writeln!(errors, "error: {}", err);
            1
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = execute(stdin.lock(), stdout.lock(), stderr.lock());
    process::exit(status);
}
