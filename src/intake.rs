//! Console intake of the run-time WCETs.
//!
//! The three prompted tasks are asked for in table order. Each answer
//! must be a non-negative integer; anything else ends the run before the
//! estimate is computed.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use log::debug;
use thiserror::Error;

use crate::table::WcetInput;
use crate::time::Service;

pub const REGULAR_PRODUCER_PROMPT: &str = "Insert Regular producer WCET: ";
pub const ON_CALL_PRODUCER_PROMPT: &str = "Insert on call producer WCET: ";
pub const ACTIVATION_LOG_READER_PROMPT: &str = "Insert activation log reader WCET: ";

/// Error type returned when the WCETs cannot be read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read WCET: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the {label} WCET was supplied")]
    EndOfInput { label: &'static str },
    #[error("invalid {label} WCET '{input}': expected a non-negative integer")]
    Parse {
        label: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse the WCET answer for the task called `label`. Surrounding
/// whitespace (including the line terminator) is ignored.
pub fn parse_wcet(label: &'static str, text: &str) -> Result<Service, InputError> {
    let text = text.trim();
    text.parse::<u64>()
        .map(Service::from)
        .map_err(|source| InputError::Parse {
            label,
            input: text.to_string(),
            source,
        })
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &'static str,
    prompt: &str,
) -> Result<Service, InputError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput { label });
    }
    let wcet = parse_wcet(label, &line)?;
    debug!("{} WCET set to {}", label, wcet);
    Ok(wcet)
}

/// Prompt for the three run-time WCETs on `output` and read the answers,
/// one per line, from `input`.
pub fn read_wcets<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<WcetInput, InputError> {
    let regular_producer = ask(
        &mut input,
        &mut output,
        "Regular producer",
        REGULAR_PRODUCER_PROMPT,
    )?;
    let on_call_producer = ask(
        &mut input,
        &mut output,
        "on call producer",
        ON_CALL_PRODUCER_PROMPT,
    )?;
    let activation_log_reader = ask(
        &mut input,
        &mut output,
        "activation log reader",
        ACTIVATION_LOG_READER_PROMPT,
    )?;
    Ok(WcetInput {
        regular_producer,
        on_call_producer,
        activation_log_reader,
    })
}
