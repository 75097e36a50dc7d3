//! Interactive numbered menu over the cycle queries.
//!
//! Reads choices line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the loop runs the same against a terminal or a
//! scripted input. Bad input is reported and the menu is shown again; end of
//! input behaves like choosing exit.

use std::io::{BufRead, Lines, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use cycles_ephemeris::Ephemeris;
use cycles_io::CycleLogger;
use cycles_time::Mjd;

use crate::query_cmd::{self, Query};

const MENU: &str = "\nChoose an option:\n\
1: Find the nearest cycle to today's date\n\
2: Display cycles for a given month and year\n\
3: Display all cycles from the first\n\
4: Display N cycles starting from the nearest cycle\n\
0: Exit";

/// Runs the menu until the user exits or input ends.
///
/// `clock` supplies "now" for the nearest-cycle options.
pub fn run<R, W, C>(
    ephemeris: &Ephemeris,
    logger: &CycleLogger,
    input: R,
    out: &mut W,
    clock: C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: Fn() -> Mjd,
{
    let mut lines = input.lines();
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut lines, out, "\nEnter your choice: ")? else {
            break;
        };
        debug!(choice = choice.trim(), "menu choice");

        let parsed = match choice.trim() {
            "1" => Ok(Query::Nearest),
            "2" => {
                let Some(year) = prompt(&mut lines, out, "Enter year (YYYY): ")? else {
                    break;
                };
                let Some(month) = prompt(&mut lines, out, "Enter month (MM): ")? else {
                    break;
                };
                parse_month_query(&year, &month)
            }
            "3" | "4" => {
                let Some(count) =
                    prompt(&mut lines, out, "How many cycles you want to display? ")?
                else {
                    break;
                };
                parse_count(&count).map(|count| {
                    if choice.trim() == "3" {
                        Query::Range { count }
                    } else {
                        Query::FromNearest { count }
                    }
                })
            }
            "0" => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        let outcome =
            parsed.and_then(|query| query_cmd::run(ephemeris, logger, query, clock(), out));
        if let Err(e) = outcome {
            writeln!(out, "Error: {e:#}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Prints `message` and reads one line; `None` at end of input.
fn prompt<B: BufRead, W: Write>(
    lines: &mut Lines<B>,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    Ok(lines.next().transpose()?)
}

fn parse_month_query(year: &str, month: &str) -> Result<Query> {
    let year = year
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid year: {:?}", year.trim()))?;
    let month = month
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid month: {:?}", month.trim()))?;
    Ok(Query::Month { year, month })
}

fn parse_count(count: &str) -> Result<usize> {
    let n = count
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid cycle count: {:?}", count.trim()))?;
    if n < 0 {
        bail!("cycle count must be >= 0, got {n}");
    }
    usize::try_from(n).context("cycle count too large")
}
