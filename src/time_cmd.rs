//! Time command: show one instant as calendar string, MJD and JD.

use std::io::Write;

use anyhow::{Context, Result};

use cycles_time::Mjd;

use crate::cli::{TimeArgs, TimeFormat};

/// Parses `args.value` according to `args.from` and prints all three forms.
pub fn run<W: Write>(args: &TimeArgs, out: &mut W) -> Result<()> {
    let mjd = parse(&args.value, args.from)?;
    writeln!(out, "Calendar: {}", mjd.to_calendar()?)?;
    writeln!(out, "MJD: {:.9}", mjd.value())?;
    writeln!(out, "JD: {:.9}", mjd.to_jd())?;
    Ok(())
}

fn parse(value: &str, from: TimeFormat) -> Result<Mjd> {
    match from {
        TimeFormat::Calendar => Ok(Mjd::from_calendar(value)?),
        TimeFormat::Mjd => parse_number(value).map(Mjd::new),
        TimeFormat::Jd => parse_number(value).map(Mjd::from_jd),
    }
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("not a number: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: &str, from: TimeFormat) -> Result<String> {
        let mut out = Vec::new();
        run(
            &TimeArgs {
                value: value.to_string(),
                from,
            },
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn from_calendar() {
        assert_eq!(
            convert("2024-09-01T00:00:00", TimeFormat::Calendar).unwrap(),
            "Calendar: 2024-09-01T00:00:00.000\nMJD: 60554.000000000\nJD: 2460554.500000000\n"
        );
    }

    #[test]
    fn from_mjd_and_jd_agree() {
        let a = convert("60554.5", TimeFormat::Mjd).unwrap();
        let b = convert("2460555.0", TimeFormat::Jd).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("Calendar: 2024-09-01T12:00:00.000\n"));
    }

    #[test]
    fn bad_inputs() {
        assert!(convert("noon", TimeFormat::Calendar).is_err());
        assert!(convert("abc", TimeFormat::Mjd).is_err());
        assert!(convert("inf", TimeFormat::Jd).is_err());
    }
}
