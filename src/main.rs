mod cli;
mod config;
mod convert;
mod logging;
mod menu;
mod query_cmd;
mod time_cmd;
mod toa_cmd;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use cycles_time::Mjd;

use crate::cli::{Cli, Command};
use crate::query_cmd::Query;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let ephemeris = convert::build_ephemeris(&config.ephemeris)?;
    let logger = convert::build_logger(&config.log, cli.log, cli.log_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let query = match cli.command {
        Command::Nearest => Query::Nearest,
        Command::Month(args) => Query::Month {
            year: args.year,
            month: args.month,
        },
        Command::Range(args) => Query::Range { count: args.count },
        Command::FromNearest(args) => Query::FromNearest { count: args.count },
        Command::Menu => {
            return menu::run(&ephemeris, &logger, io::stdin().lock(), &mut out, Mjd::now);
        }
        Command::Toa(args) => return toa_cmd::run(&args, &config.dispersion, &mut out),
        Command::Time(args) => return time_cmd::run(&args, &mut out),
    };
    query_cmd::run(&ephemeris, &logger, query, Mjd::now(), &mut out)
}
