use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown at the chosen verbosity.
const CRATE_TARGETS: &[&str] = &[
    "cycles",
    "cycles_dispersion",
    "cycles_ephemeris",
    "cycles_io",
    "cycles_time",
];

/// Maps the `-v` count to a level: none is warn, `-v` info, `-vv` debug,
/// anything more trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `EnvFilter` directives enabling `level_for(verbosity)` on every workspace
/// crate and leaving dependencies at their defaults.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the verbosity flag when set. Events go to stderr;
/// stdout carries only cycle listings and conversions.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
