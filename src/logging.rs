//! Diagnostic logging setup for the `ntree` binary
//!
//! Logs go to stderr so they never mix with rendered output. `NTREE_LOG`
//! takes an `EnvFilter` directive and overrides the `-v` level.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NTREE_LOG";

/// Level name for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level_for_verbosity(verbose);
        EnvFilter::new(format!("neotree={level},ntree={level}"))
    })
}

/// Install the global subscriber.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialise logging: {err}"))
}
