//! Server configuration via CLI args and environment variables.

use clap::Parser;

/// HTTP server exposing calculation and greeting endpoints.
#[derive(Parser, Debug, Clone)]
#[command(name = "tally-server", version, about)]
pub struct Config {
    /// Bind address.
    #[arg(long, default_value = "0.0.0.0", env = "TALLY_HOST")]
    pub host: String,

    /// Bind port.
    #[arg(long, default_value_t = 8080, env = "TALLY_PORT")]
    pub port: u16,

    /// Log file path. The parent directory is created if missing.
    #[arg(long, default_value = "logs/app.log", env = "TALLY_LOG_FILE")]
    pub log_file: String,

    /// Log level.
    #[arg(long, default_value = "info", env = "TALLY_LOG_LEVEL")]
    pub log_level: String,

    /// Log format: "json" or "pretty".
    #[arg(long, default_value = "json", env = "TALLY_LOG_FORMAT")]
    pub log_format: String,

    /// Grace period in seconds for in-flight requests during shutdown.
    #[arg(long, default_value_t = 10, env = "TALLY_SHUTDOWN_GRACE")]
    pub shutdown_grace: u64,
}

impl Config {
    /// Parses configuration from CLI args and env vars.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
