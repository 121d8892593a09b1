use clap::Parser;

use super::parsers::{parse_bool_env, parse_header, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator. Workers pull jobs from a shared queue and fan each one out as its own request."
)]
pub struct LoadArgs {
    /// Target URL to test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Number of requests to send
    #[arg(long, short = 'n', default_value = "100", value_parser = parse_positive_u64)]
    pub requests: PositiveU64,

    /// Number of concurrent workers (dispatch lanes, not an in-flight cap)
    #[arg(long, short = 'c', default_value = "10", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Extra HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Reuse connections between requests instead of closing each one
    #[arg(long = "keep-alive")]
    pub keep_alive: bool,

    /// Path to config file (TOML/JSON). Defaults to ./loadtester.toml or ./loadtester.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADTESTER_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
