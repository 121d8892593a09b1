use tracing::info;

use crate::domain::RunConfig;
use crate::error::AppResult;
use crate::http::{self, ClientSettings, LoadReport};
use crate::metrics;

/// Runs one load test to completion and prints its summary.
///
/// Per-request failures never surface here; they are logged by the workers
/// and the summary is printed regardless.
///
/// # Errors
///
/// Returns an error only when the HTTP client cannot be built, before any
/// request is dispatched.
pub async fn run_local(config: &RunConfig) -> AppResult<LoadReport> {
    let client = http::build_client(&ClientSettings::from_config(config))?;

    info!(
        "Starting load test: {} {} requests to {} across {} workers",
        config.requests.get(),
        config.method,
        config.url,
        config.concurrency.get()
    );

    let report = http::run_pool(config, client).await;

    metrics::print_summary(&report.metrics);
    metrics::log_run_details(&report.metrics, &report.tally);

    Ok(report)
}
