use tracing::info;

use super::{RunMetrics, TallySnapshot};

#[must_use]
pub fn summary_lines(metrics: &RunMetrics) -> Vec<String> {
    let elapsed = metrics.elapsed_secs_x100();
    let rps = metrics.requests_per_sec_x100();
    vec![
        String::new(),
        "Load Test Results:".to_owned(),
        format!("Total Requests: {}", metrics.total_requests),
        format!("Concurrency Level: {}", metrics.concurrency),
        format!("Time taken: {}.{:02} seconds", elapsed / 100, elapsed % 100),
        format!("Requests per second: {}.{:02}", rps / 100, rps % 100),
    ]
}

pub fn print_summary(metrics: &RunMetrics) {
    for line in summary_lines(metrics) {
        println!("{}", line);
    }
}

/// Writes the parts of a run that are not in the summary to the log stream.
pub fn log_run_details(metrics: &RunMetrics, tally: &TallySnapshot) {
    info!(
        "Run started at {}: {} dispatched, {} responses, {} failures, peak in-flight {}",
        metrics.started_at.to_rfc3339(),
        tally.dispatched,
        tally.responded,
        tally.failed,
        tally.peak_in_flight
    );
}
