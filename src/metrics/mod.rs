//! Run timing, outcome counters, and the end-of-run summary.
mod summary;
mod tally;
mod types;


pub use summary::{log_run_details, print_summary, summary_lines};
pub use tally::{InFlightGuard, RunTally, TallySnapshot};
pub use types::{RunClock, RunMetrics};
