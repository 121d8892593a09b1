use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

const MICROS_PER_SEC: u128 = 1_000_000;
const MICROS_PER_CENTISEC: u128 = 10_000;

/// Start of a run: monotonic for the elapsed time, wall clock for the logs.
#[derive(Clone, Copy, Debug)]
pub struct RunClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl RunClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Stops the clock and freezes the run's metrics.
    #[must_use]
    pub fn finish(self, total_requests: u64, concurrency: usize) -> RunMetrics {
        RunMetrics {
            total_requests,
            concurrency,
            elapsed: self.started.elapsed(),
            started_at: self.started_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    pub total_requests: u64,
    pub concurrency: usize,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

impl RunMetrics {
    /// Elapsed seconds in hundredths, rounded half up.
    #[must_use]
    pub fn elapsed_secs_x100(&self) -> u64 {
        let micros = self.elapsed.as_micros();
        let rounded = micros
            .saturating_add(MICROS_PER_CENTISEC / 2)
            .checked_div(MICROS_PER_CENTISEC)
            .unwrap_or(0);
        u64::try_from(rounded).map_or(u64::MAX, |value| value)
    }

    /// Throughput in hundredths of a request per second, rounded half up.
    ///
    /// A zero-length run is measured as one microsecond.
    #[must_use]
    pub fn requests_per_sec_x100(&self) -> u64 {
        let micros = self.elapsed.as_micros().max(1);
        let scaled = u128::from(self.total_requests)
            .saturating_mul(MICROS_PER_SEC)
            .saturating_mul(100)
            .saturating_add(micros / 2)
            .checked_div(micros)
            .unwrap_or(0);
        u64::try_from(scaled).map_or(u64::MAX, |value| value)
    }
}
