use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free outcome counters shared by every request task of a run.
///
/// `peak_in_flight` is what separates in-flight concurrency from the worker
/// count: workers never wait for their own requests, so it can exceed `-c`.
#[derive(Debug, Default)]
pub struct RunTally {
    dispatched: AtomicU64,
    responded: AtomicU64,
    failed: AtomicU64,
    in_flight: AtomicU64,
    peak_in_flight: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TallySnapshot {
    pub dispatched: u64,
    pub responded: u64,
    pub failed: u64,
    pub peak_in_flight: u64,
}

impl RunTally {
    pub fn record_dispatch(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_response(&self) {
        self.responded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Marks one request as on the wire until the guard is dropped.
    #[must_use]
    pub fn enter_flight(self: &Arc<Self>) -> InFlightGuard {
        let current = self
            .in_flight
            .fetch_add(1, Ordering::AcqRel)
            .saturating_add(1);
        self.peak_in_flight.fetch_max(current, Ordering::AcqRel);
        InFlightGuard {
            tally: Arc::clone(self),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn in_flight(&self) -> u64 {
        self.in_flight.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            dispatched: self.dispatched.load(Ordering::Acquire),
            responded: self.responded.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
            peak_in_flight: self.peak_in_flight.load(Ordering::Acquire),
        }
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    tally: Arc<RunTally>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.tally.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}
