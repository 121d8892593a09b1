use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

/// Largest buffer the job queue allocates, however many requests a run has.
///
/// Workers are started before the queue is filled, so a smaller buffer only
/// slows the feeder down; it never changes which jobs are handed out.
const MAX_QUEUE_CAPACITY: usize = 1 << 20;

/// One unit of dispatch. The id only exists to bound the total request count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Job(u64);

impl Job {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Creates the run's job queue: one writer that fills and closes it, and a
/// receiving handle shared by every worker.
#[must_use]
pub fn job_queue(total: u64) -> (JobFeeder, JobQueue) {
    let capacity = usize::try_from(total)
        .map_or(MAX_QUEUE_CAPACITY, |total| total.min(MAX_QUEUE_CAPACITY))
        .max(1);
    let (tx, rx) = mpsc::channel(capacity);
    (
        JobFeeder { tx, total },
        JobQueue {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

#[derive(Debug)]
pub struct JobFeeder {
    tx: mpsc::Sender<Job>,
    total: u64,
}

impl JobFeeder {
    /// Enqueues jobs `1..=total` in order, then closes the queue.
    ///
    /// Returns how many jobs were enqueued; fewer than `total` only if every
    /// receiver is already gone.
    pub async fn fill(self) -> u64 {
        let mut sent: u64 = 0;
        for id in 1..=self.total {
            if self.tx.send(Job(id)).await.is_err() {
                break;
            }
            sent = sent.saturating_add(1);
        }
        sent
    }
}

/// Multi-consumer end of the job queue. Each job is received by exactly one
/// caller of [`JobQueue::next`].
#[derive(Debug, Clone)]
pub struct JobQueue {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl JobQueue {
    /// Waits for the next job; `None` once the queue is closed and drained.
    pub async fn next(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}
