use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::RunConfig;
use crate::metrics::{RunClock, RunMetrics, RunTally, TallySnapshot};

use super::completion::CompletionGroup;
use super::queue::job_queue;
use super::request::RequestTemplate;
use super::worker::{DispatchContext, run_worker};

/// Result of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub metrics: RunMetrics,
    pub tally: TallySnapshot,
}

/// Runs the whole load test against `client` and returns once every
/// dispatched request has resolved.
///
/// The clock starts right before the first worker is spawned and stops when
/// the last worker has drained its own requests.
pub async fn run_pool(config: &RunConfig, client: Client) -> LoadReport {
    let total = config.requests.get();
    let concurrency = config.concurrency.get();
    let tally = Arc::new(RunTally::default());
    let context = Arc::new(DispatchContext {
        client,
        template: RequestTemplate::from_config(config),
        tally: Arc::clone(&tally),
        drain_body: config.keep_alive,
    });

    let (feeder, queue) = job_queue(total);
    let workers = CompletionGroup::new();

    let clock = RunClock::start();
    for id in 1..=concurrency {
        let done = workers.register();
        drop(tokio::spawn(run_worker(
            id,
            queue.clone(),
            Arc::clone(&context),
            done,
        )));
    }
    drop(queue);

    let enqueued = feeder.fill().await;
    if enqueued < total {
        warn!("Only {} of {} jobs were enqueued.", enqueued, total);
    }
    debug!("Enqueued {} jobs; waiting on {} workers", enqueued, workers.pending());

    workers.wait().await;
    let metrics = clock.finish(total, concurrency);

    LoadReport {
        metrics,
        tally: tally.snapshot(),
    }
}
