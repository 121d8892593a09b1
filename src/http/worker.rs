use std::sync::Arc;

use reqwest::{Client, Request};
use tracing::{debug, error, info, warn};

use crate::metrics::RunTally;

use super::completion::{CompletionGroup, CompletionGuard};
use super::queue::{Job, JobQueue};
use super::request::RequestTemplate;

/// Everything a worker and its request tasks share for the whole run.
#[derive(Debug)]
pub(super) struct DispatchContext {
    pub(super) client: Client,
    pub(super) template: RequestTemplate,
    pub(super) tally: Arc<RunTally>,
    /// Read response bodies so kept-alive connections go back to the pool.
    pub(super) drain_body: bool,
}

/// One dispatch lane: pulls jobs until the queue is closed, spawning a
/// request task per job without waiting for earlier ones, then waits for its
/// own requests before releasing `done`.
pub(super) async fn run_worker(
    id: usize,
    queue: JobQueue,
    context: Arc<DispatchContext>,
    done: CompletionGuard,
) {
    let requests = CompletionGroup::new();
    let mut received: u64 = 0;

    while let Some(job) = queue.next().await {
        received = received.saturating_add(1);
        context.tally.record_dispatch();
        let pending = requests.register();

        let request = match context.template.build(&context.client) {
            Ok(request) => request,
            Err(err) => {
                error!(
                    "Worker {}: Error creating request for job {}: {}",
                    id,
                    job.id(),
                    err
                );
                context.tally.record_failure();
                drop(pending);
                continue;
            }
        };

        let context = Arc::clone(&context);
        drop(tokio::spawn(async move {
            let _pending = pending;
            execute_request(id, job, request, &context).await;
        }));
    }

    debug!(
        "Worker {}: queue closed after {} jobs, waiting on {} requests",
        id,
        received,
        requests.pending()
    );
    requests.wait().await;
    drop(done);
}

async fn execute_request(worker_id: usize, job: Job, request: Request, context: &DispatchContext) {
    let _in_flight = context.tally.enter_flight();
    match context.client.execute(request).await {
        Ok(response) => {
            context.tally.record_response();
            let status = response.status();
            info!(
                "Worker {}: Request completed with status {}",
                worker_id,
                status.as_u16()
            );
            if context.drain_body
                && let Err(err) = response.bytes().await
            {
                warn!(
                    "Worker {}: Failed to read response body for job {}: {}",
                    worker_id,
                    job.id(),
                    err
                );
            }
        }
        Err(err) => {
            context.tally.record_failure();
            error!(
                "Worker {}: Request error for job {}: {}",
                worker_id,
                job.id(),
                err
            );
        }
    }
}
