//! Request construction, the shared client, and the dispatch pool.
//!
//! A run has two kinds of concurrency. `concurrency` workers race on one job
//! queue (dispatch concurrency), and every job a worker receives becomes its
//! own task without waiting for earlier ones (in-flight concurrency, which is
//! not capped by the worker count).
mod client;
mod completion;
mod pool;
mod queue;
mod request;
mod worker;


pub use client::{ClientSettings, build_client};
pub use completion::CompletionGroup;
pub use pool::{LoadReport, run_pool};
pub use queue::{Job, JobQueue, job_queue};
pub use request::RequestTemplate;
