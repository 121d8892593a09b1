use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};

use crate::domain::RunConfig;
use crate::error::{AppError, AppResult, HttpError};

/// Transport settings fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    pub timeout: Option<Duration>,
    pub concurrency: usize,
    pub keep_alive: bool,
}

impl ClientSettings {
    #[must_use]
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            timeout: config.timeout,
            concurrency: config.concurrency.get(),
            keep_alive: config.keep_alive,
        }
    }
}

/// Builds the single client shared by every worker and request task.
///
/// Without keep-alive every request carries `Connection: close` and no idle
/// connection is pooled, so each request pays for its own handshake.
///
/// # Errors
///
/// Returns an error when the underlying TLS/HTTP stack cannot be initialised.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder();

    if let Some(timeout) = settings.timeout {
        client_builder = client_builder.timeout(timeout);
    }

    if settings.keep_alive {
        client_builder = client_builder.pool_max_idle_per_host(settings.concurrency);
    } else {
        let mut headers = HeaderMap::new();
        headers.insert(CONNECTION, HeaderValue::from_static("close"));
        client_builder = client_builder
            .default_headers(headers)
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)));
    }

    client_builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
