use std::time::Duration;

use crate::args::{LoadArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

/// Immutable settings for one load-test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub url: String,
    pub requests: PositiveU64,
    pub concurrency: PositiveUsize,
    pub method: String,
    /// `None` means requests never time out.
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
    pub keep_alive: bool,
}

impl RunConfig {
    /// Validates merged CLI/config arguments into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] when no non-blank URL was given.
    /// Any other URL is kept as typed and checked per request.
    pub fn from_args(args: &LoadArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;

        Ok(Self {
            url: url.to_owned(),
            requests: args.requests,
            concurrency: args.concurrency,
            method: args.method.clone(),
            timeout: (args.timeout > 0).then(|| Duration::from_secs(args.timeout)),
            headers: args.headers.clone(),
            keep_alive: args.keep_alive,
        })
    }
}
