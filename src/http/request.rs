use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Request, Url};

use crate::args::{DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
use crate::domain::RunConfig;
use crate::error::HttpError;

/// Raw request settings turned into a fresh [`Request`] for every job.
///
/// Nothing is validated up front: a bad method or URL fails each job's
/// construction and is reported by the worker that hit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
}

impl RequestTemplate {
    #[must_use]
    pub const fn new(method: String, url: String, headers: Vec<(String, String)>) -> Self {
        Self {
            method,
            url,
            headers,
        }
    }

    #[must_use]
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(
            config.method.clone(),
            config.url.clone(),
            config.headers.clone(),
        )
    }

    /// Builds a body-less request with the identifying header set.
    ///
    /// Extra headers replace fixed ones of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid method, URL, or header.
    pub fn build(&self, client: &Client) -> Result<Request, HttpError> {
        let method = parse_method(&self.method)?;
        if self.url.trim() != self.url {
            return Err(HttpError::PaddedUrl {
                url: self.url.clone(),
            });
        }
        let url = Url::parse(&self.url).map_err(|err| HttpError::InvalidUrl {
            url: self.url.clone(),
            source: err,
        })?;

        let mut headers = HeaderMap::with_capacity(self.headers.len().saturating_add(2));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        for (key, value) in &self.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|err| HttpError::InvalidHeaderName {
                    name: key.clone(),
                    source: err,
                })?;
            let value = HeaderValue::from_str(value).map_err(|err| {
                HttpError::InvalidHeaderValue {
                    name: key.clone(),
                    source: err,
                }
            })?;
            headers.insert(name, value);
        }

        client
            .request(method, url)
            .headers(headers)
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })
    }
}

/// An empty method means GET; anything else is sent byte for byte, so
/// `post` stays `post`.
fn parse_method(raw: &str) -> Result<Method, HttpError> {
    if raw.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(raw.as_bytes()).map_err(|err| HttpError::InvalidMethod {
        method: raw.to_owned(),
        source: err,
    })
}
