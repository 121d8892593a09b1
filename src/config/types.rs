use serde::Deserialize;

/// Settings that may be provided through `loadtester.toml` / `loadtester.json`.
///
/// Every field is optional; values given on the command line take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "n")]
    pub requests: Option<u64>,
    #[serde(alias = "c")]
    pub concurrency: Option<usize>,
    pub method: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout: Option<u64>,
    pub headers: Option<Vec<String>>,
    pub keep_alive: Option<bool>,
}
