pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadtester/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_ACCEPT: &str = "*/*";
