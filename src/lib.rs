//! Core library for the `loadtester` CLI.
//!
//! The binary parses its flags into a [`domain::RunConfig`], then hands it to
//! [`app::run_local`], which builds one shared HTTP client and drives the
//! worker pool in [`http`]. Metrics and the printed summary live in
//! [`metrics`].
pub mod app;
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
