//! Validated run settings shared by the driver and the worker pool.
mod run;


pub use run::RunConfig;
