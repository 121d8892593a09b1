//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::LoadArgs;
pub use parsers::normalize_legacy_flags;
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_header;
