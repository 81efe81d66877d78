//! Error types produced while resolving configuration.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{LoadConfigError, LoadConfigResult};
