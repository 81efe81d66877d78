//! Primary error enum for configuration resolution.

use camino::Utf8PathBuf;
use thiserror::Error;

use super::AggregatedErrors;

/// Result alias used throughout the crate.
pub type LoadConfigResult<T> = Result<T, LoadConfigError>;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadConfigError {
    /// A textual selection mode, priority or platform mode was not recognised.
    #[error("{message}")]
    InvalidArgument {
        /// Name of the offending parameter, e.g. `priority`.
        parameter: &'static str,
        /// Human-readable description listing the accepted values.
        message: String,
    },

    /// The configuration file does not exist.
    #[error("Config file not found: {path}")]
    FileNotFound {
        /// Path that was probed.
        path: Utf8PathBuf,
    },

    /// Reading the configuration file failed for a reason other than absence.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a valid JSON object.
    #[error("Syntax error in '{path}' at line {line}, column {column}: {message}")]
    Syntax {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// A required parameter was supplied by neither source.
    #[error(
        "Missing required config parameter: {key}. It can be set either as an environment \
         variable (as {env_var}) or in {config_file} (as {file_key})."
    )]
    MissingRequiredParameter {
        /// Canonical key that is missing.
        key: String,
        /// Environment variable name that would supply the key.
        env_var: String,
        /// Key name inside the configuration file.
        file_key: String,
        /// Configuration file that was consulted.
        config_file: Utf8PathBuf,
    },

    /// Several problems were found during a single resolution.
    #[error("configuration could not be resolved ({count} problems):\n{0}", count = .0.len())]
    Aggregate(Box<AggregatedErrors>),
}
