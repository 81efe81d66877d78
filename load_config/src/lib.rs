//! Resolve application configuration from a JSON file and the process
//! environment.
//!
//! A resolution selects which keys to read from each source, normalises
//! environment variable names (case folding, prefix stripping, dotted
//! nesting and the `APPSETTING_` spelling used by managed hosting), merges
//! the two trees by priority and checks that every required parameter is
//! present.
//!
//! ```rust
//! use load_config::{EnvSnapshot, LoadOptions, MemoryReader, resolve};
//!
//! let env: EnvSnapshot = [
//!     ("PREFIX123_PARAM123.KEY1", "env_value1"),
//!     ("PREFIX123_PARAM123.KEY2", "env_value2"),
//! ]
//! .into_iter()
//! .collect();
//! let options = LoadOptions::builder()
//!     .required(["param123"])
//!     .env_prefix("PREFIX123_")
//!     .ignore_missing_file(true)
//!     .build();
//!
//! let config = resolve(&options, &env, &MemoryReader::new())?;
//! assert_eq!(
//!     config.get("param123"),
//!     Some(&serde_json::json!({"key1": "env_value1", "key2": "env_value2"}))
//! );
//! # Ok::<_, load_config::LoadConfigError>(())
//! ```

mod env;
mod error;
mod file;
mod merge;
mod options;
mod resolve;
mod resolved;
mod select;

pub use env::{EnvSnapshot, PLATFORM_GROUP_SENTINEL, PLATFORM_SITE_SENTINEL};
pub use error::{AggregatedErrors, LoadConfigError, LoadConfigResult};
pub use file::{FileReader, FsFileReader, MemoryReader};
pub use options::{
    DEFAULT_CONFIG_FILE, LoadOptions, LoadOptionsBuilder, PlatformMode, Priority, Selection, Source,
};
pub use resolve::{load_config, load_config_or_exit, resolve};
pub use resolved::ResolvedConfig;
