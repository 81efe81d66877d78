//! Options controlling a configuration resolution.
//!
//! Textual forms of every mode are parsed through [`FromStr`] so command-line
//! flags and programmatic callers share a single validation path. Anything
//! other than the accepted spellings is rejected with
//! [`LoadConfigError::InvalidArgument`].

mod builder;

use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;

use crate::LoadConfigError;

pub use builder::LoadOptionsBuilder;

/// Identifies the two configuration sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The process environment.
    Env,
    /// The JSON configuration file.
    File,
}

impl Source {
    const fn parameter(self) -> &'static str {
        match self {
            Self::Env => "load_from_env",
            Self::File => "load_from_file",
        }
    }

    const fn list_noun(self) -> &'static str {
        match self {
            Self::Env => "environment variable names",
            Self::File => "config file keys",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => f.write_str("env"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Which keys to extract from a source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Extract exactly the required parameters.
    #[default]
    Required,
    /// Extract every key the source can offer.
    All,
    /// Extract the listed keys.
    Explicit(Vec<String>),
}

impl Selection {
    /// Build an explicit selection from any list of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use load_config::Selection;
    /// let selection = Selection::explicit(["param3", "param4"]);
    /// assert_eq!(selection, Selection::Explicit(vec!["param3".into(), "param4".into()]));
    /// ```
    #[must_use]
    pub fn explicit<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(keys.into_iter().map(Into::into).collect())
    }

    /// Parse the textual mode used for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadConfigError::InvalidArgument`] naming the accepted
    /// values when `raw` is neither `required` nor `all`.
    pub fn parse_for(source: Source, raw: &str) -> Result<Self, LoadConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "all" => Ok(Self::All),
            _ => Err(LoadConfigError::invalid_argument(
                source.parameter(),
                format!(
                    "{} must be 'required', 'all', or a list of {}",
                    source.parameter(),
                    source.list_noun()
                ),
            )),
        }
    }
}

/// Which source wins when both define the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Environment values overwrite file values.
    #[default]
    Env,
    /// File values overwrite environment values.
    File,
}

impl FromStr for Priority {
    type Err = LoadConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "env" => Ok(Self::Env),
            "file" => Ok(Self::File),
            _ => Err(LoadConfigError::invalid_argument(
                "priority",
                "priority must be 'env' or 'file'",
            )),
        }
    }
}

/// Whether managed-hosting (`APPSETTING_`) naming applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformMode {
    /// Enable when the platform's sentinel variables are present.
    #[default]
    Auto,
    /// Always apply the platform convention.
    On,
    /// Never apply the platform convention.
    Off,
}

impl FromStr for PlatformMode {
    type Err = LoadConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "on" | "true" => Ok(Self::On),
            "off" | "false" => Ok(Self::Off),
            _ => Err(LoadConfigError::invalid_argument(
                "platform_mode",
                "platform_mode must be 'auto', 'on', or 'off'",
            )),
        }
    }
}

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Complete set of inputs for a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub(crate) required_params: Vec<String>,
    pub(crate) load_from_env: Selection,
    pub(crate) load_from_file: Selection,
    pub(crate) config_file: Utf8PathBuf,
    pub(crate) env_prefix: String,
    pub(crate) priority: Priority,
    pub(crate) ignore_missing_file: bool,
    pub(crate) platform_mode: PlatformMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            required_params: Vec::new(),
            load_from_env: Selection::Required,
            load_from_file: Selection::All,
            config_file: Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
            env_prefix: String::new(),
            priority: Priority::Env,
            ignore_missing_file: false,
            platform_mode: PlatformMode::Auto,
        }
    }
}

impl LoadOptions {
    /// Start building options from the defaults.
    #[must_use]
    pub fn builder() -> LoadOptionsBuilder {
        LoadOptionsBuilder::default()
    }

    /// Parameters that must be present after merging.
    #[must_use]
    pub fn required_params(&self) -> &[String] {
        &self.required_params
    }

    /// Selection applied to the environment.
    #[must_use]
    pub const fn load_from_env(&self) -> &Selection {
        &self.load_from_env
    }

    /// Selection applied to the configuration file.
    #[must_use]
    pub const fn load_from_file(&self) -> &Selection {
        &self.load_from_file
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn config_file(&self) -> &camino::Utf8Path {
        &self.config_file
    }

    /// Prefix prepended to every key before environment lookup.
    #[must_use]
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Source that wins on collisions.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Whether a missing configuration file is tolerated.
    #[must_use]
    pub const fn ignore_missing_file(&self) -> bool {
        self.ignore_missing_file
    }

    /// Platform naming mode.
    #[must_use]
    pub const fn platform_mode(&self) -> PlatformMode {
        self.platform_mode
    }
}
