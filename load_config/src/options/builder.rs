//! Consuming builder for [`LoadOptions`].

use camino::Utf8PathBuf;

use super::{LoadOptions, PlatformMode, Priority, Selection};

/// Builder for [`LoadOptions`].
///
/// # Examples
///
/// ```rust
/// use load_config::{LoadOptions, Priority, Selection};
///
/// let options = LoadOptions::builder()
///     .required(["param1", "param2"])
///     .load_from_env(Selection::All)
///     .env_prefix("PREFIX_")
///     .priority(Priority::File)
///     .build();
/// assert_eq!(options.required_params(), ["param1", "param2"]);
/// assert_eq!(options.env_prefix(), "PREFIX_");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadOptionsBuilder {
    options: LoadOptions,
}

impl LoadOptionsBuilder {
    /// Replaces the list of required parameters.
    #[must_use]
    pub fn required<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.required_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the selection applied to the environment.
    #[must_use]
    pub fn load_from_env(mut self, selection: Selection) -> Self {
        self.options.load_from_env = selection;
        self
    }

    /// Sets the selection applied to the configuration file.
    #[must_use]
    pub fn load_from_file(mut self, selection: Selection) -> Self {
        self.options.load_from_file = selection;
        self
    }

    /// Sets the configuration file path.
    #[must_use]
    pub fn config_file(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.options.config_file = path.into();
        self
    }

    /// Sets the environment variable prefix.
    #[must_use]
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.env_prefix = prefix.into();
        self
    }

    /// Sets which source wins on collisions.
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.options.priority = priority;
        self
    }

    /// Tolerate a missing configuration file.
    #[must_use]
    pub fn ignore_missing_file(mut self, ignore: bool) -> Self {
        self.options.ignore_missing_file = ignore;
        self
    }

    /// Sets the platform naming mode.
    #[must_use]
    pub fn platform_mode(mut self, mode: PlatformMode) -> Self {
        self.options.platform_mode = mode;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> LoadOptions {
        self.options
    }
}
