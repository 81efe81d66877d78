//! The merged configuration returned by a resolution.

use figment::{
    Metadata, Profile, Provider,
    providers::Serialized,
    value::{Dict, Map as ProfileMap},
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Merged configuration keyed by canonical (lower-case) names.
///
/// Values read from the environment are strings or trees of strings; values
/// read from the file keep their JSON type.
///
/// The configuration is also a [`figment::Provider`], so it can be layered
/// into a [`figment::Figment`] and extracted into typed structures:
///
/// ```rust
/// use figment::Figment;
/// use load_config::{EnvSnapshot, LoadOptions, MemoryReader, resolve};
///
/// #[derive(serde::Deserialize)]
/// struct Settings {
///     param1: String,
/// }
///
/// let reader = MemoryReader::new().with_file("config.json", r#"{"param1": "file_value1"}"#);
/// let resolved = resolve(&LoadOptions::default(), &EnvSnapshot::default(), &reader)?;
/// let settings: Settings = Figment::from(resolved).extract()?;
/// assert_eq!(settings.param1, "file_value1");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: Map<String, Value>,
}

impl ResolvedConfig {
    pub(crate) const fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Value stored under `key`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key.to_ascii_lowercase().as_str())
    }

    /// String value stored under `key`, if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether `key` is present, compared case-insensitively.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over top-level entries in key order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.values.iter()
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume the configuration, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    /// Consume the configuration, returning a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl<'a> IntoIterator for &'a ResolvedConfig {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Provider for ResolvedConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("resolved configuration")
    }

    fn data(&self) -> Result<ProfileMap<Profile, Dict>, figment::Error> {
        Serialized::defaults(&self.values).data()
    }
}
