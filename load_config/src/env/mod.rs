//! Immutable snapshot of the process environment and the naming rules used
//! to look configuration keys up inside it.
//!
//! Variable names are compared ASCII case-insensitively through
//! [`uncased`], matching the convention that environment names carry no
//! meaningful case.

mod naming;

use std::collections::BTreeMap;

use uncased::{Uncased, UncasedStr};

pub(crate) use naming::NamingContext;

/// Variable naming the site on the managed hosting platform.
pub const PLATFORM_SITE_SENTINEL: &str = "WEBSITE_SITE_NAME";
/// Variable naming the resource group on the managed hosting platform.
pub const PLATFORM_GROUP_SENTINEL: &str = "WEBSITE_RESOURCE_GROUP";

/// Read-only view of environment variables taken at a single point in time.
///
/// When two names differ only in case the first one supplied is kept.
///
/// # Examples
///
/// ```
/// use load_config::EnvSnapshot;
///
/// let env: EnvSnapshot = [("PREFIX_PARAM1", "env_value1")].into_iter().collect();
/// assert_eq!(env.get("prefix_param1"), Some("env_value1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<Uncased<'static>, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let mut skipped = 0_usize;
        let snapshot = std::env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect::<Self>();
        if skipped > 0 {
            tracing::debug!(skipped, "ignored environment variables that are not valid Unicode");
        }
        snapshot
    }

    /// Look up a variable ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(UncasedStr::new(name)).map(String::as_str)
    }

    /// Whether a variable exists, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(UncasedStr::new(name))
    }

    /// Iterate over `(name, value)` pairs in case-insensitive name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of variables in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Whether both managed hosting sentinel variables are present.
    #[must_use]
    pub fn detects_platform(&self) -> bool {
        self.contains(PLATFORM_SITE_SENTINEL) && self.contains(PLATFORM_GROUP_SENTINEL)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = BTreeMap::new();
        for (name, value) in iter {
            let name: String = name.into();
            vars.entry(Uncased::from(name))
                .or_insert_with(|| value.into());
        }
        Self { vars }
    }
}
