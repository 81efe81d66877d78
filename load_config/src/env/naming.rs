//! Translation between canonical keys and raw environment variable names.
//!
//! Canonical keys are lower-case and may contain dots. In the standard
//! convention a variable `PREFIX_KEY.MEMBER` contributes `member` to the tree
//! stored under `key`. The managed hosting platform cannot express dots, so it
//! publishes the same setting as `APPSETTING_PREFIX_KEY_MEMBER`; under the
//! platform flag both spellings are consulted and the platform one shadows
//! the standard one.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::EnvSnapshot;

/// Prefix the managed hosting platform adds to every application setting.
pub(crate) const PLATFORM_PREFIX: &str = "appsetting_";

/// Prefix, case folding and platform flag used for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamingContext {
    prefix: String,
    platform: bool,
}

impl NamingContext {
    pub(crate) fn new(prefix: &str, platform: bool) -> Self {
        Self {
            prefix: prefix.to_ascii_lowercase(),
            platform,
        }
    }

    pub(crate) const fn is_platform(&self) -> bool {
        self.platform
    }

    /// Every canonical top-level key the snapshot can supply.
    ///
    /// Names outside the prefix are ignored. A nested name such as
    /// `PREFIX_KEY.MEMBER` yields `key`; platform names lose their
    /// `APPSETTING_` marker before the prefix is matched.
    pub(crate) fn discover(&self, env: &EnvSnapshot) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        for (name, _) in env.iter() {
            let folded = name.to_ascii_lowercase();
            let unescaped = if self.platform {
                folded.strip_prefix(PLATFORM_PREFIX).unwrap_or(folded.as_str())
            } else {
                folded.as_str()
            };
            let Some(rest) = unescaped.strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            let top = rest.split_once('.').map_or(rest, |(head, _)| head);
            if !top.is_empty() {
                keys.insert(top.to_owned());
            }
        }
        tracing::debug!(count = keys.len(), prefix = %self.prefix, "discovered environment keys");
        keys
    }

    /// Variable name a user would set to supply `key`.
    pub(crate) fn env_var_name(&self, key: &str) -> String {
        let key = key.to_ascii_lowercase();
        if self.platform {
            format!("{PLATFORM_PREFIX}{}{}", self.prefix, escape(&key)).to_ascii_uppercase()
        } else {
            format!("{}{key}", self.prefix).to_ascii_uppercase()
        }
    }

    /// Resolve every key in `keys`, omitting those with no match.
    pub(crate) fn collect<'k, I>(&self, keys: I, env: &EnvSnapshot) -> Map<String, Value>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let mut tree = Map::new();
        for key in keys {
            let canonical = key.to_ascii_lowercase();
            if let Some(value) = self.resolve_key(&canonical, env) {
                tree.insert(canonical, value);
            }
        }
        tree
    }

    /// Resolve a single canonical key to a scalar or a reconstructed tree.
    ///
    /// A tree built from nested names takes precedence over a scalar found
    /// for the same key.
    pub(crate) fn resolve_key(&self, key: &str, env: &EnvSnapshot) -> Option<Value> {
        let nested = self.nested_members(key, env);
        if !nested.is_empty() {
            tracing::trace!(key, members = nested.len(), "reconstructed nested value");
            return Some(Value::Object(nested));
        }
        self.scalar(key, env).map(|value| Value::String(value.to_owned()))
    }

    /// Scalar lookup in ascending precedence: the platform's plain underscore
    /// spelling, the standard spelling, then the `APPSETTING_` spelling.
    fn scalar<'e>(&self, key: &str, env: &'e EnvSnapshot) -> Option<&'e str> {
        let standard = format!("{}{key}", self.prefix);
        let mut candidates = Vec::with_capacity(3);
        if self.platform {
            candidates.push(format!("{}{}", self.prefix, escape(key)));
        }
        candidates.push(standard);
        if self.platform {
            candidates.push(format!("{PLATFORM_PREFIX}{}{}", self.prefix, escape(key)));
        }
        candidates.iter().rev().find_map(|name| {
            let value = env.get(name);
            if value.is_some() {
                tracing::trace!(key, env_var = %name, "matched environment variable");
            }
            value
        })
    }

    fn nested_members(&self, key: &str, env: &EnvSnapshot) -> Map<String, Value> {
        let mut tree = Map::new();
        let standard = format!("{}{key}.", self.prefix);
        for (name, value) in env.iter() {
            let folded = name.to_ascii_lowercase();
            if let Some(rest) = folded.strip_prefix(standard.as_str()) {
                let path: Vec<&str> = rest.split('.').filter(|s| !s.is_empty()).collect();
                insert_path(&mut tree, &path, value);
            }
        }
        if self.platform {
            let platform = format!("{PLATFORM_PREFIX}{}{}_", self.prefix, escape(key));
            for (name, value) in env.iter() {
                let folded = name.to_ascii_lowercase();
                if let Some(member) = folded.strip_prefix(platform.as_str()) {
                    insert_path(&mut tree, &[member], value);
                }
            }
        }
        tree
    }
}

/// Replace the dots the platform cannot represent with underscores.
fn escape(key: &str) -> String {
    key.replace('.', "_")
}

/// Insert `value` at `path`, creating intermediate trees as needed.
///
/// An existing tree is never replaced by a scalar; a scalar standing in the
/// way of a deeper path is replaced by a tree.
fn insert_path(target: &mut Map<String, Value>, path: &[&str], value: &str) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };
    if head.is_empty() {
        return;
    }
    if rest.is_empty() {
        if !matches!(target.get(*head), Some(Value::Object(_))) {
            target.insert((*head).to_owned(), Value::String(value.to_owned()));
        }
        return;
    }
    let entry = target
        .entry(*head)
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(child) = entry {
        insert_path(child, rest, value);
    }
}

#[cfg(test)]
mod tests;
