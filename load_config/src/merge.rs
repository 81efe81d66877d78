//! Priority merge of the two source trees and required-key validation.

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::env::NamingContext;
use crate::{LoadConfigError, LoadConfigResult, Priority};

/// Union of both trees where the higher-priority source overwrites the other
/// key by key.
///
/// Trees are replaced wholesale; members of a nested value are never merged
/// across sources.
pub(crate) fn merge_sources(
    file: Map<String, Value>,
    env: Map<String, Value>,
    priority: Priority,
) -> Map<String, Value> {
    let (mut base, overlay) = match priority {
        Priority::Env => (file, env),
        Priority::File => (env, file),
    };
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Check every required key is present in `merged`.
///
/// # Errors
///
/// Returns [`LoadConfigError::MissingRequiredParameter`] for a single absent
/// key, or an aggregate listing each absent key.
pub(crate) fn validate_required<'k, I>(
    merged: &Map<String, Value>,
    required: I,
    naming: &NamingContext,
    config_file: &Utf8Path,
) -> LoadConfigResult<()>
where
    I: IntoIterator<Item = &'k String>,
{
    let missing = required
        .into_iter()
        .filter(|key| !merged.contains_key(key.as_str()))
        .map(|key| {
            tracing::debug!(key = %key, "required configuration parameter is missing");
            LoadConfigError::MissingRequiredParameter {
                key: key.clone(),
                env_var: naming.env_var_name(key),
                file_key: key.clone(),
                config_file: config_file.to_path_buf(),
            }
        });
    LoadConfigError::try_aggregate(missing).map_or(Ok(()), Err)
}
