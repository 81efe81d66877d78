//! Entry points that run a complete resolution.

use crate::env::NamingContext;
use crate::file::{FileReader, FsFileReader, load_file_tree};
use crate::merge::{merge_sources, validate_required};
use crate::select::{canonical, select_keys};
use crate::{EnvSnapshot, LoadConfigResult, LoadOptions, PlatformMode, ResolvedConfig};

/// Resolve configuration from an environment snapshot and a file reader.
///
/// The file is read once, the snapshot is only borrowed, and nothing is
/// cached between calls, so identical inputs always produce identical
/// output.
///
/// # Examples
///
/// ```rust
/// use load_config::{EnvSnapshot, LoadOptions, MemoryReader, Priority, Selection, resolve};
///
/// let env: EnvSnapshot = [("PARAM1", "env_value1")].into_iter().collect();
/// let reader = MemoryReader::new()
///     .with_file("config.json", r#"{"param1": "file_value1", "param2": "file_value2"}"#);
/// let options = LoadOptions::builder()
///     .load_from_env(Selection::All)
///     .priority(Priority::File)
///     .build();
///
/// let config = resolve(&options, &env, &reader)?;
/// assert_eq!(config.get_str("param1"), Some("file_value1"));
/// # Ok::<_, load_config::LoadConfigError>(())
/// ```
///
/// # Errors
///
/// Returns a [`crate::LoadConfigError`] when the file is missing (and not
/// ignored), cannot be read or parsed, or when a required parameter is
/// supplied by neither source.
pub fn resolve<R>(
    options: &LoadOptions,
    env: &EnvSnapshot,
    reader: &R,
) -> LoadConfigResult<ResolvedConfig>
where
    R: FileReader + ?Sized,
{
    let required = canonical(&options.required_params);
    let platform = match options.platform_mode {
        PlatformMode::On => true,
        PlatformMode::Off => false,
        PlatformMode::Auto => env.detects_platform(),
    };
    let naming = NamingContext::new(&options.env_prefix, platform);
    tracing::debug!(
        platform = naming.is_platform(),
        prefix = %options.env_prefix,
        config_file = %options.config_file,
        "resolving configuration"
    );

    let file_tree = load_file_tree(&options.config_file, reader, options.ignore_missing_file)?;
    let file_keys = select_keys(&options.load_from_file, &required, || {
        file_tree.keys().cloned().collect()
    });
    let env_keys = select_keys(&options.load_from_env, &required, || {
        naming.discover(env)
    });
    tracing::debug!(
        file_keys = file_keys.len(),
        env_keys = env_keys.len(),
        "selected keys"
    );

    let file_tree = file_tree
        .into_iter()
        .filter(|(key, _)| file_keys.contains(key))
        .collect();
    let env_tree = naming.collect(env_keys.iter().map(String::as_str), env);

    let merged = merge_sources(file_tree, env_tree, options.priority);
    validate_required(&merged, &required, &naming, &options.config_file)?;
    Ok(ResolvedConfig::new(merged))
}

/// Resolve configuration from the process environment and the file system.
///
/// # Errors
///
/// See [`resolve`].
pub fn load_config(options: &LoadOptions) -> LoadConfigResult<ResolvedConfig> {
    resolve(options, &EnvSnapshot::from_process(), &FsFileReader)
}

/// Like [`load_config`], but prints the failure and exits with status `1`.
#[must_use]
pub fn load_config_or_exit(options: &LoadOptions) -> ResolvedConfig {
    load_config(options).unwrap_or_else(|err| err.exit())
}
