//! `load-config` entry point: resolve configuration and print it as JSON.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use load_config::{
    DEFAULT_CONFIG_FILE, LoadConfigError, LoadOptions, PlatformMode, Priority, Selection, Source,
    load_config,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Resolve configuration from a JSON file and the process environment.
#[derive(Debug, Parser)]
#[command(name = "load-config", version, about)]
struct Cli {
    /// Parameter that must be present after merging; repeat or separate with commas.
    #[arg(short = 'r', long = "require", value_name = "KEY", value_delimiter = ',')]
    required: Vec<String>,

    /// Keys read from the environment: `required` or `all`.
    #[arg(
        long,
        value_name = "MODE",
        default_value = "required",
        env = "LOAD_CONFIG_LOAD_FROM_ENV",
        conflicts_with = "env_keys"
    )]
    load_from_env: String,

    /// Explicit keys read from the environment instead of a mode.
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    env_keys: Vec<String>,

    /// Keys read from the configuration file: `required` or `all`.
    #[arg(
        long,
        value_name = "MODE",
        default_value = "all",
        env = "LOAD_CONFIG_LOAD_FROM_FILE",
        conflicts_with = "file_keys"
    )]
    load_from_file: String,

    /// Explicit keys read from the configuration file instead of a mode.
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    file_keys: Vec<String>,

    /// Path of the JSON configuration file.
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_FILE, env = "LOAD_CONFIG_FILE")]
    config_file: Utf8PathBuf,

    /// Prefix prepended to every key before environment lookup.
    #[arg(short = 'p', long, default_value = "", env = "LOAD_CONFIG_ENV_PREFIX")]
    env_prefix: String,

    /// Source that wins when both define a key: `env` or `file`.
    #[arg(long, default_value = "env", env = "LOAD_CONFIG_PRIORITY")]
    priority: Priority,

    /// Continue with an empty file tree when the configuration file is missing.
    #[arg(long)]
    ignore_missing_file: bool,

    /// Managed hosting naming: `auto`, `on` or `off`.
    #[arg(long, default_value = "auto", env = "LOAD_CONFIG_PLATFORM")]
    platform: PlatformMode,
}

impl Cli {
    fn into_options(self) -> Result<LoadOptions, LoadConfigError> {
        let load_from_env = selection(Source::Env, &self.load_from_env, self.env_keys)?;
        let load_from_file = selection(Source::File, &self.load_from_file, self.file_keys)?;
        Ok(LoadOptions::builder()
            .required(self.required)
            .load_from_env(load_from_env)
            .load_from_file(load_from_file)
            .config_file(self.config_file)
            .env_prefix(self.env_prefix)
            .priority(self.priority)
            .ignore_missing_file(self.ignore_missing_file)
            .platform_mode(self.platform)
            .build())
    }
}

fn selection(source: Source, mode: &str, keys: Vec<String>) -> Result<Selection, LoadConfigError> {
    if keys.is_empty() {
        Selection::parse_for(source, mode)
    } else {
        Ok(Selection::Explicit(keys))
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let options = cli.into_options()?;
    let config = load_config(&options).wrap_err("failed to resolve configuration")?;

    let rendered = serde_json::to_string_pretty(&config)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
