use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use folio_models::i18n::Locale;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable listing extra config files, separated by `:`.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

pub const ENV_PREFIX: &str = "FOLIO";

/// Load the default config, the files listed in `FOLIO_CONFIG` and the
/// `FOLIO_*` environment variables, in that order of precedence.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(extra) = std::env::var(CONFIG_PATHS_ENV) {
        paths.extend(
            extra
                .split(':')
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        );
    }

    let builder = add_files(config::Config::builder(), &paths)?.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Load the given config files and apply `overrides` on top. Each override is
/// parsed as a TOML document, e.g. `emailjs.service_id = "abc"`. The process
/// environment is ignored.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    overrides
        .iter()
        .fold(
            add_files(config::Config::builder(), paths)?,
            |builder, &content| builder.add_source(File::from_str(content, FileFormat::Toml)),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn add_files(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    paths: &[impl AsRef<Path>],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub emailjs: EmailJsConfig,
    pub i18n: I18nConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    pub send_endpoint_override: Option<Url>,
}

impl EmailJsConfig {
    /// Names of the credentials that are not configured.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct I18nConfig {
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub email: String,
    pub location: String,
}
