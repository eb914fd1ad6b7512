//! Load and validate the optional configuration file.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod defaults;
pub mod telemetry;
pub mod tool;

pub use defaults::{
    parse_defaults_section, DefaultsSection, RawDefaultsSection, DEFAULT_CONFIGURATION,
    DEFAULT_PROJECT_PATH, DEFAULT_USER,
};
pub use tool::{parse_tool_section, RawToolSection, ToolSection, DEFAULT_TOOL_PROGRAM};

pub const CONFIG_ENV_KEY: &str = "PUBLISH_WEB_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "publish-web.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublisherConfig {
    pub defaults: DefaultsSection,
    pub tool: ToolSection,
    /// File the values came from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawPublisherConfig {
    defaults: Option<RawDefaultsSection>,
    tool: Option<RawToolSection>,
}

impl PublisherConfig {
    /// Prefer `PUBLISH_WEB_CONFIG` if set; otherwise read `publish-web.toml`
    /// when present; otherwise fall back to built-in defaults.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        match resolve_config_source(env::var_os(CONFIG_ENV_KEY), fallback) {
            Some((path, from_env)) => {
                telemetry::log_env_source(&path, from_env);
                Self::load_from_path(path)
            }
            None => {
                telemetry::log_builtin_defaults();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "publish_web::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawPublisherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "publish_web::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "publish_web::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Human-readable origin of the values, for logs.
    pub fn source_label(&self) -> String {
        match &self.source_path {
            Some(path) => path.display().to_string(),
            None => "<built-in defaults>".to_string(),
        }
    }

    fn from_raw(raw: RawPublisherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let defaults = parse_defaults_section(raw.defaults, &path)?;
        let tool = parse_tool_section(raw.tool, &path)?;

        Ok(Self {
            defaults,
            tool,
            source_path: Some(path),
        })
    }
}

/// Pick the config file: a non-blank env value wins, then `fallback` if it
/// exists. The flag reports whether the env value was used.
pub fn resolve_config_source(
    env_value: Option<OsString>,
    fallback: &Path,
) -> Option<(PathBuf, bool)> {
    match env_value {
        Some(value) if !value.to_string_lossy().trim().is_empty() => {
            Some((PathBuf::from(value), true))
        }
        _ if fallback.is_file() => Some((fallback.to_path_buf(), false)),
        _ => None,
    }
}
