use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CONFIGURATION: &str = "DEV";
pub const DEFAULT_USER: &str = "DLeinweber";
pub const DEFAULT_PROJECT_PATH: &str = r"C:\DEV\Web\Web.csproj";

/// Values used when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsSection {
    pub configuration: String,
    pub user: String,
    pub project_path: String,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            configuration: DEFAULT_CONFIGURATION.to_string(),
            user: DEFAULT_USER.to_string(),
            project_path: DEFAULT_PROJECT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDefaultsSection {
    pub configuration: Option<String>,
    pub user: Option<String>,
    pub project_path: Option<String>,
}

pub fn parse_defaults_section(
    raw: Option<RawDefaultsSection>,
    path: &Path,
) -> Result<DefaultsSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let fallback = DefaultsSection::default();

    let configuration = raw.configuration.unwrap_or(fallback.configuration);
    validate_not_blank(path, "defaults.configuration", &configuration)?;
    let user = raw.user.unwrap_or(fallback.user);
    validate_not_blank(path, "defaults.user", &user)?;
    let project_path = raw.project_path.unwrap_or(fallback.project_path);
    validate_not_blank(path, "defaults.project_path", &project_path)?;

    Ok(DefaultsSection {
        configuration,
        user,
        project_path,
    })
}

fn validate_not_blank(path: &Path, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if !value.trim().is_empty() {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Value must not be blank".into(),
    })
}
