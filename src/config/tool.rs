use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_TOOL_PROGRAM: &str = "dotnet";

/// External build tool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSection {
    /// Program name (looked up on `PATH`) or path to the tool.
    pub program: PathBuf,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_TOOL_PROGRAM),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawToolSection {
    pub program: Option<PathBuf>,
}

pub fn parse_tool_section(
    raw: Option<RawToolSection>,
    path: &Path,
) -> Result<ToolSection, ConfigError> {
    let program = raw
        .unwrap_or_default()
        .program
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL_PROGRAM));

    if program.to_string_lossy().trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "tool.program",
            message: "Specify the build tool name or path".into(),
        });
    }

    Ok(ToolSection { program })
}
