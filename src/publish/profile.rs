use crate::lib::errors::PublishRequestError;

/// Publish profile understood by the web project, selected by the configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishProfile {
    Dev,
    Prod,
}

impl PublishProfile {
    /// Normalize a configuration name (`dev`, `DEV`, ` Prod `, ...).
    pub fn parse(input: &str) -> Result<Self, PublishRequestError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("dev") {
            Ok(PublishProfile::Dev)
        } else if trimmed.eq_ignore_ascii_case("prod") {
            Ok(PublishProfile::Prod)
        } else {
            Err(PublishRequestError::InvalidConfiguration {
                value: input.to_string(),
            })
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PublishProfile::Dev => "Dev",
            PublishProfile::Prod => "Prod",
        }
    }

    pub const fn build_mode(&self) -> BuildMode {
        match self {
            PublishProfile::Dev => BuildMode::Debug,
            PublishProfile::Prod => BuildMode::Release,
        }
    }
}

/// Build configuration passed to `-c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}
