use std::{fmt, io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while reading the password from the console.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read password from the terminal: {source}")]
    Terminal {
        #[source]
        source: io::Error,
    },
    #[error("Password entry was interrupted.")]
    Interrupted,
    #[error("Password cannot be empty.")]
    EmptyPassword,
}

impl From<io::Error> for PromptError {
    fn from(source: io::Error) -> Self {
        PromptError::Terminal { source }
    }
}

/// Invalid publish inputs, reported before the tool is started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishRequestError {
    #[error("Configuration must not be empty.")]
    BlankConfiguration,
    #[error("User name must not be empty.")]
    BlankUserName,
    #[error("Project file path must not be empty.")]
    BlankProjectPath,
    #[error("Invalid Configuration. Valid options: DEV or PROD.")]
    InvalidConfiguration { value: String },
}

/// Which child pipe a relay failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputStream::Stdout => "stdout",
            OutputStream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level failure types returned while publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    InvalidRequest(#[from] PublishRequestError),
    #[error("Password cannot be empty.")]
    EmptyPassword,
    #[error("Failed to start '{program} publish' process: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program} publish' exited with code {exit_code}.")]
    ExitedWithCode { program: String, exit_code: i32 },
    #[error("'{program} publish' was terminated by a signal.")]
    Terminated { program: String },
    #[error("Failed to relay {stream} of '{program} publish': {source}")]
    Relay {
        program: String,
        stream: OutputStream,
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for '{program} publish': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl PublishError {
    /// Exit code reported by the tool, when it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PublishError::ExitedWithCode { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
