//! CLI argument definitions and `Invocation` construction.
use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::config::DefaultsSection;

/// The three value-taking flags, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Configuration,
    User,
    ProjectDir,
}

impl Flag {
    const ALL: [Flag; 3] = [Flag::Configuration, Flag::User, Flag::ProjectDir];

    /// Recognize `--Configuration`, `-C`, `--user`, ... in any letter case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| {
            token.eq_ignore_ascii_case(flag.long()) || token.eq_ignore_ascii_case(flag.short())
        })
    }

    pub const fn long(&self) -> &'static str {
        match self {
            Flag::Configuration => "--configuration",
            Flag::User => "--user",
            Flag::ProjectDir => "--projectdir",
        }
    }

    pub const fn short(&self) -> &'static str {
        match self {
            Flag::Configuration => "-c",
            Flag::User => "-u",
            Flag::ProjectDir => "-p",
        }
    }

    /// Name used in error messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Flag::Configuration => "-Configuration",
            Flag::User => "-User",
            Flag::ProjectDir => "-ProjectDir",
        }
    }
}

/// Why the command line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Missing value for {}.", .0.display_name())]
    MissingValue(Flag),
    #[error("Unrecognized argument: {0}")]
    Unrecognized(String),
}

/// Command-line arguments, after flag names have been normalized.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "publish-web",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct PublishArgs {
    /// DEV or PROD (case-insensitive).
    #[arg(long = "configuration", value_name = "DEV|PROD")]
    pub configuration: Option<String>,
    /// User name passed to the publish profile.
    #[arg(long = "user", value_name = "USERNAME")]
    pub user: Option<String>,
    /// Project file to publish.
    #[arg(long = "projectdir", value_name = "PATH")]
    pub project_dir: Option<String>,
}

/// Parameters for one run, with defaults applied. The password is not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub configuration: String,
    pub user: String,
    pub project_path: String,
}

impl PublishArgs {
    /// Parse raw tokens (without the binary name).
    pub fn parse_tokens<I, T>(tokens: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let normalized = normalize_tokens(tokens.into_iter().map(Into::into).collect())?;
        PublishArgs::try_parse_from(&normalized).map_err(|err| {
            debug!(
                target: "publish_web::cli",
                kind = ?err.kind(),
                "Rejected command line"
            );
            ArgsError::Unrecognized(err.kind().to_string())
        })
    }

    /// Fill unset values from the configured defaults.
    pub fn into_invocation(self, defaults: &DefaultsSection) -> Invocation {
        Invocation {
            configuration: self
                .configuration
                .unwrap_or_else(|| defaults.configuration.clone()),
            user: self.user.unwrap_or_else(|| defaults.user.clone()),
            project_path: self
                .project_dir
                .unwrap_or_else(|| defaults.project_path.clone()),
        }
    }
}

/// Parse tokens and apply defaults.
pub fn parse_invocation<I, T>(
    tokens: I,
    defaults: &DefaultsSection,
) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Ok(PublishArgs::parse_tokens(tokens)?.into_invocation(defaults))
}

/// Rewrite each recognized flag and the token after it into `--long=value`.
/// The following token is always taken as the value, even if it looks like a
/// flag, and the `=` form keeps clap from reinterpreting it. Any other token,
/// `--` and `--long=value` spellings included, is rejected here so clap only
/// ever sees rewritten pairs.
fn normalize_tokens(tokens: Vec<OsString>) -> Result<Vec<OsString>, ArgsError> {
    let mut normalized = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        let Some(flag) = token.to_str().and_then(Flag::from_token) else {
            return Err(ArgsError::Unrecognized(
                token.to_string_lossy().into_owned(),
            ));
        };
        let value = iter.next().ok_or(ArgsError::MissingValue(flag))?;
        let mut joined = OsString::from(format!("{}=", flag.long()));
        joined.push(value);
        normalized.push(joined);
    }
    Ok(normalized)
}

/// Usage text shown for unrecognized arguments.
pub fn usage_text(defaults: &DefaultsSection) -> String {
    format!(
        r#"Usage:
    publish-web [--Configuration | -c <DEV|PROD>] [--User | -u <username>] [--ProjectDir | -p <path>]

    --Configuration | -c  : Optional; default is "{configuration}". Valid values: DEV or PROD (case-insensitive).
    --User          | -u  : Optional; default is "{user}".
    --ProjectDir    | -p  : Optional; default is "{project_path}".

    At runtime, you will be prompted to enter the password securely."#,
        configuration = defaults.configuration,
        user = defaults.user,
        project_path = defaults.project_path,
    )
}
