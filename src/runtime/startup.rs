use std::{ffi::OsString, process::ExitCode};

use anyhow::Error;
use tracing::info;

use crate::{
    cli::{parse_invocation, password_prompt, read_password, usage_text, ArgsError},
    config::PublisherConfig,
    publish::{PublishRequest, Publisher},
};

/// Where a `RuntimeExit` message is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStream {
    Stdout,
    Stderr,
}

/// Bundles a failure message with the stream it belongs on and an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    stream: ReportStream,
    exit_code: ExitCode,
}

impl RuntimeExit {
    /// Usage text goes to stdout, like an explicit help request would.
    pub fn usage(text: String) -> Self {
        Self {
            message: text,
            stream: ReportStream::Stdout,
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("ERROR: {err}"),
            stream: ReportStream::Stderr,
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        match self.stream {
            ReportStream::Stdout => println!("{}", self.message),
            ReportStream::Stderr => eprintln!("{}", self.message),
        }
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stream(&self) -> ReportStream {
        self.stream
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Parse `tokens`, prompt for the password, and publish.
pub async fn run<I, T>(tokens: I, config: &PublisherConfig) -> Result<(), RuntimeExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let invocation = match parse_invocation(tokens, &config.defaults) {
        Ok(invocation) => invocation,
        Err(ArgsError::Unrecognized(token)) => {
            info!(
                target: "publish_web::cli",
                token = %token,
                "Unrecognized argument; showing usage"
            );
            return Err(RuntimeExit::usage(usage_text(&config.defaults)));
        }
        Err(err) => return Err(RuntimeExit::from_error(err)),
    };

    let password =
        read_password(&password_prompt(&invocation.user)).map_err(RuntimeExit::from_error)?;

    let request = PublishRequest::validate(
        &invocation.configuration,
        &invocation.user,
        &invocation.project_path,
    )
    .map_err(RuntimeExit::from_error)?;

    info!(
        target: "publish_web::cli",
        profile = request.profile.as_str(),
        build_mode = request.build_mode().as_str(),
        user = %request.user_name,
        project_path = %request.project_path,
        "Validated publish request"
    );

    Publisher::new(&config.tool)
        .publish(&request, password)
        .await
        .map_err(RuntimeExit::from_error)
}
