//! Publishing: input validation, command construction, and running the tool.
pub mod executor;
pub mod profile;
pub mod request;

use std::path::PathBuf;

use tokio::io::AsyncWrite;

use crate::{
    config::ToolSection,
    lib::{errors::PublishError, secret::SecretString, telemetry::PublishSpan},
};

pub use executor::{run_command, RelayedOutput};
pub use profile::{BuildMode, PublishProfile};
pub use request::PublishRequest;

/// Runs `<program> publish ...` for validated requests.
#[derive(Debug, Clone)]
pub struct Publisher {
    program: PathBuf,
}

impl Publisher {
    pub fn new(tool: &ToolSection) -> Self {
        Self {
            program: tool.program.clone(),
        }
    }

    /// Publish, relaying the tool's output to this process's stdout and stderr.
    pub async fn publish(
        &self,
        request: &PublishRequest,
        password: SecretString,
    ) -> Result<(), PublishError> {
        self.publish_to(request, password, tokio::io::stdout(), tokio::io::stderr())
            .await
            .map(|_| ())
    }

    /// Publish, relaying the tool's output into the given sinks.
    pub async fn publish_to<O, E>(
        &self,
        request: &PublishRequest,
        password: SecretString,
        stdout: O,
        stderr: E,
    ) -> Result<RelayedOutput<O, E>, PublishError>
    where
        O: AsyncWrite + Unpin + Send + 'static,
        E: AsyncWrite + Unpin + Send + 'static,
    {
        let arguments = request.arguments(&password)?;
        drop(password);

        let span = PublishSpan::start(request.profile.as_str(), &arguments.render_redacted());
        let command = arguments.to_command(&self.program);
        drop(arguments);

        let program = self.program.display().to_string();
        let result = run_command(command, &program, stdout, stderr).await;
        match &result {
            Ok(_) => span.finish("succeeded", Some(0)),
            Err(err) => span.finish("failed", err.exit_code()),
        }
        result
    }
}
