//! Shared helpers for building `dotnet publish` commands.

use std::{path::Path, process::Stdio};

use tokio::process::Command;

use super::secret::SecretString;

/// Separator that would split the `/p:Password=` property in two.
pub const PASSWORD_SEPARATOR: char = ';';
/// Escaped form of [`PASSWORD_SEPARATOR`] understood by MSBuild.
pub const ESCAPED_SEPARATOR: &str = "%3B";

const REDACTED: &str = "***";
const ALLOW_UNTRUSTED_CERTIFICATE: &str = "/p:AllowUntrustedCertificate=true";

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

pub struct DotnetPublishRequest<'a> {
    pub project_path: &'a str,
    pub build_mode: &'a str,
    pub publish_profile: &'a str,
    pub user_name: &'a str,
    pub password: &'a SecretString,
}

/// Arguments for one `publish` invocation. Consumed once, then dropped.
pub struct DotnetPublishArguments {
    project_path: String,
    build_mode: String,
    publish_profile: String,
    user_name: String,
    escaped_password: SecretString,
}

impl DotnetPublishArguments {
    pub fn new(request: DotnetPublishRequest<'_>) -> Self {
        Self {
            project_path: request.project_path.to_string(),
            build_mode: request.build_mode.to_string(),
            publish_profile: request.publish_profile.to_string(),
            user_name: request.user_name.to_string(),
            escaped_password: escape_password(request.password),
        }
    }

    /// Full command line, password included.
    pub fn render(&self) -> SecretString {
        let mut line = SecretString::new();
        line.push_str(&self.prefix());
        line.push_str(self.escaped_password.expose());
        line.push(' ');
        line.push_str(ALLOW_UNTRUSTED_CERTIFICATE);
        line
    }

    /// Command line safe for logs.
    pub fn render_redacted(&self) -> String {
        format!("{}{REDACTED} {ALLOW_UNTRUSTED_CERTIFICATE}", self.prefix())
    }

    /// Build the child process command. Each property is its own argv entry,
    /// so the project path needs no shell quoting here.
    pub fn to_command(&self, program: &Path) -> Command {
        let mut command = Command::new(program);
        command.kill_on_drop(true);
        command
            .arg("publish")
            .arg(&self.project_path)
            .arg("-c")
            .arg(&self.build_mode)
            .arg(format!("/p:PublishProfile={}", self.publish_profile))
            .arg(format!("/p:UserName={}", self.user_name));

        let mut password_arg = SecretString::new();
        password_arg.push_str("/p:Password=");
        password_arg.push_str(self.escaped_password.expose());
        command.arg(password_arg.expose());

        command.arg(ALLOW_UNTRUSTED_CERTIFICATE);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        command
    }

    fn prefix(&self) -> String {
        format!(
            "publish \"{}\" -c {} /p:PublishProfile={} /p:UserName={} /p:Password=",
            self.project_path, self.build_mode, self.publish_profile, self.user_name
        )
    }
}

/// Escape characters that would break the `/p:Password=` property.
pub fn escape_password(password: &SecretString) -> SecretString {
    password.replaced(PASSWORD_SEPARATOR, ESCAPED_SEPARATOR)
}
