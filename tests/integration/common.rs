use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_publish-web");
pub const CONFIG_ENV: &str = "PUBLISH_WEB_CONFIG";

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary inside `workdir` with `stdin` piped in. A config path, when
/// given, is passed through `PUBLISH_WEB_CONFIG`.
pub fn run_cli(
    workdir: &Path,
    args: &[&str],
    stdin: &str,
    config: Option<&Path>,
) -> Result<RunOutput> {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .current_dir(workdir)
        .env_remove(CONFIG_ENV)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(path) = config {
        command.env(CONFIG_ENV, path);
    }

    let mut child = command.spawn().context("failed to spawn publish-web")?;
    if let Some(mut pipe) = child.stdin.take() {
        // The process may exit before reading stdin (usage errors).
        let _ = pipe.write_all(stdin.as_bytes());
    }
    let output = child
        .wait_with_output()
        .context("failed to wait for publish-web")?;

    Ok(RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

pub fn workdir() -> TempDir {
    tempfile::tempdir().expect("can create temporary directory")
}

/// Write a config file selecting `program` as the publish tool.
pub fn write_tool_config(dir: &Path, file_name: &str, program: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, format!("[tool]\nprogram = \"{program}\"\n"))
        .expect("can write config file");
    path
}
