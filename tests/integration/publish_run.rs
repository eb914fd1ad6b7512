#![cfg(unix)]

use anyhow::Result;

use crate::common::{run_cli, workdir, write_tool_config};

#[test]
fn publish_passes_expected_arguments_to_tool() -> Result<()> {
    let dir = workdir();
    let config = write_tool_config(dir.path(), "tool.toml", "echo");
    let output = run_cli(
        dir.path(),
        &["-c", "PROD", "-u", "alice", "-p", "/proj/app.csproj"],
        "a;b\n",
        Some(&config),
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    assert!(
        output.stdout.contains(
            "publish /proj/app.csproj -c Release /p:PublishProfile=Prod /p:UserName=alice /p:Password=a%3Bb /p:AllowUntrustedCertificate=true"
        ),
        "stdout: {}",
        output.stdout
    );
    Ok(())
}

#[test]
fn failing_tool_exits_with_status_one() -> Result<()> {
    let dir = workdir();
    let config = write_tool_config(dir.path(), "tool.toml", "false");
    let output = run_cli(dir.path(), &["-u", "alice"], "pw\n", Some(&config))?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output
            .stderr
            .contains("ERROR: 'false publish' exited with code 1."),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn missing_tool_is_a_start_failure() -> Result<()> {
    let dir = workdir();
    let config = write_tool_config(dir.path(), "tool.toml", "/nonexistent/dotnet");
    let output = run_cli(dir.path(), &["-u", "alice"], "pw\n", Some(&config))?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output
            .stderr
            .contains("ERROR: Failed to start '/nonexistent/dotnet publish' process"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn tool_output_is_relayed_to_matching_streams() -> Result<()> {
    let dir = workdir();
    // `sh publish <args>` runs this file from the working directory.
    std::fs::write(
        dir.path().join("publish"),
        "echo \"stdout: $1\"\necho \"stderr: $3\" >&2\nexit 4\n",
    )?;
    let config = write_tool_config(dir.path(), "tool.toml", "sh");
    let output = run_cli(
        dir.path(),
        &["-c", "prod", "-p", "/proj/app.csproj"],
        "pw\n",
        Some(&config),
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stdout.contains("stdout: /proj/app.csproj"),
        "stdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains("stderr: Release"),
        "stderr: {}",
        output.stderr
    );
    assert!(
        output.stderr.contains("ERROR: 'sh publish' exited with code 4."),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn config_file_in_working_directory_supplies_defaults() -> Result<()> {
    let dir = workdir();
    std::fs::write(
        dir.path().join("publish-web.toml"),
        "[defaults]\nuser = \"carol\"\nproject_path = \"/srv/site.csproj\"\n\n[tool]\nprogram = \"echo\"\n",
    )?;
    let output = run_cli(dir.path(), &[], "pw\n", None)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", output.stderr);
    assert!(
        output.stderr.contains("Enter password for user 'carol': "),
        "stderr: {}",
        output.stderr
    );
    assert!(
        output.stdout.contains(
            "publish /srv/site.csproj -c Debug /p:PublishProfile=Dev /p:UserName=carol /p:Password=pw"
        ),
        "stdout: {}",
        output.stdout
    );
    Ok(())
}

#[test]
fn invalid_config_file_fails_before_parsing_arguments() -> Result<()> {
    let dir = workdir();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[tool]\nprogram = \"\"\n")?;
    let output = run_cli(dir.path(), &["--bogus"], "", Some(&config))?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("has invalid `tool.program`"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}
