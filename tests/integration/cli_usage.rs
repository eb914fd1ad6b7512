use anyhow::Result;

use crate::common::{run_cli, workdir};

#[test]
fn unrecognized_flag_prints_usage_without_prompting() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["-u", "alice", "--verbose"], "", None)?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Usage:"), "stdout: {}", output.stdout);
    assert!(
        output.stdout.contains("--Configuration | -c"),
        "stdout: {}",
        output.stdout
    );
    assert!(
        !output.stderr.contains("Enter password"),
        "must not prompt: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn missing_flag_value_is_reported_on_stderr() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["--ProjectDir"], "", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output
            .stderr
            .contains("ERROR: Missing value for -ProjectDir."),
        "stderr: {}",
        output.stderr
    );
    assert!(!output.stdout.contains("Usage:"), "stdout: {}", output.stdout);
    Ok(())
}

#[test]
fn empty_password_is_rejected() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["-u", "alice"], "\n", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("Enter password for user 'alice': "),
        "stderr: {}",
        output.stderr
    );
    assert!(
        output.stderr.contains("ERROR: Password cannot be empty."),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn equals_form_flag_prints_usage() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["--configuration=PROD"], "pw\n", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.contains("Usage:"), "stdout: {}", output.stdout);
    assert!(
        !output.stderr.contains("Enter password"),
        "must not prompt: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn password_is_requested_before_configuration_is_checked() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["-c", "staging", "-u", "bob"], "\n", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("Enter password for user 'bob': "),
        "stderr: {}",
        output.stderr
    );
    assert!(
        output.stderr.contains("ERROR: Password cannot be empty."),
        "stderr: {}",
        output.stderr
    );
    assert!(
        !output.stderr.contains("Invalid Configuration"),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn invalid_configuration_is_rejected() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["--configuration", "staging"], "pw\n", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("Enter password for user "),
        "prompt comes first: {}",
        output.stderr
    );
    assert!(
        output
            .stderr
            .contains("ERROR: Invalid Configuration. Valid options: DEV or PROD."),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}

#[test]
fn blank_project_path_is_rejected() -> Result<()> {
    let dir = workdir();
    let output = run_cli(dir.path(), &["-p", " "], "pw\n", None)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("Enter password for user "),
        "prompt comes first: {}",
        output.stderr
    );
    assert!(
        output
            .stderr
            .contains("ERROR: Project file path must not be empty."),
        "stderr: {}",
        output.stderr
    );
    Ok(())
}
