use std::{io, process::Stdio};

use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    process::Command,
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::lib::errors::{OutputStream, PublishError};

/// Sinks handed back after the child's output has been relayed.
#[derive(Debug)]
pub struct RelayedOutput<O, E> {
    pub stdout: O,
    pub stderr: E,
}

/// Spawn `command`, forward its stdout and stderr line by line into the given
/// sinks, and wait for it to exit. `program` names the tool in error messages.
///
/// Each pipe is drained by its own task. Lines keep their order within a
/// stream; nothing orders the two streams against each other. Both tasks are
/// joined before the exit status is inspected.
pub async fn run_command<O, E>(
    mut command: Command,
    program: &str,
    stdout_sink: O,
    stderr_sink: E,
) -> Result<RelayedOutput<O, E>, PublishError>
where
    O: AsyncWrite + Unpin + Send + 'static,
    E: AsyncWrite + Unpin + Send + 'static,
{
    command.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = command.spawn().map_err(|source| PublishError::SpawnFailed {
        program: program.to_string(),
        source,
    })?;
    // The command still holds the argument list, password included.
    drop(command);

    debug!(
        target: "publish_web::publish",
        pid = child.id(),
        "Spawned publish tool"
    );

    let stdout_task = tokio::spawn(relay_lines(child.stdout.take(), stdout_sink));
    let stderr_task = tokio::spawn(relay_lines(child.stderr.take(), stderr_sink));

    let status = child.wait().await.map_err(|source| PublishError::Wait {
        program: program.to_string(),
        source,
    })?;

    let stdout = join_relay(stdout_task, OutputStream::Stdout, program).await;
    let stderr = join_relay(stderr_task, OutputStream::Stderr, program).await;

    match status.code() {
        Some(0) => {}
        Some(exit_code) => {
            return Err(PublishError::ExitedWithCode {
                program: program.to_string(),
                exit_code,
            })
        }
        None => {
            return Err(PublishError::Terminated {
                program: program.to_string(),
            })
        }
    }

    Ok(RelayedOutput {
        stdout: stdout?,
        stderr: stderr?,
    })
}

/// Copy `reader` into `sink` one line at a time. After a write failure the
/// pipe is still drained so the child never blocks on a full buffer.
async fn relay_lines<R, W>(reader: Option<R>, mut sink: W) -> (W, io::Result<()>)
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(reader) = reader else {
        return (sink, Ok(()));
    };

    let mut lines = BufReader::new(reader).split(b'\n');
    let mut outcome = Ok(());
    loop {
        match lines.next_segment().await {
            Ok(Some(line)) => {
                if outcome.is_ok() {
                    outcome = write_line(&mut sink, &line).await;
                }
            }
            Ok(None) => break,
            Err(err) => {
                if outcome.is_ok() {
                    outcome = Err(err);
                }
                break;
            }
        }
    }
    (sink, outcome)
}

async fn write_line<W>(sink: &mut W, line: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    sink.write_all(line).await?;
    sink.write_all(b"\n").await?;
    sink.flush().await
}

async fn join_relay<W>(
    task: JoinHandle<(W, io::Result<()>)>,
    stream: OutputStream,
    program: &str,
) -> Result<W, PublishError> {
    let relay_error = |source| PublishError::Relay {
        program: program.to_string(),
        stream,
        source,
    };

    match task.await {
        Ok((sink, Ok(()))) => Ok(sink),
        Ok((_, Err(source))) => {
            warn!(
                target: "publish_web::publish",
                stream = stream.as_str(),
                reason = %source,
                "Failed to relay publish output"
            );
            Err(relay_error(source))
        }
        Err(join_error) => Err(relay_error(io::Error::other(join_error.to_string()))),
    }
}
