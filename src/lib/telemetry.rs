//! Telemetry initialization and publish run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Default filter when `RUST_LOG` is unset. The console belongs to the tool's
/// output and the password prompt, so only warnings and errors are shown.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a publish run.
pub struct PublishSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl PublishSpan {
    /// Start a run span.
    pub fn start(profile: &'static str, command: &str) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "publish_web::publish",
            "publish_run",
            %run_id,
            profile
        );
        {
            let _entered = span.enter();
            info!(
                target: "publish_web::publish",
                command = %command,
                "Starting publish"
            );
        }
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "publish_web::publish",
            run_id = %self.run_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed publish"
        );
    }
}
