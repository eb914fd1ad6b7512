//! Entry point for publish-web.
use std::{env, process::ExitCode};

use publish_web::{
    config::PublisherConfig,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let config = PublisherConfig::load_from_env_or_default().map_err(RuntimeExit::from_error)?;
    runtime::run(env::args_os().skip(1), &config).await
}
