use std::path::Path;

use tracing::{debug, info};

use super::{PublisherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &Path, from_env: bool) {
    if from_env {
        info!(
            target: "publish_web::config",
            path = %path.display(),
            "Loading configuration using PUBLISH_WEB_CONFIG environment variable"
        );
    } else {
        debug!(
            target: "publish_web::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            "PUBLISH_WEB_CONFIG not set; using publish-web.toml from the working directory"
        );
    }
}

pub fn log_builtin_defaults() {
    debug!(
        target: "publish_web::config",
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &PublisherConfig) {
    info!(
        target: "publish_web::config",
        path = %config.source_label(),
        default_configuration = %config.defaults.configuration,
        default_user = %config.defaults.user,
        default_project_path = %config.defaults.project_path,
        tool_program = %config.tool.program.display(),
        "Configuration loaded successfully"
    );
}
