//! Config validation with aggregated errors: every problem is reported at
//! once instead of failing on the first.

use tracing::error;

use crate::config::settings::SdkConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_sdk_config(cfg: &SdkConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if !cfg.docker_context && cfg.url_base.trim().is_empty() {
        errors.push("config: 'url_base' is empty; required outside docker context".to_string());
    }
    if cfg.url_base.contains(char::is_whitespace) {
        errors.push(format!("config: 'url_base' contains whitespace: '{}'", cfg.url_base));
    }

    if cfg.credentials.access_key.is_empty() {
        errors.push("credentials: 'access_key' is empty".to_string());
    }
    if cfg.credentials.secret_key.is_empty() {
        errors.push("credentials: 'secret_key' is empty".to_string());
    }
    if cfg.credentials.access_key.contains(':') {
        errors.push("credentials: 'access_key' must not contain ':'".to_string());
    }

    if cfg.http.timeout_ms == 0 {
        errors.push("http: 'timeout_ms' must be > 0".to_string());
    }

    if cfg.pipeline.poll_interval_ms == 0 {
        errors.push("pipeline: 'poll_interval_ms' must be > 0".to_string());
    }
    if cfg.pipeline.max_polls == Some(0) {
        errors.push("pipeline: 'max_polls' must be > 0 when set".to_string());
    }

    if let Some(logging) = &cfg.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "logging: 'level' is '{}', allowed: {}",
                logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            error!("config validation: {}", e);
        }
        Err(errors)
    }
}
