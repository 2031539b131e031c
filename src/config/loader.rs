use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::bootstrap::bootstrap_config_from_env;
use crate::config::settings::{LogFormat, LoggingConfig, SdkConfig};
use crate::config::validator::validate_sdk_config;

/// Config from `path` when given, otherwise bootstrapped from the mounted
/// credentials properties file.
pub async fn load_sdk_config(path: Option<&Path>) -> Result<SdkConfig> {
    match path {
        Some(path) => file_to_config(path).await,
        None => bootstrap_config_from_env().await,
    }
}

/// Load, env-expand and validate the YAML config at `path`.
pub async fn file_to_config(path: &Path) -> Result<SdkConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("unable to read config {}", path.display()))?;

    let expanded = expand_env_vars(&content);
    parse_config(&expanded)
}

pub fn parse_config(content: &str) -> Result<SdkConfig> {
    let mut sdk_config: SdkConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if sdk_config.logging.is_none() {
        sdk_config.logging = Some(LoggingConfig::new("info".to_owned(), LogFormat::Compact));
    }

    debug!("validating config ...");
    validate_sdk_config(&sdk_config)
        .map_err(|errors| anyhow!("config is not valid: {}", errors.join("; ")))?;

    Ok(sdk_config)
}

/// Replace `${VAR}` and `${VAR:default}` with the environment value, the
/// default, or nothing.
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
