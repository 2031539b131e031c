//! Bootstrap of the SDK config from the credentials properties file the
//! platform mounts into service containers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tokio::time::{sleep, Instant};
use tracing::info;

use crate::config::settings::SdkConfig;

pub const CREDENTIALS_PATH_ENV: &str = "GRAPHGRID_CONFIG_CREDENTIALS_PATH";
pub const CREDENTIALS_FILENAME_ENV: &str = "CONFIG_CREDENTIAL_PROPERTIES_FILENAME";
pub const SPRING_OAUTH_CLIENT_ID: &str = "spring.oauth.client.id";
pub const SPRING_OAUTH_CLIENT_SECRET: &str = "spring.oauth.client.secret";

pub const FILE_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
pub const FILE_WAIT_INTERVAL: Duration = Duration::from_secs(5);

/// Build a docker-context config from the properties file named by
/// `GRAPHGRID_CONFIG_CREDENTIALS_PATH` and `CONFIG_CREDENTIAL_PROPERTIES_FILENAME`.
pub async fn bootstrap_config_from_env() -> Result<SdkConfig> {
    let dir = std::env::var(CREDENTIALS_PATH_ENV).with_context(|| format!("{} is not set", CREDENTIALS_PATH_ENV))?;
    let filename =
        std::env::var(CREDENTIALS_FILENAME_ENV).with_context(|| format!("{} is not set", CREDENTIALS_FILENAME_ENV))?;
    let path = PathBuf::from(dir).join(filename);

    wait_for_file_creation(&path, FILE_WAIT_TIMEOUT, FILE_WAIT_INTERVAL).await?;
    bootstrap_config_from_file(&path).await
}

pub async fn bootstrap_config_from_file(path: &Path) -> Result<SdkConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("unable to read {}", path.display()))?;
    let properties = parse_properties(&content);

    let lookup = |key: &str| {
        properties.get(key).cloned().ok_or_else(|| {
            anyhow!(
                "{} did not contain the required key, \"{}\", to bootstrap the SDK config",
                path.display(),
                key
            )
        })
    };
    let oauth_id = lookup(SPRING_OAUTH_CLIENT_ID)?;
    let oauth_secret = lookup(SPRING_OAUTH_CLIENT_SECRET)?;

    info!("bootstrapped SDK credentials from {}", path.display());
    let mut config = SdkConfig::new("localhost", oauth_id, oauth_secret);
    // a mounted credentials file means we run next to the services
    config.docker_context = true;
    Ok(config)
}

/// Minimal `.properties` reader: `key=value` or `key: value` lines, `#` and
/// `!` comments, surrounding whitespace trimmed.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let re = Regex::new(r"^\s*([^=:#!\s][^=:\s]*)\s*[=:]\s*(.*?)\s*$").expect("static regex");
    content
        .lines()
        .filter_map(|line| re.captures(line))
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

pub async fn wait_for_file_creation(path: &Path, timeout: Duration, interval: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        info!("waiting up to {:?} for {}", timeout, path.display());
    }
    while !tokio::fs::try_exists(path).await.unwrap_or(false) {
        if Instant::now() > deadline {
            return Err(anyhow!("timed out waiting for {}", path.display()));
        }
        sleep(interval).await;
    }
    Ok(())
}
