use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig, SdkConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Resolve the effective logging config: the command line level wins over
/// the configured one, which wins over `info`.
pub fn resolve(sdk_config: Option<&SdkConfig>, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let configured = sdk_config.and_then(|config| config.logging.as_ref());
    let level = arg_log_level
        .map(|level| level.as_str().to_owned())
        .or_else(|| configured.map(|config| config.level.to_owned()))
        .unwrap_or_else(|| "info".to_owned());
    let format = configured
        .map(|config| config.format.to_owned())
        .unwrap_or(LogFormat::Compact);

    LoggingConfig::new(level, format)
}

/// Subscriber for the time before the config is loaded: compact output at
/// the command line level, `info` without one. Only scoped use is intended,
/// the global subscriber is installed by `run` once the config is known.
pub fn bootstrap_subscriber(arg_log_level: Option<LogLevel>) -> impl tracing::Subscriber + Send + Sync + 'static {
    let level = arg_log_level.map(|level| level.as_str()).unwrap_or("info");
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::new(level))
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .finish()
}

pub fn run(sdk_config: Option<&SdkConfig>, arg_log_level: Option<LogLevel>) {
    init_logging(&resolve(sdk_config, arg_log_level));
}

/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true) // flattens fields, good for CRI log parsers
                .with_writer(std::io::stderr)
                .with_ansi(false); // CRI parsers dislike ANSI color codes

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(std::io::stderr)
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}
