//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "LIQUIDSTAKE_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set.
    pub const fn new(whoami: String) -> Self {
        Self { whoami }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(liquidstake)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Fails if a global subscriber has already been installed.
pub fn init(config: LoggerConfig) -> Result<(), TryInitError> {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    // Stdout logging.
    let stdout_sub = tracing_subscriber::fmt::layer()
        .compact()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_filter(filt);

    tracing_subscriber::registry().with(stdout_sub).try_init()?;

    info!(whoami = %config.whoami, "logging started");

    Ok(())
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whoami_carries_base_name() {
        let config = LoggerConfig::with_base_name("(engine)");

        assert!(config.whoami().starts_with("(engine)"));
        assert_eq!(LoggerConfig::new("x".to_string()).whoami(), "x");
    }

    #[test]
    fn test_init_only_once() {
        // whichever call installs the subscriber, a later one must fail
        let _ = init(LoggerConfig::default());

        assert!(init(LoggerConfig::default()).is_err());
    }
}
