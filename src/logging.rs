//! Structured logging setup.
//!
//! The router only emits `tracing` events. Binaries embedding it call
//! [`init_logging_with_config`] once at startup to install a subscriber:
//! JSON lines for production, pretty output for development.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TRIER_LOG_LEVEL` | `info` | trace/debug/info/warn/error |
//! | `TRIER_LOG_FORMAT` | `json` | json/pretty |
//! | `TRIER_LOG_TARGET_FILTER` | unset | extra comma-separated filter directives |
//! | `TRIER_LOG_INCLUDE_LOCATION` | `false` | include file:line |
//! | `TRIER_LOG_ASYNC` | `false` | buffer output on a background writer thread |
//!
//! `RUST_LOG`, when set, takes precedence over `TRIER_LOG_LEVEL`.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Extra filter directives, comma-separated (e.g. `trierouter=debug`)
    pub target_filter: Option<String>,
    /// Include file:line location (dev only)
    pub include_location: bool,
    /// Write through a non-blocking background writer
    pub async_logging: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key)
                .and_then(|s| s.parse().ok())
                .unwrap_or(false)
        };
        Self {
            log_level: lookup("TRIER_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format: LogFormat::parse(&lookup("TRIER_LOG_FORMAT").unwrap_or_default()),
            target_filter: lookup("TRIER_LOG_TARGET_FILTER"),
            include_location: flag("TRIER_LOG_INCLUDE_LOCATION"),
            async_logging: flag("TRIER_LOG_ASYNC"),
        }
    }

    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
            async_logging: false,
        }
    }

    #[must_use]
    pub fn default_prod() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            target_filter: None,
            include_location: false,
            async_logging: true,
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.env_filter_with(env::var("RUST_LOG").ok().as_deref())
    }

    /// Base filter from `rust_log` when it parses, else from `log_level`,
    /// plus every valid `target_filter` directive.
    fn env_filter_with(&self, rust_log: Option<&str>) -> EnvFilter {
        let mut env_filter = rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',').map(str::trim) {
                if filter.is_empty() {
                    continue;
                }
                match filter.parse() {
                    Ok(directive) => env_filter = env_filter.add_directive(directive),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
                }
            }
        }
        env_filter
    }
}

/// Install the global subscriber described by `config`.
///
/// With `async_logging`, output goes through a `tracing-appender` worker
/// thread that lives for the rest of the process.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let (writer, guard) = if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
        (BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stdout), None)
    };

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(guard) = guard {
        // Dropping the guard stops the writer thread.
        std::mem::forget(guard);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::Registry;

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("invalid"), LogFormat::Json);
    }

    #[test]
    fn test_log_config_defaults_from_empty_env() {
        let config = LogConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.target_filter.is_none());
        assert!(!config.include_location);
        assert!(!config.async_logging);
    }

    #[test]
    fn test_log_config_reads_all_variables() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("TRIER_LOG_LEVEL", "trace"),
            ("TRIER_LOG_FORMAT", "pretty"),
            ("TRIER_LOG_TARGET_FILTER", "trierouter=debug"),
            ("TRIER_LOG_INCLUDE_LOCATION", "true"),
            ("TRIER_LOG_ASYNC", "yes"),
        ]));
        assert_eq!(config.level(), Level::TRACE);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.target_filter.as_deref(), Some("trierouter=debug"));
        assert!(config.include_location);
        // Only "true"/"false" parse as bool
        assert!(!config.async_logging);
    }

    #[test]
    fn test_presets() {
        let dev = LogConfig::default_dev();
        assert_eq!(dev.level(), Level::DEBUG);
        assert_eq!(dev.format, LogFormat::Pretty);
        assert!(dev.include_location);

        let prod = LogConfig::default_prod();
        assert_eq!(prod.level(), Level::INFO);
        assert_eq!(prod.format, LogFormat::Json);
        assert!(prod.async_logging);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = LogConfig::from_lookup(lookup_from(&[("TRIER_LOG_LEVEL", "loud")]));
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_env_filter_uses_log_level_without_rust_log() {
        let config = LogConfig::from_lookup(lookup_from(&[("TRIER_LOG_LEVEL", "warn")]));
        assert_eq!(max_level(&config.env_filter_with(None)), Some(LevelFilter::WARN));
        assert_eq!(
            max_level(&config.env_filter_with(Some("  "))),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_rust_log_takes_precedence_over_log_level() {
        let config = LogConfig::default_dev();
        assert_eq!(
            max_level(&config.env_filter_with(Some("error"))),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_unparsable_rust_log_falls_back_to_log_level() {
        let config = LogConfig::default_prod();
        assert_eq!(
            max_level(&config.env_filter_with(Some("trierouter=loudest"))),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_target_filter_directives_are_added() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("TRIER_LOG_LEVEL", "warn"),
            ("TRIER_LOG_TARGET_FILTER", "trierouter::router=trace, ,trierouter=verbose"),
        ]));
        assert_eq!(max_level(&config.env_filter_with(None)), Some(LevelFilter::TRACE));

        // Directives extend RUST_LOG too.
        assert_eq!(
            max_level(&config.env_filter_with(Some("error"))),
            Some(LevelFilter::TRACE)
        );
    }
}
