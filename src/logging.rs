//! Structured logging setup for binaries that embed the trie.
//!
//! The trie itself only emits `tracing` events. This module installs a
//! `tracing-subscriber` registry with an `EnvFilter` and a JSON (production)
//! or pretty (development) formatter.

use anyhow::{Context, Result};
use std::env;
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
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default level directive, e.g. `info` or `pathtrie=debug`
    pub level: String,
    pub format: LogFormat,
    /// Include file and line number in every event
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Read `PATHTRIE_LOG_LEVEL`, `PATHTRIE_LOG_FORMAT` and
    /// `PATHTRIE_LOG_LOCATION`; anything unset keeps its default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("PATHTRIE_LOG_LEVEL").unwrap_or(defaults.level),
            format: env::var("PATHTRIE_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            include_location: env::var("PATHTRIE_LOG_LOCATION")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.include_location),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        // RUST_LOG wins over the configured level when present
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level)
            .with_context(|| format!("Invalid log level directive '{}'", self.level))
    }
}

/// Install the global subscriber.
///
/// Fails if the level directive does not parse or a global subscriber is
/// already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}
