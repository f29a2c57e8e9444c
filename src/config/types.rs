//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::env;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_CORS_ORIGINS, DEFAULT_GREENCHECK_URL, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line; the networking knobs fall back to
/// environment variables (loaded from `.env` by the binary) when the
/// corresponding flag is absent, and to built-in defaults after that.
/// CLI flags always take precedence.
#[derive(Parser, Debug, Clone)]
#[command(name = "page_carbon", version, about = "Estimates the carbon footprint and eco-score of web pages")]
pub struct Config {
    /// HTTP listening port (falls back to the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Allowed CORS origins: "*" or a comma-separated origin list
    /// (falls back to the ALLOWED_ORIGINS environment variable)
    #[arg(long)]
    pub cors_origins: Option<String>,

    /// Base URL of the green-hosting registry
    /// (falls back to the GREENCHECK_API_URL environment variable)
    #[arg(long)]
    pub greencheck_url: Option<String>,

    /// Analyze a single URL, print the result as JSON, and exit
    /// instead of starting the server
    #[arg(long, value_name = "URL")]
    pub analyze: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            cors_origins: None,
            greencheck_url: None,
            analyze: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Resolved listening port: `--port`, then `PORT`, then 3000.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| env::var("PORT").ok().and_then(|v| v.parse().ok()))
            .unwrap_or(DEFAULT_PORT)
    }

    /// Resolved CORS origins: `--cors-origins`, then `ALLOWED_ORIGINS`, then `*`.
    pub fn cors_origins(&self) -> String {
        self.cors_origins
            .clone()
            .or_else(|| env::var("ALLOWED_ORIGINS").ok())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
    }

    /// Resolved greencheck registry base URL.
    pub fn greencheck_url(&self) -> String {
        self.greencheck_url
            .clone()
            .or_else(|| env::var("GREENCHECK_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_GREENCHECK_URL.to_string())
    }
}
