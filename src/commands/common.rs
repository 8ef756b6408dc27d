//! Shared arguments and setup for all commands.

use crate::Result;
use crate::github::ApiClient;
use clap::{Args, ValueEnum};
use core::time::Duration;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between all commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// User agent string identifying this client to the API
    #[arg(long, value_name = "NAME", default_value = "gh-roster")]
    pub user_agent: String,

    /// Timeout for each individual enrichment fetch, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initialize logger based on log level
    pub fn init_logging(&self) {
        let level = match self.log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(self.log_level, LogLevel::Debug | LogLevel::Trace))
            .init();
    }

    /// Build the API client from these arguments.
    pub fn build_client(&self) -> Result<ApiClient> {
        ApiClient::new(
            self.github_token.as_deref(),
            &self.user_agent,
            self.api_url.trim_end_matches('/'),
            Duration::from_secs(self.timeout_secs),
        )
    }

    /// Whether report output should carry colors.
    #[must_use]
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}
