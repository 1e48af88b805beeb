use crate::config::{API_URL_VAR, DETAILED_ERRORS_VAR, TIMEOUT_VAR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "stamp-card", version, about = "Stamp card viewer")]
pub struct CliArgs {
    /// Location whose last path segment is the card number, e.g. /42
    #[arg(value_name = "LOCATION", default_value = "/1")]
    pub location: String,

    /// Base URL of the stamp card API
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Print the card and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the HTTP status for failed requests
    #[arg(long = "detailed-errors")]
    pub detailed_errors: bool,

    /// Give up on a request after this many seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var(API_URL_VAR, url);
        }
        if self.detailed_errors {
            std::env::set_var(DETAILED_ERRORS_VAR, "1");
        }
        if let Some(secs) = self.timeout_secs {
            std::env::set_var(TIMEOUT_VAR, secs.to_string());
        }
    }
}
