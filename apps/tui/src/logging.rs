//! Tracing subscriber setup.
//!
//! Filter priority: `STAMP_CARD_LOG`, then `RUST_LOG`, then `--debug`.
//! The TUI owns the terminal, so interactive runs only log when a file is
//! given; headless runs log to stderr.

use color_eyre::eyre::WrapErr;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "STAMP_CARD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn choose(headless: bool, log_file: Option<&Path>) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if headless => Self::Stderr,
            None => Self::Off,
        }
    }
}

pub const fn default_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

pub fn init_logging(target: &LogTarget, debug: bool) -> color_eyre::Result<()> {
    let filter = build_env_filter(debug);

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => {
            let ansi = atty::is(atty::Stream::Stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .without_time()
                        .compact(),
                )
                .try_init()
                .wrap_err("failed to install log subscriber")
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
                .wrap_err("failed to install log subscriber")
        }
    }
}

fn build_env_filter(debug: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = default_level(debug);
    let directive = if debug {
        format!("{level},stamp_card_tui=debug")
    } else {
        level.to_string()
    };

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_runs_stay_quiet_without_a_file() {
        assert_eq!(LogTarget::choose(false, None), LogTarget::Off);
    }

    #[test]
    fn headless_runs_log_to_stderr() {
        assert_eq!(LogTarget::choose(true, None), LogTarget::Stderr);
    }

    #[test]
    fn log_file_wins() {
        let path = Path::new("/tmp/stamp-card.log");
        assert_eq!(
            LogTarget::choose(true, Some(path)),
            LogTarget::File(path.to_path_buf())
        );
        assert_eq!(
            LogTarget::choose(false, Some(path)),
            LogTarget::File(path.to_path_buf())
        );
    }

    #[test]
    fn debug_raises_default_level() {
        assert_eq!(default_level(false), Level::WARN);
        assert_eq!(default_level(true), Level::DEBUG);
    }

    #[test]
    fn builds_filters_without_panicking() {
        let _filter = build_env_filter(false);
        let _filter = build_env_filter(true);
    }
}
