//! Tracing setup.
//!
//! The terminal belongs to the picker, so log output goes to a file. Without
//! a file no subscriber is installed and events are dropped.
//!
//!   RUST_LOG=datepick=debug datepick --log-file picker.log

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Default level `debug` instead of `info` when `RUST_LOG` is unset.
    pub debug: bool,
    pub file: Option<PathBuf>,
}

pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::Logging {
            reason: format!("cannot open {}: {source}", path.display()),
        })?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| Error::Logging {
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        assert!(init_tracing(&LogConfig::default()).is_ok());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let config = LogConfig {
            debug: false,
            file: Some(PathBuf::from("/definitely/not/a/dir/picker.log")),
        };
        assert!(matches!(
            init_tracing(&config),
            Err(Error::Logging { .. })
        ));
    }
}
