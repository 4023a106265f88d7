//! Logging setup.
//!
//! Everything goes through the `log` facade. A `fern` dispatch fans records
//! out to an in-memory [`LogBuffer`] (shown by the log viewer dialog) and,
//! when enabled in config, to a log file in the cache directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

static LOGGER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Bounded, shareable buffer of formatted log lines
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.max(1)))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn push(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
}

/// Build the dispatch chain for `config`, feeding `buffer`
pub fn build_dispatch(config: &LoggingConfig, buffer: &LogBuffer) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;
    let sink = buffer.clone();

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{}] {:<5} {}",
                        Local::now().format("%H:%M:%S%.3f"),
                        record.level(),
                        message
                    ))
                })
                .chain(fern::Output::call(move |record| sink.push(record.args().to_string()))),
        );

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    Ok(dispatch)
}

/// Install the global logger. Later calls are no-ops.
pub fn init_logging(config: &LoggingConfig, buffer: &LogBuffer) -> Result<()> {
    if LOGGER_INSTALLED.get().is_some() {
        return Ok(());
    }
    build_dispatch(config, buffer)?
        .apply()
        .context("Failed to install logger")?;
    let _ = LOGGER_INSTALLED.set(());
    log::debug!("Logging initialized (file logging: {})", config.enabled);
    Ok(())
}
