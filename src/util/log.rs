// src/util/log.rs

//! File-based logging for the TUI. The terminal belongs to ratatui, so
//! nothing may be printed to stdout/stderr while the app is running.
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Writes each severity to its own file under `log_dir`.
pub struct Logger {
    error_file: Mutex<File>,
    warn_file: Mutex<File>,
    info_file: Mutex<File>,
    debug_file: Mutex<File>,
}

impl Logger {
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        create_dir_all(log_dir)?;

        // Truncated on every start
        let open = |level: LogLevel| File::create(log_dir.join(level.filename()));

        Ok(Self {
            error_file: Mutex::new(open(LogLevel::Error)?),
            warn_file: Mutex::new(open(LogLevel::Warn)?),
            info_file: Mutex::new(open(LogLevel::Info)?),
            debug_file: Mutex::new(open(LogLevel::Debug)?),
        })
    }

    pub fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Ok(mut file) = file.lock() {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Install the global logger. Later calls keep the first logger.
pub fn init(log_dir: &Path) -> std::io::Result<()> {
    DEBUG_ENABLED.get_or_init(|| std::env::var("DEBUG").unwrap_or_default() == "true");

    if LOGGER.get().is_none() {
        let _ = LOGGER.set(Logger::new(log_dir)?);
    }
    Ok(())
}

/// `None` until [`init`] has run; the macros are no-ops then.
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            logger.write_log($crate::util::log::LogLevel::Error, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            logger.write_log($crate::util::log::LogLevel::Warn, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::logger() {
            logger.write_log($crate::util::log::LogLevel::Info, &format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            if let Some(logger) = $crate::util::log::logger() {
                logger.write_log($crate::util::log::LogLevel::Debug, &format!($($arg)*));
            }
        }
    }};
}
