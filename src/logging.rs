/// Structured logging for the water-quality service
///
/// Provides context-rich logging with location identifiers, timestamps,
/// and severity levels. Supports both console output and file-based
/// logging for scheduled runs.

use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::model::IngestError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Config,
    Ingest,
    Classifier,
    Alert,
    Report,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Config => write!(f, "CFG"),
            Component::Ingest => write!(f, "INGEST"),
            Component::Classifier => write!(f, "CLASSIFY"),
            Component::Alert => write!(f, "ALERT"),
            Component::Report => write!(f, "REPORT"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - e.g. no batch has been exported yet
    Expected,
    /// Unexpected failure - indicates a broken export or configuration issue
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<PathBuf>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<PathBuf>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    /// Format a file log entry
    fn format_entry(level: LogLevel, component: Component, location: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let location_part = location.map(|s| format!(" [{}]", s)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, location_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, location: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, location, message);
        let location_part = location.map(|s| format!(" [{}]", s)).unwrap_or_default();

        // Console output goes to stderr; stdout carries the report.
        if self.console_timestamps {
            match level {
                LogLevel::Error => eprintln!("{}", log_entry),
                _ => eprintln!("   {}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, location_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, location_part, message),
                LogLevel::Info => eprintln!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path.display(), e);
            }
        }
    }

    fn append_to_file(path: &Path, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&Path>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(Path::to_path_buf), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, location: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, location, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, location: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, component, location, message);
}

/// Log a warning message
pub fn warn(component: Component, location: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, component, location, message);
}

/// Log an error message
pub fn error(component: Component, location: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, component, location, message);
}

/// Log a debug message
pub fn debug(component: Component, location: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, component, location, message);
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify an ingest failure based on the error kind
pub fn classify_ingest_failure(err: &IngestError) -> FailureType {
    match err {
        // A missing batch file usually means the export has not run yet
        IngestError::Io(msg) if msg.contains("No such file") || msg.contains("not found") => {
            FailureType::Expected
        }
        IngestError::Io(_) => FailureType::Unknown,
        // Malformed batches and unregistered locations point at the exporter
        IngestError::Parse(_) | IngestError::UnknownLocation(_) => FailureType::Unexpected,
    }
}

/// Log an ingest failure with automatic classification
pub fn log_ingest_failure(source: &str, operation: &str, err: &IngestError) {
    let failure_type = classify_ingest_failure(err);
    let message = format!("{} failed [{}]: {}", operation, failure_type, err);

    match failure_type {
        FailureType::Expected => debug(Component::Ingest, Some(source), &message),
        FailureType::Unexpected => error(Component::Ingest, Some(source), &message),
        FailureType::Unknown => warn(Component::Ingest, Some(source), &message),
    }
}

// ---------------------------------------------------------------------------
// Run Summary Logging
// ---------------------------------------------------------------------------

/// Log how many monitored locations produced a report in this run
pub fn log_coverage_summary(total: usize, reported: usize, critical_alerts: usize) {
    let missing = total.saturating_sub(reported);
    let message = format!(
        "Report complete: {}/{} locations reported, {} missing, {} critical alerts",
        reported, total, missing, critical_alerts
    );

    if reported == 0 {
        error(Component::Report, None, &message);
    } else if missing > 0 || critical_alerts > 0 {
        warn(Component::Report, None, &message);
    } else {
        info(Component::Report, None, &message);
    }
}
