/// Parameter, WaterQualityReading, Standard, Status, IngestError, ConfigError
/// core data structures and error handling
///
/// Core data types for the GangaGuard water-quality service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond name lookups and no I/O — only types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// The seven water-quality parameters tracked at every monitoring location.
///
/// Variant order is the canonical reporting order. The serialized form is
/// the camelCase key used in reading batches and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "dissolvedOxygen")]
    DissolvedOxygen,
    #[serde(rename = "bod")]
    Bod,
    #[serde(rename = "nitrate")]
    Nitrate,
    #[serde(rename = "coliform")]
    Coliform,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "turbidity")]
    Turbidity,
}

impl Parameter {
    /// All parameters, in reporting order.
    pub const ALL: [Parameter; 7] = [
        Parameter::DissolvedOxygen,
        Parameter::Bod,
        Parameter::Nitrate,
        Parameter::Coliform,
        Parameter::Ph,
        Parameter::Temperature,
        Parameter::Turbidity,
    ];

    /// The camelCase key, e.g. `"dissolvedOxygen"`.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::DissolvedOxygen => "dissolvedOxygen",
            Parameter::Bod => "bod",
            Parameter::Nitrate => "nitrate",
            Parameter::Coliform => "coliform",
            Parameter::Ph => "pH",
            Parameter::Temperature => "temperature",
            Parameter::Turbidity => "turbidity",
        }
    }

    /// Human-readable label used in alert messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Parameter::DissolvedOxygen => "Dissolved Oxygen",
            Parameter::Bod => "BOD",
            Parameter::Nitrate => "Nitrate",
            Parameter::Coliform => "Coliform",
            Parameter::Ph => "pH Level",
            Parameter::Temperature => "Temperature",
            Parameter::Turbidity => "Turbidity",
        }
    }

    /// Looks up a parameter by its camelCase key. Exact, case-sensitive.
    pub fn from_key(key: &str) -> Option<Parameter> {
        Parameter::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// One sample of all seven parameters at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQualityReading {
    pub timestamp: DateTime<Utc>,
    pub dissolved_oxygen: f64, // mg/L
    pub bod: f64,              // mg/L
    pub nitrate: f64,          // mg/L
    pub coliform: f64,         // MPN/100ml
    #[serde(rename = "pH")]
    pub ph: f64,
    pub temperature: f64, // °C
    pub turbidity: f64,   // NTU
}

impl WaterQualityReading {
    /// Returns the value recorded for `parameter`.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Bod => self.bod,
            Parameter::Nitrate => self.nitrate,
            Parameter::Coliform => self.coliform,
            Parameter::Ph => self.ph,
            Parameter::Temperature => self.temperature,
            Parameter::Turbidity => self.turbidity,
        }
    }

    /// All seven `(parameter, value)` pairs in reporting order.
    pub fn values(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.into_iter().map(move |p| (p, self.value(p)))
    }
}

/// A reading tagged with the monitoring location it came from.
///
/// This is the unit produced by `ingest::readings` and consumed by
/// `analysis::groupings` and `report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedReading {
    pub location: String,
    #[serde(flatten)]
    pub reading: WaterQualityReading,
}

// ---------------------------------------------------------------------------
// Standard and status types
// ---------------------------------------------------------------------------

/// Acceptable `[min, max]` range for one parameter.
///
/// The built-in table lives in `standards::WATER_QUALITY_STANDARDS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standard {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl Standard {
    /// The ideal range as shown to operators, e.g. `"6.5-8.5"`.
    pub fn ideal(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// Qualitative status of a parameter value, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Good,
    Moderate,
    Poor,
    Critical,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Optimal => write!(f, "optimal"),
            Status::Good => write!(f, "good"),
            Status::Moderate => write!(f, "moderate"),
            Status::Poor => write!(f, "poor"),
            Status::Critical => write!(f, "critical"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading a batch of readings.
#[derive(Debug, PartialEq)]
pub enum IngestError {
    /// The batch file could not be read.
    Io(String),
    /// The batch is not valid JSON or does not match the reading shape.
    Parse(String),
    /// A reading names a location that is not in `stations::LOCATION_REGISTRY`.
    UnknownLocation(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(msg) => write!(f, "I/O error: {}", msg),
            IngestError::Parse(msg) => write!(f, "Parse error: {}", msg),
            IngestError::UnknownLocation(id) => write!(f, "Unknown location: {}", id),
        }
    }
}

impl std::error::Error for IngestError {}

/// Errors that can arise when loading or validating a config file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(String),
    /// The file is not valid TOML or has the wrong shape.
    Parse(String),
    /// A `[standards.<key>]` table names an unknown parameter.
    UnknownParameter(String),
    /// A standard override has non-finite bounds or `min > max`.
    InvalidStandard { parameter: String, reason: String },
    /// Band multipliers do not widen monotonically.
    InvalidBands(String),
    /// A status score lies outside 0..=100 or breaks the severity ordering.
    InvalidScores(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::UnknownParameter(key) => write!(f, "Unknown parameter: {}", key),
            ConfigError::InvalidStandard { parameter, reason } => {
                write!(f, "Invalid standard for {}: {}", parameter, reason)
            }
            ConfigError::InvalidBands(msg) => write!(f, "Invalid bands: {}", msg),
            ConfigError::InvalidScores(msg) => write!(f, "Invalid scores: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
