//! Service configuration
//!
//! Loads deployment overrides from `gangaguard.toml`. Every section is
//! optional; an empty file reproduces the built-in behaviour exactly.
//!
//! # Configuration Format
//!
//! ```toml
//! [standards.coliform]
//! min = 0
//! max = 1000
//!
//! [bands]
//! good = { lower = 0.8, upper = 1.2 }
//! moderate = { lower = 0.6, upper = 1.5 }
//! poor = { lower = 0.4, upper = 2.0 }
//!
//! [scores]
//! optimal = 100
//! good = 80
//! moderate = 60
//! poor = 40
//! critical = 20
//!
//! [logging]
//! level = "info"
//! file = "gangaguard.log"
//! timestamps = true
//!
//! [freshness]
//! max_age_minutes = 1440
//! ```
//!
//! Discovery order: `GANGAGUARD_CONFIG` env var, then `gangaguard.toml` in
//! the working directory, then defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analysis::classify::{Band, BandMultipliers, Classifier, StatusScores};
use crate::logging::LogLevel;
use crate::model::{ConfigError, Parameter};
use crate::standards::WATER_QUALITY_STANDARDS;

pub const CONFIG_ENV_VAR: &str = "GANGAGUARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "gangaguard.toml";

/// Daily grab samples are the norm, so a day-old reading is still current.
pub const DEFAULT_MAX_AGE_MINUTES: u64 = 24 * 60;

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Per-parameter bound overrides, keyed by camelCase parameter key.
    pub standards: BTreeMap<String, StandardOverride>,
    pub bands: BandsConfig,
    pub scores: ScoresConfig,
    pub logging: LoggingConfig,
    pub freshness: FreshnessConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardOverride {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandConfig {
    pub lower: f64,
    pub upper: f64,
}

impl From<BandConfig> for Band {
    fn from(b: BandConfig) -> Self {
        Band { lower: b.lower, upper: b.upper }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandsConfig {
    pub good: Option<BandConfig>,
    pub moderate: Option<BandConfig>,
    pub poor: Option<BandConfig>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoresConfig {
    pub optimal: Option<u8>,
    pub good: Option<u8>,
    pub moderate: Option<u8>,
    pub poor: Option<u8>,
    pub critical: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Append log entries to this file in addition to the console.
    pub file: Option<PathBuf>,
    /// Prefix console lines with timestamps and component tags.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LogLevel::Info,
            file: None,
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreshnessConfig {
    pub max_age_minutes: u64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        FreshnessConfig { max_age_minutes: DEFAULT_MAX_AGE_MINUTES }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Config::from_toml_str(&content)
    }

    /// Locates the config file for this process. Returns the config and the
    /// path it came from, or defaults with `None` when no file is present.
    ///
    /// A path named by `GANGAGUARD_CONFIG` must exist.
    pub fn discover() -> Result<(Config, Option<PathBuf>), ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            return Config::load(&path).map(|c| (c, Some(path)));
        }
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Config::load(&default_path).map(|c| (c, Some(default_path)));
        }
        Ok((Config::default(), None))
    }

    // -----------------------------------------------------------------------
    // Resolved tables
    // -----------------------------------------------------------------------

    pub fn band_multipliers(&self) -> BandMultipliers {
        let base = BandMultipliers::STANDARD;
        BandMultipliers {
            good: self.bands.good.map(Band::from).unwrap_or(base.good),
            moderate: self.bands.moderate.map(Band::from).unwrap_or(base.moderate),
            poor: self.bands.poor.map(Band::from).unwrap_or(base.poor),
        }
    }

    pub fn status_scores(&self) -> StatusScores {
        let base = StatusScores::STANDARD;
        StatusScores {
            optimal: self.scores.optimal.unwrap_or(base.optimal),
            good: self.scores.good.unwrap_or(base.good),
            moderate: self.scores.moderate.unwrap_or(base.moderate),
            poor: self.scores.poor.unwrap_or(base.poor),
            critical: self.scores.critical.unwrap_or(base.critical),
        }
    }

    /// Builds a classifier from the built-in tables plus any overrides.
    ///
    /// Assumes the config has been validated; unknown parameter keys are
    /// skipped.
    pub fn classifier(&self) -> Classifier {
        let standards = WATER_QUALITY_STANDARDS
            .iter()
            .map(|s| {
                let mut s = *s;
                if let Some(o) = self.standards.get(s.parameter.key()) {
                    s.min = o.min;
                    s.max = o.max;
                }
                s
            })
            .collect();
        Classifier::new(standards, self.band_multipliers(), self.status_scores())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, o) in &self.standards {
            if Parameter::from_key(key).is_none() {
                return Err(ConfigError::UnknownParameter(key.clone()));
            }
            let invalid = |reason: &str| ConfigError::InvalidStandard {
                parameter: key.clone(),
                reason: reason.to_string(),
            };
            if !o.min.is_finite() || !o.max.is_finite() {
                return Err(invalid("bounds must be finite"));
            }
            if o.min < 0.0 {
                // a negative floor would narrow the lower band edges
                return Err(invalid("min must be non-negative"));
            }
            if o.min > o.max {
                return Err(invalid("min exceeds max"));
            }
        }

        let bands = self.band_multipliers();
        let ordered = [
            ("optimal", Band { lower: 1.0, upper: 1.0 }),
            ("good", bands.good),
            ("moderate", bands.moderate),
            ("poor", bands.poor),
        ];
        for pair in ordered.windows(2) {
            let ((inner_name, inner), (name, band)) = (pair[0], pair[1]);
            if !band.lower.is_finite() || !band.upper.is_finite() || band.lower < 0.0 {
                return Err(ConfigError::InvalidBands(format!(
                    "{} multipliers must be finite and non-negative",
                    name
                )));
            }
            if band.lower > inner.lower || band.upper < inner.upper {
                return Err(ConfigError::InvalidBands(format!(
                    "{} band must be at least as wide as {}",
                    name, inner_name
                )));
            }
        }

        let s = self.status_scores();
        let scores = [s.optimal, s.good, s.moderate, s.poor, s.critical];
        if scores.iter().any(|&v| v > 100) {
            return Err(ConfigError::InvalidScores("scores must lie in 0..=100".to_string()));
        }
        if scores.windows(2).any(|w| w[0] < w[1]) {
            return Err(ConfigError::InvalidScores(
                "scores must not increase with severity".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn test_empty_config_reproduces_defaults() {
        let config = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(config.classifier(), Classifier::default());
        assert_eq!(config.freshness.max_age_minutes, DEFAULT_MAX_AGE_MINUTES);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let toml_str = r#"
            [standards.coliform]
            min = 0
            max = 1000

            [bands]
            good = { lower = 0.9, upper = 1.1 }

            [scores]
            critical = 0

            [logging]
            level = "debug"
            file = "/tmp/gangaguard.log"
            timestamps = true

            [freshness]
            max_age_minutes = 60
        "#;
        let config = Config::from_toml_str(toml_str).expect("config should parse");
        let classifier = config.classifier();

        assert_eq!(classifier.classify(Parameter::Coliform, 900.0), Status::Optimal);
        assert_eq!(classifier.bands().good, Band { lower: 0.9, upper: 1.1 });
        assert_eq!(classifier.bands().poor, BandMultipliers::STANDARD.poor);
        assert_eq!(classifier.scores().critical, 0);
        assert_eq!(classifier.scores().optimal, 100);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.timestamps);
        assert_eq!(config.freshness.max_age_minutes, 60);
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let result = Config::from_toml_str("[standards.salinity]\nmin = 0\nmax = 1\n");
        assert_eq!(result.unwrap_err(), ConfigError::UnknownParameter("salinity".to_string()));
    }

    #[test]
    fn test_inverted_standard_is_rejected() {
        let result = Config::from_toml_str("[standards.pH]\nmin = 9\nmax = 6\n");
        assert!(matches!(result, Err(ConfigError::InvalidStandard { .. })));
    }

    #[test]
    fn test_negative_standard_min_is_rejected() {
        let result = Config::from_toml_str("[standards.temperature]\nmin = -10\nmax = 30\n");
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidStandard {
                parameter: "temperature".to_string(),
                reason: "min must be non-negative".to_string(),
            }
        );

        // a zero floor is still accepted
        let config = Config::from_toml_str("[standards.temperature]\nmin = 0\nmax = 30\n")
            .expect("zero min is valid");
        assert_eq!(config.classifier().classify(Parameter::Temperature, 0.0), Status::Optimal);
    }

    #[test]
    fn test_narrowing_bands_are_rejected() {
        // moderate narrower than the default good band
        let result = Config::from_toml_str("[bands]\nmoderate = { lower = 0.9, upper = 1.1 }\n");
        assert!(matches!(result, Err(ConfigError::InvalidBands(_))));

        let result = Config::from_toml_str("[bands]\ngood = { lower = 1.1, upper = 1.2 }\n");
        assert!(matches!(result, Err(ConfigError::InvalidBands(_))));
    }

    #[test]
    fn test_scores_must_not_increase_with_severity() {
        let result = Config::from_toml_str("[scores]\npoor = 70\n");
        assert!(matches!(result, Err(ConfigError::InvalidScores(_))));

        let result = Config::from_toml_str("[scores]\noptimal = 120\n");
        assert!(matches!(result, Err(ConfigError::InvalidScores(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        assert!(matches!(Config::from_toml_str("[bands"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            Config::from_toml_str("[freshness]\nmax_age = 5\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = Config::from_toml_str(include_str!("../gangaguard.example.toml"))
            .expect("example config should validate");
        assert_eq!(config.classifier(), Classifier::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/gangaguard.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
