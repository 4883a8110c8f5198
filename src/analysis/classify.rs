//! Water-quality classification and scoring.
//!
//! A parameter value is classified against its standard `[min, max]` by
//! testing progressively wider bands:
//!
//!   optimal   [min,       max      ]
//!   good      [0.8 * min, 1.2 * max]
//!   moderate  [0.6 * min, 1.5 * max]
//!   poor      [0.4 * min, 2.0 * max]
//!   critical  everything else
//!
//! The first band containing the value wins. For parameters whose `min` is
//! zero the lower edges collapse to zero, so only the upper bound matters
//! for low values. Non-finite values fail every band and come out critical.
//!
//! The free functions use the built-in tables. `Classifier` carries the
//! same algorithm over tables that can be overridden from config.

use serde::Serialize;

use crate::model::{Parameter, Standard, Status, WaterQualityReading};
use crate::standards::{WATER_QUALITY_STANDARDS, find_standard, find_standard_by_name};

// ---------------------------------------------------------------------------
// Bands and scores
// ---------------------------------------------------------------------------

/// Multipliers applied to `min` and `max` to widen one band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

/// The three widening bands tested after the optimal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandMultipliers {
    pub good: Band,
    pub moderate: Band,
    pub poor: Band,
}

impl BandMultipliers {
    pub const STANDARD: BandMultipliers = BandMultipliers {
        good: Band { lower: 0.8, upper: 1.2 },
        moderate: Band { lower: 0.6, upper: 1.5 },
        poor: Band { lower: 0.4, upper: 2.0 },
    };
}

impl Default for BandMultipliers {
    fn default() -> Self {
        BandMultipliers::STANDARD
    }
}

/// Score awarded to each status when computing the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusScores {
    pub optimal: u8,
    pub good: u8,
    pub moderate: u8,
    pub poor: u8,
    pub critical: u8,
}

impl StatusScores {
    pub const STANDARD: StatusScores = StatusScores {
        optimal: 100,
        good: 80,
        moderate: 60,
        poor: 40,
        critical: 20,
    };

    pub fn score(&self, status: Status) -> u8 {
        match status {
            Status::Optimal => self.optimal,
            Status::Good => self.good,
            Status::Moderate => self.moderate,
            Status::Poor => self.poor,
            Status::Critical => self.critical,
        }
    }
}

impl Default for StatusScores {
    fn default() -> Self {
        StatusScores::STANDARD
    }
}

// ---------------------------------------------------------------------------
// Core band test
// ---------------------------------------------------------------------------

/// Classifies `value` against one standard using the given bands.
pub fn classify_against(standard: &Standard, value: f64, bands: &BandMultipliers) -> Status {
    let (min, max) = (standard.min, standard.max);
    let within = |band: Band| value >= min * band.lower && value <= max * band.upper;

    if value >= min && value <= max {
        Status::Optimal
    } else if within(bands.good) {
        Status::Good
    } else if within(bands.moderate) {
        Status::Moderate
    } else if within(bands.poor) {
        Status::Poor
    } else {
        Status::Critical
    }
}

/// Rounded mean of a set of scores, halves rounding up. Returns 0 for an
/// empty set.
fn mean_score(scores: impl Iterator<Item = u8>) -> u8 {
    let (total, count) = scores.fold((0u32, 0u32), |(t, c), s| (t + s as u32, c + 1));
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64 + 0.5).floor() as u8
}

// ---------------------------------------------------------------------------
// Built-in classification
// ---------------------------------------------------------------------------

/// Classifies a value for the parameter named `parameter` (camelCase key).
///
/// Unregistered names classify as `Moderate` rather than failing.
pub fn classify_parameter(parameter: &str, value: f64) -> Status {
    match find_standard_by_name(parameter) {
        Some(standard) => classify_against(standard, value, &BandMultipliers::STANDARD),
        None => Status::Moderate,
    }
}

/// Typed form of `classify_parameter`.
pub fn classify(parameter: Parameter, value: f64) -> Status {
    match find_standard(parameter) {
        Some(standard) => classify_against(standard, value, &BandMultipliers::STANDARD),
        None => Status::Moderate,
    }
}

/// Unweighted mean of the seven per-parameter scores, rounded to 0..=100.
pub fn aggregate_score(reading: &WaterQualityReading) -> u8 {
    mean_score(
        reading
            .values()
            .map(|(p, v)| StatusScores::STANDARD.score(classify(p, v))),
    )
}

// ---------------------------------------------------------------------------
// Configurable classifier
// ---------------------------------------------------------------------------

/// Status of one parameter within a reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterStatus {
    pub parameter: Parameter,
    pub value: f64,
    pub status: Status,
}

/// The classification algorithm bound to a particular set of tables.
///
/// `Classifier::default()` behaves exactly like the free functions in this
/// module. Build one from `config::Config` to apply deployment overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    standards: Vec<Standard>,
    bands: BandMultipliers,
    scores: StatusScores,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            standards: WATER_QUALITY_STANDARDS.to_vec(),
            bands: BandMultipliers::STANDARD,
            scores: StatusScores::STANDARD,
        }
    }
}

impl Classifier {
    pub fn new(standards: Vec<Standard>, bands: BandMultipliers, scores: StatusScores) -> Self {
        Classifier { standards, bands, scores }
    }

    pub fn standard(&self, parameter: Parameter) -> Option<&Standard> {
        self.standards.iter().find(|s| s.parameter == parameter)
    }

    pub fn standards(&self) -> &[Standard] {
        &self.standards
    }

    pub fn bands(&self) -> &BandMultipliers {
        &self.bands
    }

    pub fn scores(&self) -> &StatusScores {
        &self.scores
    }

    pub fn classify(&self, parameter: Parameter, value: f64) -> Status {
        match self.standard(parameter) {
            Some(standard) => classify_against(standard, value, &self.bands),
            None => Status::Moderate,
        }
    }

    pub fn classify_parameter(&self, parameter: &str, value: f64) -> Status {
        match Parameter::from_key(parameter) {
            Some(p) => self.classify(p, value),
            None => Status::Moderate,
        }
    }

    /// Classifies all seven parameters of a reading, in reporting order.
    pub fn classify_reading(&self, reading: &WaterQualityReading) -> Vec<ParameterStatus> {
        reading
            .values()
            .map(|(parameter, value)| ParameterStatus {
                parameter,
                value,
                status: self.classify(parameter, value),
            })
            .collect()
    }

    pub fn aggregate_score(&self, reading: &WaterQualityReading) -> u8 {
        mean_score(
            reading
                .values()
                .map(|(p, v)| self.scores.score(self.classify(p, v))),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
