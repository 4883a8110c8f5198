//! Per-location organization of readings.
//!
//! Ingest produces a flat list of `LocatedReading`s. The helpers here group
//! them by location and reduce a series to the figures shown per location:
//! the headline status, the latest reading, a mean, and a trend.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::analysis::classify::Classifier;
use crate::model::{LocatedReading, Parameter, Status, WaterQualityReading};

/// Parameters that decide a location's headline status.
pub const HEADLINE_PARAMETERS: [Parameter; 4] = [
    Parameter::DissolvedOxygen,
    Parameter::Bod,
    Parameter::Nitrate,
    Parameter::Coliform,
];

/// Worst status among the headline parameters of a reading.
pub fn location_status(reading: &WaterQualityReading, classifier: &Classifier) -> Status {
    HEADLINE_PARAMETERS
        .iter()
        .map(|&p| classifier.classify(p, reading.value(p)))
        .max()
        .unwrap_or(Status::Optimal)
}

/// Groups readings by location id. Groups are ordered by id; readings keep
/// their input order within a group.
pub fn group_by_location(readings: &[LocatedReading]) -> BTreeMap<&str, Vec<&WaterQualityReading>> {
    let mut groups: BTreeMap<&str, Vec<&WaterQualityReading>> = BTreeMap::new();
    for r in readings {
        groups.entry(r.location.as_str()).or_default().push(&r.reading);
    }
    groups
}

/// The reading with the greatest timestamp. Ties go to the later element.
pub fn latest<'a, I>(readings: I) -> Option<&'a WaterQualityReading>
where
    I: IntoIterator<Item = &'a WaterQualityReading>,
{
    readings.into_iter().max_by_key(|r| r.timestamp)
}

/// Arithmetic mean of one parameter across a series.
pub fn parameter_mean<'a, I>(readings: I, parameter: Parameter) -> Option<f64>
where
    I: IntoIterator<Item = &'a WaterQualityReading>,
{
    let (sum, count) = readings
        .into_iter()
        .fold((0.0, 0usize), |(s, c), r| (s + r.value(parameter), c + 1));
    if count == 0 { None } else { Some(sum / count as f64) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Rising,
    Declining,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Rising => write!(f, "Rising"),
            Trend::Declining => write!(f, "Declining"),
        }
    }
}

/// `Rising` only when the forecast value is strictly above the latest one.
pub fn trend(latest: f64, forecast: f64) -> Trend {
    if forecast > latest { Trend::Rising } else { Trend::Declining }
}
