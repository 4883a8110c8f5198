//! Water-quality report
//!
//! Reduces a batch of located readings to one serializable report: a
//! section per monitored location (latest status, score, per-parameter
//! detail, alerts, freshness) and a summary across all locations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alert::stalenesses::is_stale_at;
use crate::alert::thresholds::{AlertSeverity, QualityAlert, check_reading};
use crate::analysis::classify::Classifier;
use crate::analysis::groupings::{Trend, group_by_location, latest, location_status, parameter_mean, trend};
use crate::logging::{self, Component};
use crate::model::{LocatedReading, Parameter, Status, WaterQualityReading};
use crate::stations::{LOCATION_REGISTRY, find_location};

// ============================================================================
// Report types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub generated_at: String,
    pub locations: Vec<LocationReport>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationReport {
    pub location_id: String,
    pub name: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub reading_count: usize,
    pub latest_timestamp: DateTime<Utc>,
    /// Worst status among the headline parameters of the latest reading.
    pub status: Status,
    /// Aggregate 0–100 score of the latest reading.
    pub score: u8,
    pub stale: bool,
    pub parameters: Vec<ParameterReport>,
    pub alerts: Vec<QualityAlert>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterReport {
    pub parameter: Parameter,
    pub value: f64,
    pub unit: String,
    pub ideal: String,
    pub status: Status,
    /// Mean over every reading for the location in this batch.
    pub mean: f64,
    /// Direction from the earliest to the latest reading; `None` with a
    /// single reading.
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub optimal: usize,
    pub good: usize,
    pub moderate: usize,
    pub poor: usize,
    pub critical: usize,
}

impl StatusCounts {
    fn add(&mut self, status: Status) {
        match status {
            Status::Optimal => self.optimal += 1,
            Status::Good => self.good += 1,
            Status::Moderate => self.moderate += 1,
            Status::Poor => self.poor += 1,
            Status::Critical => self.critical += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub locations_total: usize,
    pub locations_reported: usize,
    pub locations_missing: Vec<String>,
    pub location_statuses: StatusCounts,
    pub critical_alerts: usize,
    pub warning_alerts: usize,
    pub stale_locations: usize,
    /// Mean of the location scores, `None` if nothing was reported.
    pub mean_score: Option<f64>,
}

// ============================================================================
// Report builder
// ============================================================================

fn build_location_report(
    location_id: &str,
    series: &[&WaterQualityReading],
    classifier: &Classifier,
    max_age_minutes: u64,
    now: DateTime<Utc>,
) -> Option<LocationReport> {
    let station = find_location(location_id)?;
    let newest = latest(series.iter().copied())?;
    let oldest = series.iter().copied().min_by_key(|r| r.timestamp)?;

    let parameters = classifier
        .classify_reading(newest)
        .into_iter()
        .map(|ps| {
            let (unit, ideal) = classifier
                .standard(ps.parameter)
                .map(|s| (s.unit.to_string(), s.ideal()))
                .unwrap_or_default();
            ParameterReport {
                parameter: ps.parameter,
                value: ps.value,
                unit,
                ideal,
                status: ps.status,
                mean: parameter_mean(series.iter().copied(), ps.parameter).unwrap_or(ps.value),
                trend: (series.len() > 1)
                    .then(|| trend(oldest.value(ps.parameter), ps.value)),
            }
        })
        .collect();

    let stale = is_stale_at(newest, max_age_minutes, now);
    if stale {
        logging::warn(
            Component::Report,
            Some(location_id),
            &format!("latest reading from {} is older than {} minutes", newest.timestamp, max_age_minutes),
        );
    }

    let alerts = check_reading(location_id, newest, classifier);
    for alert in &alerts {
        let line = format!("{} ({} vs threshold {})", alert.message, alert.value, alert.threshold);
        match alert.severity {
            AlertSeverity::Critical => logging::error(Component::Alert, Some(location_id), &line),
            AlertSeverity::Warning => logging::warn(Component::Alert, Some(location_id), &line),
        }
    }

    Some(LocationReport {
        location_id: station.id.to_string(),
        name: station.name.to_string(),
        state: station.state.to_string(),
        latitude: station.latitude,
        longitude: station.longitude,
        description: station.description.to_string(),
        reading_count: series.len(),
        latest_timestamp: newest.timestamp,
        status: location_status(newest, classifier),
        score: classifier.aggregate_score(newest),
        stale,
        parameters,
        alerts,
    })
}

/// Builds the report for a batch. Locations appear in registry order;
/// readings for unregistered locations are skipped.
pub fn build_report(
    readings: &[LocatedReading],
    classifier: &Classifier,
    max_age_minutes: u64,
    now: DateTime<Utc>,
) -> QualityReport {
    let groups = group_by_location(readings);

    for &id in groups.keys() {
        if find_location(id).is_none() {
            logging::warn(Component::Report, Some(id), "skipping readings for unregistered location");
        }
    }

    let mut locations = Vec::new();
    let mut missing = Vec::new();
    for station in LOCATION_REGISTRY {
        let report = groups.get(station.id).and_then(|series| {
            build_location_report(station.id, series, classifier, max_age_minutes, now)
        });
        match report {
            Some(r) => locations.push(r),
            None => missing.push(station.id.to_string()),
        }
    }

    let mut location_statuses = StatusCounts::default();
    let mut critical_alerts = 0;
    let mut warning_alerts = 0;
    for l in &locations {
        location_statuses.add(l.status);
        for a in &l.alerts {
            match a.severity {
                AlertSeverity::Critical => critical_alerts += 1,
                AlertSeverity::Warning => warning_alerts += 1,
            }
        }
    }
    let mean_score = if locations.is_empty() {
        None
    } else {
        Some(locations.iter().map(|l| l.score as f64).sum::<f64>() / locations.len() as f64)
    };

    let summary = ReportSummary {
        locations_total: LOCATION_REGISTRY.len(),
        locations_reported: locations.len(),
        locations_missing: missing,
        location_statuses,
        critical_alerts,
        warning_alerts,
        stale_locations: locations.iter().filter(|l| l.stale).count(),
        mean_score,
    };

    logging::log_coverage_summary(summary.locations_total, summary.locations_reported, critical_alerts);

    QualityReport {
        generated_at: now.to_rfc3339(),
        locations,
        summary,
    }
}
