//! Water-quality threshold alerts.
//!
//! A parameter raises an alert once its classification reaches `poor`.
//! Anything better is reported through the status alone.

use serde::Serialize;

use crate::analysis::classify::Classifier;
use crate::model::{Parameter, Status, WaterQualityReading};

/// Alert severity levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// An alert raised when a reading leaves the acceptable range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAlert {
    pub severity: AlertSeverity,
    pub location: String,
    pub parameter: Parameter,
    pub value: f64,
    /// The standard bound that was crossed.
    pub threshold: f64,
    pub message: String,
}

fn severity_for(status: Status) -> Option<AlertSeverity> {
    match status {
        Status::Critical => Some(AlertSeverity::Critical),
        Status::Poor => Some(AlertSeverity::Warning),
        Status::Optimal | Status::Good | Status::Moderate => None,
    }
}

/// Checks one parameter value and returns an alert if it is poor or worse.
///
/// Returns `None` for better statuses and for parameters without a
/// standard in `classifier`.
pub fn check_parameter(
    location: &str,
    parameter: Parameter,
    value: f64,
    classifier: &Classifier,
) -> Option<QualityAlert> {
    let standard = classifier.standard(parameter)?;
    let severity = severity_for(classifier.classify(parameter, value))?;

    let (threshold, direction) = if value > standard.max {
        (standard.max, "Elevated")
    } else {
        (standard.min, "Depleted")
    };
    let message = match severity {
        AlertSeverity::Critical => format!("{} at critical level", parameter.display_name()),
        _ => format!("{} {} levels detected", direction, parameter.display_name()),
    };

    Some(QualityAlert {
        severity,
        location: location.to_string(),
        parameter,
        value,
        threshold,
        message,
    })
}

/// Checks every parameter of a reading. Critical alerts come first; within
/// a severity, parameters keep reporting order.
pub fn check_reading(
    location: &str,
    reading: &WaterQualityReading,
    classifier: &Classifier,
) -> Vec<QualityAlert> {
    let mut alerts: Vec<QualityAlert> = reading
        .values()
        .filter_map(|(p, v)| check_parameter(location, p, v, classifier))
        .collect();
    // stable sort keeps parameter order within a severity
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}
