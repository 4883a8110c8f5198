//! GangaGuard water-quality service.
//!
//! Classifies river water-quality readings from the Ganga monitoring
//! locations against per-parameter standards and reduces them to statuses,
//! 0–100 quality scores, alerts and a per-location report.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
pub mod standards;
pub mod stations;

pub use analysis::classify::{Classifier, aggregate_score, classify, classify_parameter};
pub use model::{LocatedReading, Parameter, Standard, Status, WaterQualityReading};
