/// Classification and data organization for the water-quality service.
///
/// Submodules:
/// - `classify`  — per-parameter status bands and the aggregate 0–100 score.
/// - `groupings` — organizes flat ingest output into per-location structures
///   and summarizes a series of readings.

pub mod classify;
pub mod groupings;
