/// Reading ingestion.
///
/// Submodules:
/// - `readings` — loads JSON batches of located water-quality samples.

pub mod readings;
