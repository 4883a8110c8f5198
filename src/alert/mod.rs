/// Alerting on classified readings.
///
/// Submodules:
/// - `thresholds`  — alerts for parameters classified poor or critical.
/// - `stalenesses` — flags readings too old to trust.

pub mod stalenesses;
pub mod thresholds;
