/// Reading staleness detection.
///
/// A location whose latest reading is old may be offline, and its status
/// should not be trusted at face value. The report flags such locations
/// instead of silently presenting old figures as current.
///
/// # Clock injection
/// All functions accept a `now: DateTime<Utc>` parameter rather than calling
/// `Utc::now()` internally. This makes staleness purely deterministic in
/// tests without mocking or time manipulation.

use chrono::{DateTime, Utc};

use crate::model::WaterQualityReading;

// ---------------------------------------------------------------------------
// Staleness check
// ---------------------------------------------------------------------------

/// Whole minutes elapsed between the reading and `now`. Negative when the
/// reading is timestamped in the future.
pub fn age_minutes_at(reading: &WaterQualityReading, now: DateTime<Utc>) -> i64 {
    (now - reading.timestamp).num_minutes()
}

/// Returns `true` if the reading is older than `max_age_minutes` relative
/// to `now`.
///
/// Staleness is defined as strictly greater than the threshold:
///   age > max_age_minutes  →  stale
///   age == max_age_minutes →  not stale
///
/// Readings timestamped in the future are never stale.
pub fn is_stale_at(reading: &WaterQualityReading, max_age_minutes: u64, now: DateTime<Utc>) -> bool {
    let age = age_minutes_at(reading, now);
    age > 0 && age as u64 > max_age_minutes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
