/// Reading batch loader
///
/// Reads batches of water-quality samples exported by field stations or
/// lab systems. A batch is a JSON array of objects, one per sample:
///
/// ```json
/// [
///   {
///     "location": "varanasi",
///     "timestamp": "2024-05-01T06:00:00+05:30",
///     "dissolvedOxygen": 6.8, "bod": 4.2, "nitrate": 8.7,
///     "coliform": 890, "pH": 7.3, "temperature": 26.7, "turbidity": 3.5
///   }
/// ]
/// ```
///
/// Every sample must name a location from `stations::LOCATION_REGISTRY`.

use std::fs;
use std::path::Path;

use crate::model::{IngestError, LocatedReading};
use crate::stations::find_location;

/// Parses a JSON batch and checks every location id against the registry.
pub fn parse_readings(json: &str) -> Result<Vec<LocatedReading>, IngestError> {
    let readings: Vec<LocatedReading> =
        serde_json::from_str(json).map_err(|e| IngestError::Parse(e.to_string()))?;

    if let Some(unknown) = readings.iter().find(|r| find_location(&r.location).is_none()) {
        return Err(IngestError::UnknownLocation(unknown.location.clone()));
    }

    Ok(readings)
}

/// Reads and parses a batch file.
pub fn load_readings(path: impl AsRef<Path>) -> Result<Vec<LocatedReading>, IngestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| IngestError::Io(format!("{}: {}", path.display(), e)))?;
    parse_readings(&content)
}
