/// Monitoring location registry for the GangaGuard service.
///
/// Defines the canonical list of river monitoring locations along the
/// Ganga, along with their metadata. This is the single source of truth for
/// location ids — ingest rejects readings for any id not listed here.

// ---------------------------------------------------------------------------
// Location metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitoring location.
pub struct Location {
    /// Lowercase slug used in reading batches, e.g. `"varanasi"`.
    pub id: &'static str,
    /// City name.
    pub name: &'static str,
    /// Indian state the location lies in.
    pub state: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Why this point is monitored.
    pub description: &'static str,
}

/// All monitored locations, in display order.
pub static LOCATION_REGISTRY: &[Location] = &[
    Location {
        id: "varanasi",
        name: "Varanasi",
        state: "Uttar Pradesh",
        latitude: 25.3176,
        longitude: 82.9739,
        description: "Holy city on the banks of Ganga, major monitoring point",
    },
    Location {
        id: "haridwar",
        name: "Haridwar",
        state: "Uttarakhand",
        latitude: 29.9457,
        longitude: 78.1642,
        description: "Sacred city where Ganga enters the plains",
    },
    Location {
        id: "kanpur",
        name: "Kanpur",
        state: "Uttar Pradesh",
        latitude: 26.4499,
        longitude: 80.3319,
        description: "Industrial city, critical pollution monitoring site",
    },
    Location {
        id: "patna",
        name: "Patna",
        state: "Bihar",
        latitude: 25.5941,
        longitude: 85.1376,
        description: "Capital city monitoring agricultural runoff effects",
    },
];

/// Returns the ids of all monitored locations in display order.
pub fn all_location_ids() -> Vec<&'static str> {
    LOCATION_REGISTRY.iter().map(|l| l.id).collect()
}

/// Looks up a location by id. Returns `None` if not found.
pub fn find_location(id: &str) -> Option<&'static Location> {
    LOCATION_REGISTRY.iter().find(|l| l.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_ids_are_lowercase_slugs() {
        for location in LOCATION_REGISTRY {
            assert!(
                !location.id.is_empty()
                    && location.id.chars().all(|c| c.is_ascii_lowercase()),
                "id for '{}' should be a lowercase slug, got '{}'",
                location.name,
                location.id
            );
        }
    }

    #[test]
    fn test_no_duplicate_location_ids() {
        let mut seen = std::collections::HashSet::new();
        for location in LOCATION_REGISTRY {
            assert!(
                seen.insert(location.id),
                "duplicate location id '{}' found in LOCATION_REGISTRY",
                location.id
            );
        }
    }

    #[test]
    fn test_registry_contains_all_expected_locations() {
        assert_eq!(all_location_ids(), vec!["varanasi", "haridwar", "kanpur", "patna"]);
    }

    #[test]
    fn test_coordinates_lie_in_the_ganga_basin() {
        for location in LOCATION_REGISTRY {
            assert!(
                (24.0..31.0).contains(&location.latitude),
                "latitude out of basin for '{}'",
                location.name
            );
            assert!(
                (77.0..89.0).contains(&location.longitude),
                "longitude out of basin for '{}'",
                location.name
            );
        }
    }

    #[test]
    fn test_find_location() {
        let kanpur = find_location("kanpur").expect("Kanpur should be in registry");
        assert_eq!(kanpur.state, "Uttar Pradesh");
        assert!(find_location("Kanpur").is_none());
        assert!(find_location("delhi").is_none());
    }
}
