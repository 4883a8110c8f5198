/// Water-quality standards registry.
///
/// Defines the acceptable range and unit for each tracked parameter. This is
/// the single source of truth for the built-in bounds; `config` may override
/// them per deployment but never mutates this table.

use crate::model::{Parameter, Standard};

/// Built-in standards, one per parameter, in reporting order.
pub static WATER_QUALITY_STANDARDS: &[Standard] = &[
    Standard { parameter: Parameter::DissolvedOxygen, min: 6.0, max: 8.0, unit: "mg/L" },
    Standard { parameter: Parameter::Bod, min: 0.0, max: 3.0, unit: "mg/L" },
    Standard { parameter: Parameter::Nitrate, min: 0.0, max: 10.0, unit: "mg/L" },
    Standard { parameter: Parameter::Coliform, min: 0.0, max: 500.0, unit: "MPN/100ml" },
    Standard { parameter: Parameter::Ph, min: 6.5, max: 8.5, unit: "pH" },
    Standard { parameter: Parameter::Temperature, min: 15.0, max: 30.0, unit: "°C" },
    Standard { parameter: Parameter::Turbidity, min: 0.0, max: 5.0, unit: "NTU" },
];

/// Looks up the built-in standard for a parameter.
pub fn find_standard(parameter: Parameter) -> Option<&'static Standard> {
    WATER_QUALITY_STANDARDS.iter().find(|s| s.parameter == parameter)
}

/// Looks up a standard by camelCase parameter key. Returns `None` for
/// unregistered names.
pub fn find_standard_by_name(name: &str) -> Option<&'static Standard> {
    Parameter::from_key(name).and_then(find_standard)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parameter_has_exactly_one_standard() {
        for parameter in Parameter::ALL {
            let count = WATER_QUALITY_STANDARDS
                .iter()
                .filter(|s| s.parameter == parameter)
                .count();
            assert_eq!(count, 1, "expected one standard for '{}', got {}", parameter, count);
        }
        assert_eq!(WATER_QUALITY_STANDARDS.len(), Parameter::ALL.len());
    }

    #[test]
    fn test_bounds_are_ordered_and_non_negative() {
        for s in WATER_QUALITY_STANDARDS {
            assert!(s.min <= s.max, "min must not exceed max for '{}'", s.parameter);
            assert!(s.min >= 0.0, "min should be non-negative for '{}'", s.parameter);
        }
    }

    #[test]
    fn test_zero_floor_parameters() {
        // Only the upper bound discriminates for these.
        for p in [Parameter::Bod, Parameter::Nitrate, Parameter::Coliform, Parameter::Turbidity] {
            assert_eq!(find_standard(p).map(|s| s.min), Some(0.0), "'{}' should have min 0", p);
        }
    }

    #[test]
    fn test_find_standard_by_name() {
        let s = find_standard_by_name("dissolvedOxygen").expect("DO should be registered");
        assert_eq!((s.min, s.max, s.unit), (6.0, 8.0, "mg/L"));
        assert_eq!(find_standard_by_name("coliform").map(|s| s.ideal()), Some("0-500".to_string()));
        assert!(find_standard_by_name("salinity").is_none());
        assert!(find_standard_by_name("").is_none());
    }
}
