//! Classifier Integration Tests
//!
//! Exercise the public classification API the way report consumers use it:
//! by parameter key, by typed parameter, and through a config-built
//! classifier.

use chrono::{TimeZone, Utc};
use gangaguard::config::Config;
use gangaguard::standards::WATER_QUALITY_STANDARDS;
use gangaguard::{Classifier, Parameter, Status, WaterQualityReading, aggregate_score, classify_parameter};

fn reading_with(values: [f64; 7]) -> WaterQualityReading {
    WaterQualityReading {
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
        dissolved_oxygen: values[0],
        bod: values[1],
        nitrate: values[2],
        coliform: values[3],
        ph: values[4],
        temperature: values[5],
        turbidity: values[6],
    }
}

#[test]
fn test_every_bound_is_optimal_by_key() {
    for s in WATER_QUALITY_STANDARDS {
        let key = s.parameter.key();
        assert_eq!(classify_parameter(key, s.min), Status::Optimal, "{} at min", key);
        assert_eq!(classify_parameter(key, s.max), Status::Optimal, "{} at max", key);
    }
}

#[test]
fn test_statuses_never_improve_moving_away_from_the_range() {
    // Monotonic widening: stepping further above max can only keep or
    // worsen the status.
    for s in WATER_QUALITY_STANDARDS {
        let key = s.parameter.key();
        let mut previous = Status::Optimal;
        for step in 0..=60 {
            let value = s.max + s.max * 0.05 * step as f64;
            let status = classify_parameter(key, value);
            assert!(status >= previous, "{} improved from {} to {} at {}", key, previous, status, value);
            previous = status;
        }
        assert_eq!(previous, Status::Critical);
    }
}

#[test]
fn test_unregistered_names_fall_back_to_moderate() {
    for name in ["salinity", "Ph", "dissolved_oxygen", "chlorophyll"] {
        assert_eq!(classify_parameter(name, 7.0), Status::Moderate, "'{}'", name);
    }
}

#[test]
fn test_aggregate_of_all_min_and_all_max_is_100() {
    let mins: Vec<f64> = WATER_QUALITY_STANDARDS.iter().map(|s| s.min).collect();
    let maxs: Vec<f64> = WATER_QUALITY_STANDARDS.iter().map(|s| s.max).collect();
    let to_array = |v: &[f64]| -> [f64; 7] { v.try_into().expect("seven standards") };
    assert_eq!(aggregate_score(&reading_with(to_array(&mins))), 100);
    assert_eq!(aggregate_score(&reading_with(to_array(&maxs))), 100);
}

#[test]
fn test_aggregate_is_rounded_unweighted_mean() {
    // One good parameter among six optimal: 680 / 7 = 97.14 -> 97,
    // wherever the good value sits.
    let base = [7.0, 1.0, 5.0, 100.0, 7.5, 20.0, 1.0];
    let good_values = [5.0, 3.5, 11.0, 550.0, 9.5, 33.0, 5.5];
    for (i, good) in good_values.into_iter().enumerate() {
        let mut values = base;
        values[i] = good;
        let r = reading_with(values);
        assert_eq!(
            classify_parameter(Parameter::ALL[i].key(), good),
            Status::Good,
            "{} should be good at {}",
            Parameter::ALL[i],
            good
        );
        assert_eq!(aggregate_score(&r), 97);
    }
}

#[test]
fn test_config_overrides_flow_into_the_classifier() {
    let config = Config::from_toml_str(
        r#"
        [standards.coliform]
        min = 0
        max = 2500

        [scores]
        critical = 0
        "#,
    )
    .expect("valid config");
    let classifier = config.classifier();

    assert_eq!(classifier.classify(Parameter::Coliform, 2000.0), Status::Optimal);
    assert_eq!(Classifier::default().classify(Parameter::Coliform, 2000.0), Status::Critical);

    let r = reading_with([7.0, 1.0, 5.0, 2000.0, 7.5, 20.0, 100.0]);
    // Turbidity 100 is critical and now scores 0: 600 / 7 = 85.71 -> 86
    assert_eq!(classifier.aggregate_score(&r), 86);
}
