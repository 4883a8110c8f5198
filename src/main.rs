/// GangaGuard command-line entry point.
///
/// Usage: gangaguard <readings.json>
///
/// Loads `.env`, resolves the config file, classifies the batch and writes
/// the JSON report to stdout. Logs go to stderr and, if configured, a file.

use std::error::Error;
use std::process::ExitCode;

use chrono::Utc;

use gangaguard::config::Config;
use gangaguard::ingest::readings::load_readings;
use gangaguard::logging::{self, Component};
use gangaguard::report::build_report;

fn run() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: gangaguard <readings.json>")?;

    let (config, config_path) = Config::discover()?;
    logging::init_logger(
        config.logging.level,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );
    match &config_path {
        Some(p) => logging::info(Component::Config, None, &format!("Loaded config from {}", p.display())),
        None => logging::debug(Component::Config, None, "No config file found, using built-in standards"),
    }

    let readings = load_readings(&path).map_err(|e| {
        logging::log_ingest_failure(&path, "load readings", &e);
        e
    })?;
    logging::info(
        Component::Ingest,
        None,
        &format!("Loaded {} readings from {}", readings.len(), path),
    );

    let classifier = config.classifier();
    for s in classifier.standards() {
        logging::debug(
            Component::Classifier,
            None,
            &format!("{} ideal {} {}", s.parameter, s.ideal(), s.unit),
        );
    }
    let report = build_report(&readings, &classifier, config.freshness.max_age_minutes, Utc::now());

    println!("{}", serde_json::to_string_pretty(&report)?);
    logging::debug(Component::System, None, "Report written to stdout");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gangaguard: {}", e);
            ExitCode::FAILURE
        }
    }
}
