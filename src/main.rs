//! ModQuik - Main entry point
//!
//! Loads the roster from the configured data file and prints every record.

use anyhow::Result;
use modquik::{Config, JsonRosterStorage, Roster, RosterStorage};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr, the roster listing to stdout
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let storage = JsonRosterStorage::new(&config.data_path);
    info!("Reading roster from {}", storage.data_path().display());

    let roster = match storage.read_roster() {
        Ok(Some(roster)) => roster,
        Ok(None) => {
            info!("No data file found, starting with an empty roster");
            Roster::new()
        }
        Err(e) => {
            error!(
                "Data file {} is not in the correct format: {}",
                storage.data_path().display(),
                e
            );
            return Err(e.into());
        }
    };

    print_roster(&roster);
    Ok(())
}

fn print_roster(roster: &Roster) {
    println!("Tutorials ({}):", roster.tutorials().len());
    for (i, tutorial) in roster.tutorials().iter().enumerate() {
        println!("  {}. {}", i + 1, tutorial);
    }

    println!("Teaching assistants ({}):", roster.teaching_assistants().len());
    for (i, ta) in roster.teaching_assistants().iter().enumerate() {
        println!("  {}. {}", i + 1, ta);
    }

    println!("Students ({}):", roster.students().len());
    for (i, student) in roster.students().iter().enumerate() {
        println!("  {}. {}", i + 1, student);
    }
}
