// src/utils/env.rs

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

/// Loads environment variables from the first .env file found. Missing files
/// are not an error; the system environment always wins over file values.
pub fn load_env() {
    let env_paths = [".env", ".env.local", "../.env"];
    let mut loaded_env = false;
    for path in env_paths.iter() {
        if Path::new(path).exists() {
            if let Err(e) = load_env_from_file(path) {
                warn!("Failed to load environment from {}: {}", path, e);
            } else {
                info!("Loaded environment variables from {}", path);
                loaded_env = true;
                break;
            }
        }
    }
    if !loaded_env {
        info!("No .env file found, using environment variables from system");
    }
}

fn load_env_from_file(file_path: &str) -> Result<()> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open(file_path)
        .with_context(|| format!("Could not open env file '{}'", file_path))?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.context("Failed to read line from env file")?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        if let Some(idx) = line.find('=') {
            let key = line[..idx].trim();
            let value = line[idx + 1..].trim().trim_matches('"');
            if std::env::var(key).is_err() {
                // Set only if not already set
                std::env::set_var(key, value);
                debug!(
                    "Set env var from file: {} = {}",
                    key,
                    if key == "POSTGRES_PASSWORD" {
                        "[hidden]"
                    } else {
                        value
                    }
                );
            }
        }
    }
    Ok(())
}
