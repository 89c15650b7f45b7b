use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use chiffre_config::Config;

/// Load a JSON config file, missing fields keep their defaults
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Config file when given, otherwise defaults overridden by the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            tracing::debug!("No config file, reading CHIFFRE_* environment variables");
            Ok(Config::new())
        }
    }
}
