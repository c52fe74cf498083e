/// Config file loading and creation for the optstop CLI.
///
/// Config lives at ~/.config/optstop/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct OptstopConfig {
    pub pool_sizes: Option<Vec<usize>>,
    pub trials: Option<usize>,
    pub grid_points: Option<usize>,
    pub output: Option<String>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# optstop configuration
# All values here can be overridden by CLI flags.

# Candidate pool sizes to simulate
# pool_sizes = [100, 1000]

# Monte Carlo trials per threshold
# trials = 10000

# Number of grid points over the rejection-fraction range [0, 1]
# grid_points = 41

# Output path for the rendered chart
# output = \"optimal_stopping.png\"
";

/// Returns the default config path: ~/.config/optstop/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("optstop").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> OptstopConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => OptstopConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
