//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found, falls back to the built-in defaults
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MINDSTOCK_DATA_DIR`: Directory holding the persisted documents
//! - `MINDSTOCK_LOG_FILE`: Time log document file name (optional)
//! - `MINDSTOCK_INVENTORY_FILE`: Inventory document file name (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./mindstock.json` or `./mindstock.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use mindstock_domain::{Config, MindstockError, Result, StorageConfig};

/// Load configuration with automatic fallback strategy
///
/// Environment first, then a probed config file, then the built-in
/// defaults (both file names are defaultable, so a bare environment is
/// not an error).
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Ok(config) => Ok(config),
                Err(_) => {
                    tracing::info!("No configuration source found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `MINDSTOCK_DATA_DIR` is required; the file names fall back to their
/// defaults when unset.
///
/// # Errors
/// Returns `MindstockError::Config` if `MINDSTOCK_DATA_DIR` is missing.
pub fn load_from_env() -> Result<Config> {
    let data_dir = env_var("MINDSTOCK_DATA_DIR")?;
    let defaults = StorageConfig::default();

    Ok(Config {
        storage: StorageConfig {
            data_dir: PathBuf::from(data_dir),
            log_file: std::env::var("MINDSTOCK_LOG_FILE").unwrap_or(defaults.log_file),
            inventory_file: std::env::var("MINDSTOCK_INVENTORY_FILE")
                .unwrap_or(defaults.inventory_file),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MindstockError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MindstockError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MindstockError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MindstockError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MindstockError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MindstockError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MindstockError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("mindstock.json"),
            cwd.join("mindstock.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("mindstock.json"),
                exe_dir.join("mindstock.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MindstockError::Config(format!("Missing required environment variable: {key}"))
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn explicit_missing_file_is_a_config_error() {
        let err = load_from_file(Some(PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, MindstockError::Config(_)));
    }

    #[test]
    fn toml_and_json_files_parse_into_the_same_config() {
        let dir = TempDir::new().unwrap();

        let toml_path = dir.path().join("config.toml");
        std::fs::write(
            &toml_path,
            "[storage]\ndata_dir = \"/tmp/mindstock\"\nlog_file = \"logs.csv\"\ninventory_file = \"inv.csv\"\n",
        )
        .unwrap();

        let json_path = dir.path().join("config.json");
        std::fs::write(
            &json_path,
            r#"{"storage":{"data_dir":"/tmp/mindstock","log_file":"logs.csv","inventory_file":"inv.csv"}}"#,
        )
        .unwrap();

        let from_toml = load_from_file(Some(toml_path)).unwrap();
        let from_json = load_from_file(Some(json_path)).unwrap();
        assert_eq!(from_toml.storage.log_path(), from_json.storage.log_path());
        assert_eq!(from_toml.storage.inventory_path(), PathBuf::from("/tmp/mindstock/inv.csv"));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "storage: {}").unwrap();

        let err = load_from_file(Some(path)).unwrap_err();
        assert!(matches!(err, MindstockError::Config(ref msg) if msg.contains("Unsupported")));
    }
}
