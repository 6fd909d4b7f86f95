// src/io/config_file.rs

use crate::simulation::config::Parameters;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "resale-forecast.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("cannot write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot encode parameters: {0}")]
    Encode(#[source] serde_yaml::Error),
}

/// Reads parameters from a YAML file. Missing keys take their defaults.
pub fn load(path: &Path) -> Result<Parameters, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the default config file, falling back to built-in defaults when it
/// is missing or broken. The fallback is logged, not fatal: an operator who
/// explicitly passed a path gets the strict `load` instead.
pub fn load_or_default(path: &Path) -> Parameters {
    match load(path) {
        Ok(params) => params,
        Err(err) => {
            if path.exists() {
                warn!(%err, "ignoring unusable config file, using defaults");
            }
            Parameters::default()
        }
    }
}

/// Persists parameters as a flat YAML mapping.
pub fn save(path: &Path, params: &Parameters) -> Result<(), ConfigError> {
    let text = serde_yaml::to_string(params).map_err(ConfigError::Encode)?;
    fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("resale-forecast-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn save_then_load_roundtrips() {
        let path = scratch_path("roundtrip.yaml");
        let params = Parameters {
            cash: 1234.5,
            duration_days: 30,
            ..Parameters::default()
        };

        save(&path, &params).unwrap();
        let back = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(back, params);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("/nonexistent/resale-forecast.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = scratch_path("malformed.yaml");
        fs::write(&path, "cash: [not, a, number]\n").unwrap();

        let err = load(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_default_config_falls_back_to_defaults() {
        let params = load_or_default(Path::new("/nonexistent/resale-forecast.yaml"));
        assert_eq!(params, Parameters::default());
    }
}
