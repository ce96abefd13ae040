//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML or JSON files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads and provides access to a payroll configuration.
///
/// The `ConfigLoader` reads a single configuration file, parses it by
/// extension (`.yaml`/`.yml` as YAML, anything else as JSON), and
/// validates it before use.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll-1404.yaml").unwrap();
/// println!("Payroll year: {}", loader.config().year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/payroll-1404.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML/JSON (`ConfigParseError`)
    /// - The parsed configuration fails validation (`InvalidConfiguration`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll-1404.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfig = if Self::is_yaml(path) {
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        };

        config.validate()?;

        Ok(Self { config })
    }

    /// Loads configuration from a file, falling back to the bundled
    /// year-1404 defaults if the file cannot be loaded.
    ///
    /// The fallback is logged as a warning so operators can tell when a
    /// deployment is running on defaults.
    pub fn load_or_bundled<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(loader) => loader,
            Err(error) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %error,
                    "Failed to load payroll configuration, using bundled 1404 defaults"
                );
                Self {
                    config: PayrollConfig::bundled_1404(),
                }
            }
        }
    }

    /// Wraps an already-constructed configuration, validating it first.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    fn is_yaml(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
    }
}
