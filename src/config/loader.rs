//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading biller
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::SessionBiller;
use crate::error::{EngineError, EngineResult};

use super::types::BillerConfig;

/// Loads and provides access to a biller configuration.
///
/// # Example
///
/// ```no_run
/// use sitter_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml")?;
/// let biller = loader.biller()?;
/// println!("Pre-bed rate: ${}", biller.pre_bed_rate());
/// # Ok::<(), sitter_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BillerConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks required fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            rounding = %config.rounding,
            "Loaded biller configuration"
        );

        Ok(Self { config })
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_pay_engine::config::ConfigLoader;
    /// use sitter_pay_engine::models::RoundingPolicy;
    ///
    /// let loader = ConfigLoader::from_yaml_str(
    ///     "rates: { pre_bed: 12, bed_to_midnight: 8, post_midnight: 16 }\nrounding: half_even\n",
    /// )?;
    /// assert_eq!(loader.config().rounding, RoundingPolicy::HalfEven);
    /// # Ok::<(), sitter_pay_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = Self::parse(content, "<string>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> EngineResult<BillerConfig> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying biller configuration.
    pub fn config(&self) -> &BillerConfig {
        &self.config
    }

    /// Builds a biller from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration names the `exact`
    /// rounding policy.
    pub fn biller(&self) -> EngineResult<SessionBiller> {
        SessionBiller::from_config(&self.config)
    }
}
