//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::ClientConfig;
use crate::error::Result;

/// Builds a [`ClientConfig`] from files, environment and overrides.
///
/// Precedence, lowest to highest: built-in defaults, the user file,
/// `ROOMBOOK_*` environment variables, programmatic overrides.
///
/// # Examples
///
/// ```
/// use roombook::config::{ClientConfig, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(ClientConfig {
///         timeout_seconds: Some(3),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout().as_secs(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<ClientConfig>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the default user file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the user file from `dir` instead of `~/.roombook`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges all layers and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an environment value is
    /// invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<ClientConfig> {
        let mut config = ClientConfig::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.config_dir.as_deref())? {
                log::debug!("loaded configuration from {}", source.path.display());
                config.merge(source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        config.validate()?;
        Ok(config)
    }
}
