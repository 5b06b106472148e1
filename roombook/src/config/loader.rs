//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ClientConfig;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration file together with its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: ClientConfig,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file, if it exists.
    ///
    /// If `config_dir` is provided, loads from `{config_dir}/config.yaml`.
    /// Otherwise uses `~/.roombook/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the home directory cannot be determined.
    pub fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => default_config_dir()?.join(CONFIG_FILE_NAME),
        };

        if !config_path.exists() {
            log::debug!("no configuration file at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<ClientConfig> {
        let contents = fs::read_to_string(path)?;

        serde_yaml::from_str(&contents).map_err(|e| {
            log::warn!("invalid configuration in {}: {e}", path.display());
            Error::Configuration(e)
        })
    }
}

/// Returns the default configuration directory, `~/.roombook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".roombook"))
        .ok_or_else(|| Error::NotFound {
            resource: "home directory".into(),
        })
}
