//! Configuration management for getx-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `GETX_SCAFFOLD_` prefix, `__` for nesting)
//! 2. `./getx-scaffold.toml`, or the file passed with `--config`
//! 3. `~/.config/getx-scaffold/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Example: `GETX_SCAFFOLD_OUTPUT__EXTENSION=dart`
//!
//! # Example Configuration
//!
//! ```toml
//! [output]
//! extension = "dart"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Environment variable prefix
const ENV_PREFIX: &str = "GETX_SCAFFOLD_";

/// Project-local configuration file
const LOCAL_CONFIG: &str = "getx-scaffold.toml";

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Extension of generated files and of the import lines inside them
    pub extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            extension: "dart".to_string(),
        }
    }
}

impl OutputSettings {
    /// Check that the extension can be appended to a file name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidExtension`] if the extension is empty,
    /// starts with a dot or contains a path separator.
    pub fn validate(&self) -> ScaffoldResult<()> {
        let ext = &self.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(ScaffoldError::InvalidExtension {
                extension: ext.clone(),
            });
        }
        Ok(())
    }
}

/// Complete getx-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Output file settings
    #[serde(default)]
    pub output: OutputSettings,
}

impl ScaffoldConfig {
    /// Load configuration from the standard locations
    ///
    /// When `explicit` is given it replaces `./getx-scaffold.toml`; unlike
    /// the optional locations it must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The explicit configuration file does not exist
    /// - A configuration file contains invalid TOML
    /// - Values fail type conversion
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_layered(explicit, Self::recommended_path().as_deref())
    }

    /// Merge defaults, user file, explicit or local file and environment
    fn load_layered(explicit: Option<&Path>, user_config: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 4. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 3. User config: ~/.config/getx-scaffold/config.toml
        if let Some(user_config) = user_config.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(user_config));
        }

        // 2. Explicit or local config
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_config = PathBuf::from(LOCAL_CONFIG);
                if local_config.exists() {
                    figment = figment.merge(Toml::file(&local_config));
                }
            }
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `None` when no configuration directory can be determined.
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("getx-scaffold").join("config.toml"))
    }

    /// Render this configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
