//! Configuration management for flutter-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `FLUTTER_SCAFFOLD_` prefix,
//!    `__` separates nested keys)
//! 2. `<project root>/flutter_scaffold.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # flutter_scaffold.toml
//! [layout]
//! features = ["auth", "splash", "onboarding", "home"]
//! file_extension = "dart"
//!
//! [manifest]
//! patch = true
//! confirm = true
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use flutter_scaffold::config::ScaffoldConfig;
//!
//! # fn example() -> flutter_scaffold::Result<()> {
//! let config = ScaffoldConfig::load(std::path::Path::new("/home/u/quick_wash"))?;
//! assert!(!config.layout.features.is_empty());
//! # Ok(())
//! # }
//! ```

use std::path::{Component, Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Name of the optional per-project configuration file
pub const CONFIG_FILE: &str = "flutter_scaffold.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "FLUTTER_SCAFFOLD_";

/// Generated layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Feature modules created under `lib/features`
    pub features: Vec<String>,

    /// Extension of generated source files, without the dot
    pub file_extension: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            features: vec![
                "auth".to_string(),
                "splash".to_string(),
                "onboarding".to_string(),
            ],
            file_extension: "dart".to_string(),
        }
    }
}

/// Manifest patch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Run the manifest patch step at all
    pub patch: bool,

    /// Ask before overwriting the manifest
    pub confirm: bool,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            patch: true,
            confirm: true,
        }
    }
}

/// Complete flutter-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutSettings,

    /// Manifest settings
    #[serde(default)]
    pub manifest: ManifestSettings,
}

impl ScaffoldConfig {
    /// Load configuration for the project at `root`
    ///
    /// A missing configuration file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if a source cannot be parsed or the
    /// merged configuration is invalid.
    pub fn load(root: &Path) -> Result<Self> {
        Self::figment(root).extract::<Self>()?.validated()
    }

    /// Load configuration from a specific file, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the file cannot be parsed or the
    /// configuration is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract::<Self>()?
            .validated()
    }

    /// Path of the configuration file for a project root
    #[must_use]
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Sources merged in precedence order
    fn figment(root: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::path_for(root)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check that every configured value can produce a valid layout
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] for an empty extension or a feature
    /// name that is empty or not a single path segment.
    pub fn validate(&self) -> Result<()> {
        let extension = &self.layout.file_extension;
        if extension.is_empty() || extension.contains(['.', '/', '\\']) {
            return Err(ScaffoldError::Config(format!(
                "layout.file_extension must be a bare extension such as \"dart\", got {extension:?}"
            )));
        }

        for feature in &self.layout.features {
            let mut components = Path::new(feature).components();
            let single_segment = matches!(components.next(), Some(Component::Normal(_)))
                && components.next().is_none();
            if !single_segment || feature.contains(['/', '\\']) {
                return Err(ScaffoldError::Config(format!(
                    "layout.features entries must be single directory names, got {feature:?}"
                )));
            }
        }

        Ok(())
    }
}
