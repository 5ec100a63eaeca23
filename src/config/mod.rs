//! Site configuration management for `acreage.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] and [seo] definitions
//! ├── error          # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The file is optional: without one every value falls back to the
//! built-in AcreageSale defaults.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{SeoSectionConfig, SiteSectionConfig};
pub use util::find_config_file;

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "acreage.toml";

/// Root configuration structure representing acreage.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the loaded config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site identity
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Length caps and Open Graph settings
    #[serde(default)]
    pub seo: SeoSectionConfig,
}

impl SiteConfig {
    /// Load configuration by searching upward from `start` for `config_name`.
    ///
    /// A missing file is not an error unless `required` is set (the user
    /// passed an explicit path).
    pub fn load(config_name: &Path, start: &Path, required: bool) -> Result<Self> {
        let config = match find_config_file(config_name, start) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None if required => {
                let path = if config_name.is_absolute() {
                    config_name.to_path_buf()
                } else {
                    start.join(config_name)
                };
                return Err(ConfigError::Io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                )
                .into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", config_name.display());
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Invalid(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(test_parse_config(""), SiteConfig::default());
    }

    #[test]
    fn test_from_str_rejects_bad_toml() {
        let err = SiteConfig::from_str("[site\nname = 1").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            SiteConfig::parse_with_ignored("[site]\nname = \"X\"\ncolour = \"red\"").unwrap();
        assert_eq!(config.site.name, "X");
        assert_eq!(ignored, vec!["site.colour".to_string()]);
    }

    #[test]
    fn test_load_missing_optional() {
        let dir = TempDir::new().unwrap();
        let config =
            SiteConfig::load(Path::new("acreage-missing-91c.toml"), dir.path(), false).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_load_missing_required() {
        let dir = TempDir::new().unwrap();
        let err =
            SiteConfig::load(Path::new("acreage-missing-91c.toml"), dir.path(), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            concat!(
                "[site]\nname = \"Ranch Finder\"\nurl = \"https://ranch.example/\"\n\n",
                "[seo]\ntitle_max = 50\n",
            ),
        )
        .unwrap();

        let config = SiteConfig::load(Path::new(CONFIG_FILE), dir.path(), true).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.site.name, "Ranch Finder");
        assert_eq!(config.seo.title_max, 50);
    }

    #[test]
    fn test_load_reports_all_validation_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[site]\nurl = \"not a url\"\n\n[seo]\ntitle_max = 2\n",
        )
        .unwrap();

        let err = SiteConfig::load(Path::new(CONFIG_FILE), dir.path(), false).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Invalid(diag)) => assert_eq!(diag.len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }
}
