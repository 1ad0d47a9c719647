//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default database path when `--db` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rankforge").join("config.toml"))
    }

    /// Load configuration from the default location or create default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific file, default when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the database path: flag beats config file beats default.
    pub fn resolve_db_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.db_path.clone())
            .unwrap_or_else(|| PathBuf::from("rankforge.db"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.db_path.is_none());
        assert!(config.settings.color);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
db_path = "/srv/rankforge/ranks.db"

[settings]
color = false
format = "json"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.db_path.unwrap().to_str().unwrap(),
            "/srv/rankforge/ranks.db"
        );
        assert!(!config.settings.color);
        assert!(matches!(config.settings.format, OutputFormat::Json));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = Config::load_from(Path::new("/does/not/exist.toml")).unwrap();
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_resolve_db_path_precedence() {
        let mut config = Config::default();
        assert_eq!(config.resolve_db_path(None), PathBuf::from("rankforge.db"));

        config.db_path = Some(PathBuf::from("/srv/ranks.db"));
        assert_eq!(config.resolve_db_path(None), PathBuf::from("/srv/ranks.db"));

        assert_eq!(
            config.resolve_db_path(Some(PathBuf::from("/tmp/override.db"))),
            PathBuf::from("/tmp/override.db")
        );
    }
}
