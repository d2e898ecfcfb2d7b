use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{DEFAULT_SEPARATOR_WIDTH, DEFAULT_TITLE, RenderOptions};

pub const DEFAULT_DOCUMENT_PATH: &str =
    "/Users/eric/projects5/fanny3/doc/华中科技大学科研管理平台设计方案.docx";

/// Configuration for docx-dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document to print
    pub document_path: PathBuf,
    /// Banner title line
    pub title: String,
    /// Width of the `=` separator lines
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            title: DEFAULT_TITLE.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl Config {
    /// Load config from the config directory, or defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            self.save_to(&config_path)?;
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx-dump").join("config.toml"))
    }

    /// Write the default config file
    pub fn init_default() -> Result<()> {
        Config::default().save()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            separator_width: self.separator_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "document_path = \"/tmp/report.docx\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.document_path, PathBuf::from("/tmp/report.docx"));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.separator_width, 80);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "separator_width = \"wide\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            document_path: PathBuf::from("/data/plan.docx"),
            title: "Plan".to_string(),
            separator_width: 40,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        assert_eq!(config.render_options().separator_width, 40);
    }
}
