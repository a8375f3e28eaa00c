use crate::application::BlockDefaults;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_TITLE, STORE_FILE_NAME,
};
use crate::domain::memo::clamp_height;
use crate::domain::Format;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for frogmemo
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct StoreConfig {
    /// Empty means the platform data directory.
    #[serde(default)]
    pub path: String,
}

/// Field values for new memo blocks
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub show_line_numbers: bool,
}

fn default_title() -> String { DEFAULT_BLOCK_TITLE.to_string() }
fn default_height() -> u32 { DEFAULT_BLOCK_HEIGHT }

impl Default for Defaults {
    fn default() -> Self {
        Self {
            title: default_title(),
            format: Format::Auto,
            height: default_height(),
            show_line_numbers: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load an explicit config file, else the default location when it exists, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Store location: the override, then `store.path`, then the platform data directory.
    pub fn store_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if !self.store.path.trim().is_empty() {
            return Ok(PathBuf::from(self.store.path.trim()));
        }
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(data_dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
    }

    pub fn block_defaults(&self) -> BlockDefaults {
        BlockDefaults {
            title: self.defaults.title.clone(),
            format: self.defaults.format,
            height: clamp_height(self.defaults.height),
            show_line_numbers: self.defaults.show_line_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_BLOCK_HEIGHT;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_empty_file_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.title, "New memo");
        assert_eq!(config.defaults.format, Format::Auto);
        assert_eq!(config.defaults.height, 200);
    }

    #[test]
    fn given_full_config_when_loading_then_reads_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");
        fs::write(
            &config_path,
            "[store]\npath = \"/tmp/memos.json\"\n\n[defaults]\ntitle = \"Scratch\"\n\
             format = \"sql\"\nheight = 320\nshow_line_numbers = true\n",
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.store.path, "/tmp/memos.json");
        let defaults = config.block_defaults();
        assert_eq!(defaults.title, "Scratch");
        assert_eq!(defaults.format, Format::Sql);
        assert_eq!(defaults.height, 320);
        assert!(defaults.show_line_numbers);
    }

    #[test]
    fn given_partial_config_when_loading_then_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[defaults]\nformat = \"markdown\"\nheight = 50\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.defaults.format, Format::Markdown);
        assert_eq!(config.defaults.title, "New memo");
        assert_eq!(config.store.path, "");
        assert_eq!(config.block_defaults().height, MIN_BLOCK_HEIGHT);
    }

    #[test]
    fn given_unknown_format_when_loading_then_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[defaults]\nformat = \"cobol\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_store_override_when_resolving_then_wins_over_config() {
        let mut config = Config::default();
        config.store.path = "/from/config.json".to_string();

        assert_eq!(
            config.store_path(Some(Path::new("/from/flag.json"))).unwrap(),
            PathBuf::from("/from/flag.json")
        );
        assert_eq!(
            config.store_path(None).unwrap(),
            PathBuf::from("/from/config.json")
        );
    }

    #[test]
    fn given_missing_explicit_config_when_loading_then_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = Config::load_or_default(Some(&temp_dir.path().join("absent.toml")));

        assert!(result.is_err());
    }
}
