//! Configuration management

use crate::error::{NotescanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "NOTESCAN_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How parse results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per node
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: text, json",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    /// Fallback filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config the way the CLI does: `NOTESCAN_CONFIG`, then
    /// `.notescan/config.toml` under `dir`, then defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load(explicit.as_deref(), dir)
    }

    /// Load config from an explicit file if given, otherwise from `dir`
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let path = dir.join(".notescan").join("config.toml");
                if path.is_file() {
                    Self::load_from_file(&path)?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotescanError::ConfigNotFound(path.to_path_buf())
            } else {
                NotescanError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(NotescanError::Config(format!(
                "Invalid log level: '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Look up a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "format" => Ok(self.format.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(NotescanError::Config(format!(
                "Unknown config key: '{}'. Valid keys: format, log_level",
                key
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_dir = dir.join(".notescan");
        fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_from_dir() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "format = \"json\"\n");

        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_explicit_file_wins() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "format = \"json\"\n");
        let explicit = temp.path().join("other.toml");
        fs::write(&explicit, "log_level = \"debug\"\n").unwrap();

        let config = Config::load(Some(explicit.as_path()), temp.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");

        match Config::load(Some(missing.as_path()), temp.path()) {
            Err(NotescanError::ConfigNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "colour = \"blue\"\n");

        let result = Config::load(None, temp.path());
        assert!(matches!(result, Err(NotescanError::TomlDeserialize(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "log_level = \"loud\"\n");

        match Config::load(None, temp.path()) {
            Err(NotescanError::Config(msg)) => assert!(msg.contains("log level")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_keys() {
        let config = Config::default();
        assert_eq!(config.get("format").unwrap(), "text");
        assert_eq!(config.get("log_level").unwrap(), "warn");
        assert!(config.get("editor").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
