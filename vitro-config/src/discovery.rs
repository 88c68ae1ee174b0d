//! Configuration file discovery
//!
//! A project is configured by a single `vitro.config.*` file in its root.
//! Candidates are checked in a fixed order and the first existing file wins.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Candidate file names, in priority order
pub const CONFIG_FILE_NAMES: [&str; 3] =
    ["vitro.config.yaml", "vitro.config.yml", "vitro.config.json"];

/// File name written by `vitro init`
pub const DEFAULT_CONFIG_FILE_NAME: &str = "vitro.config.yaml";

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Classify a path, returning `None` for unsupported extensions
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
        Some(Self { path, format })
    }
}

/// Find the configuration file of the project rooted at `root`.
pub fn find_config_file(root: &Path) -> Option<ConfigFile> {
    for name in CONFIG_FILE_NAMES {
        let candidate = root.join(name);
        trace!("checking {}", candidate.display());
        if candidate.is_file() {
            debug!("using config file {}", candidate.display());
            return ConfigFile::from_path(candidate);
        }
    }
    debug!("no config file in {}", root.display());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("yaml", Some(ConfigFormat::Yaml))]
    #[case("YML", Some(ConfigFormat::Yaml))]
    #[case("json", Some(ConfigFormat::Json))]
    #[case("toml", None)]
    fn test_format_from_extension(#[case] ext: &str, #[case] expected: Option<ConfigFormat>) {
        assert_eq!(ConfigFormat::from_extension(ext), expected);
    }

    #[test]
    fn test_find_config_file_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_config_file(temp_dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_prefers_yaml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("vitro.config.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("vitro.config.yml"), "port: 1").unwrap();

        let found = find_config_file(temp_dir.path()).unwrap();
        assert_eq!(found.format, ConfigFormat::Yaml);
        assert!(found.path.ends_with("vitro.config.yml"));
    }

    #[test]
    fn test_find_config_file_ignores_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("vitro.config.yaml")).unwrap();
        fs::write(temp_dir.path().join("vitro.config.json"), "{}").unwrap();

        let found = find_config_file(temp_dir.path()).unwrap();
        assert_eq!(found.format, ConfigFormat::Json);
    }
}
