//! Configuration provider using Figment for Vitro

use crate::{
    discovery::{find_config_file, ConfigFile, ConfigFormat},
    error::{ConfigError, ConfigResult},
    types::VitroSettings,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use vitro_common::{read_file, Pretty};
use vitro_tree::Ordering;

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "VITRO_";

/// Fully loaded project configuration
#[derive(Debug, Clone)]
pub struct VitroConfig {
    /// Project root every relative setting is resolved against
    pub root: PathBuf,
    /// The configuration file, when one exists
    pub file: Option<ConfigFile>,
    pub settings: VitroSettings,
    /// Sidebar ordering, in file order
    pub ordering: Ordering,
}

impl VitroConfig {
    /// The configuration file, or an error telling the user to run `vitro init`
    pub fn require_file(&self) -> ConfigResult<&ConfigFile> {
        self.file.as_ref().ok_or_else(|| ConfigError::NotInitialized {
            root: self.root.clone(),
        })
    }

    /// Absolute preview app directory
    pub fn app_dir(&self) -> PathBuf {
        self.root.join(&self.settings.app_dir)
    }

    /// Absolute page directory inside the app
    pub fn pages_dir(&self) -> PathBuf {
        self.app_dir().join(&self.settings.pages_dir)
    }
}

/// Configuration provider
///
/// Loads settings with a clear precedence order. No caching is performed so
/// edits to the config file are picked up on the next load.
pub struct ConfigProvider {
    root: PathBuf,
}

impl ConfigProvider {
    /// Create a provider for the project rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root this provider reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load settings and sidebar ordering from all sources
    pub fn load(&self) -> ConfigResult<VitroConfig> {
        let file = find_config_file(&self.root);
        let settings: VitroSettings = self.build_figment(file.as_ref()).extract()?;
        settings.validate()?;
        debug!("Loaded settings: {}", Pretty(&settings));

        let ordering = match &file {
            Some(file) => load_ordering(file)?,
            None => Ordering::new(),
        };
        trace!("Sidebar ordering: {}", Pretty(&ordering));

        Ok(VitroConfig {
            root: self.root.clone(),
            file,
            settings,
            ordering,
        })
    }

    /// Build the figment configuration with all sources in precedence order
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. The project configuration file
    /// 3. Environment variables with the `VITRO_` prefix
    fn build_figment(&self, file: Option<&ConfigFile>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(VitroSettings::default()));

        if let Some(file) = file {
            trace!(
                "Loading config file: {} ({:?})",
                file.path.display(),
                file.format
            );
            figment = match file.format {
                ConfigFormat::Yaml => figment.merge(Yaml::file(&file.path)),
                ConfigFormat::Json => figment.merge(Json::file(&file.path)),
            };
        }

        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }
}

#[derive(Deserialize)]
struct OrderingSection {
    #[serde(default)]
    sidebar_ordering: Option<Ordering>,
}

/// Read `sidebar_ordering` straight from the file.
///
/// Figment stores dictionaries sorted by key, which would lose the order the
/// user wrote, so this bypasses it.
pub fn load_ordering(file: &ConfigFile) -> ConfigResult<Ordering> {
    let content = read_file(&file.path).map_err(|e| match e {
        vitro_common::VitroError::FileRead { path, source } => ConfigError::FileRead { path, source },
        other => ConfigError::OrderingParse {
            path: file.path.clone(),
            message: other.to_string(),
        },
    })?;

    if content.trim().is_empty() {
        return Ok(Ordering::new());
    }

    let parse_error = |message: String| ConfigError::OrderingParse {
        path: file.path.clone(),
        message,
    };
    let section: Option<OrderingSection> = match file.format {
        ConfigFormat::Yaml => {
            serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Json => {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    Ok(section
        .and_then(|section| section.sidebar_ordering)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;
    use vitro_tree::OrderingNode;

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigProvider::new(temp_dir.path()).load().unwrap();

        assert!(config.file.is_none());
        assert_eq!(config.settings, VitroSettings::default());
        assert!(config.ordering.is_empty());
        assert!(matches!(
            config.require_file(),
            Err(ConfigError::NotInitialized { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_yaml_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("vitro.config.yaml"),
            r#"
globs:
  - "src/**/*.vitro.tsx"
port: 8000
package_manager: yarn
docs_root_path: src/components
sidebar_ordering:
  zeta: true
  alpha:
    inner: false
"#,
        )
        .unwrap();

        let config = ConfigProvider::new(temp_dir.path()).load().unwrap();

        assert_eq!(config.settings.globs, vec!["src/**/*.vitro.tsx"]);
        assert_eq!(config.settings.port, 8000);
        assert_eq!(config.settings.package_manager, crate::PackageManager::Yarn);
        assert_eq!(
            config.settings.docs_root_path.as_deref(),
            Some("src/components")
        );
        assert_eq!(config.settings.app_dir, ".vitro");
        assert_eq!(config.ordering.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(
            config.ordering.nested("alpha").and_then(|o| o.get("inner")),
            Some(&OrderingNode::Exclude)
        );
    }

    #[test]
    #[serial]
    fn test_load_json_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("vitro.config.json"),
            r#"{"url_prefix": "/stories/", "sidebar_ordering": {"b": true, "a": null}}"#,
        )
        .unwrap();

        let config = ConfigProvider::new(temp_dir.path()).load().unwrap();
        assert_eq!(config.settings.url_prefix, "/stories/");
        assert_eq!(config.ordering.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("vitro.config.yaml"), "port: 8000\n").unwrap();

        std::env::set_var("VITRO_PORT", "9100");
        std::env::set_var("VITRO_REGENERATE", "true");
        let result = ConfigProvider::new(temp_dir.path()).load();
        std::env::remove_var("VITRO_PORT");
        std::env::remove_var("VITRO_REGENERATE");

        let config = result.unwrap();
        assert_eq!(config.settings.port, 9100);
        assert!(config.settings.regenerate);
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("vitro.config.yaml"), "port: not-a-port\n").unwrap();

        let err = ConfigProvider::new(temp_dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    #[serial]
    fn test_invalid_ordering_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("vitro.config.yaml"),
            "sidebar_ordering:\n  a: 3\n",
        )
        .unwrap();

        let err = ConfigProvider::new(temp_dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::OrderingParse { .. }));
    }

    #[test]
    #[serial]
    fn test_paths_resolve_against_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigProvider::new(temp_dir.path()).load().unwrap();
        assert_eq!(config.app_dir(), temp_dir.path().join(".vitro"));
        assert_eq!(
            config.pages_dir(),
            temp_dir.path().join(".vitro").join("pages/experiments")
        );
    }
}
