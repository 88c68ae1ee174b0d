//! Settings types

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use vitro_common::DiscoveryConfig;
use vitro_tree::format::normalize_url_prefix;
use vitro_tree::{TreeBuilder, DEFAULT_DUMMY_NAMES, DEFAULT_URL_PREFIX};

/// Package manager used to install and run the preview app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Arguments that start the dev server on `port`
    pub fn dev_args(self, port: u16) -> Vec<String> {
        let port = port.to_string();
        match self {
            Self::Npm => vec!["run".into(), "dev".into(), "--".into(), "-p".into(), port],
            Self::Yarn => vec!["next".into(), "dev".into(), "-p".into(), port],
        }
    }

    /// Arguments that install dependencies
    pub fn install_args(self) -> Vec<String> {
        vec!["install".into()]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Project settings after layering defaults, the config file and the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitroSettings {
    /// Patterns selecting experiment files
    pub globs: Vec<String>,
    /// Patterns excluding files from discovery
    pub ignore: Vec<String>,
    /// Preview app directory, relative to the project root
    pub app_dir: String,
    /// Page directory inside the app
    pub pages_dir: String,
    /// Optional component wrapping every experiment page
    pub wrapper_component_path: Option<String>,
    /// Route namespace for experiment pages
    pub url_prefix: String,
    /// Optional path of the subtree shown in the sidebar
    pub docs_root_path: Option<String>,
    /// Names absorbed into their parent during simplification
    pub dummy_names: Vec<String>,
    pub package_manager: PackageManager,
    /// Dev server port
    pub port: u16,
    /// Honor `.gitignore` files during discovery
    pub respect_gitignore: bool,
    /// Overwrite existing generated pages
    pub regenerate: bool,
}

impl Default for VitroSettings {
    fn default() -> Self {
        Self {
            globs: vec![
                "**/*.vitro.tsx".to_string(),
                "**/*.vitro.jsx".to_string(),
                "**/*.vitro.ts".to_string(),
                "**/*.vitro.js".to_string(),
            ],
            ignore: vec!["**/node_modules/**".to_string(), "**/.vitro/**".to_string()],
            app_dir: ".vitro".to_string(),
            pages_dir: "pages/experiments".to_string(),
            wrapper_component_path: None,
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            docs_root_path: None,
            dummy_names: DEFAULT_DUMMY_NAMES.iter().map(|s| s.to_string()).collect(),
            package_manager: PackageManager::Npm,
            port: 7007,
            respect_gitignore: true,
            regenerate: false,
        }
    }
}

impl VitroSettings {
    /// Check values figment cannot validate on its own
    pub fn validate(&self) -> ConfigResult<()> {
        if self.globs.iter().all(|g| g.trim().is_empty()) {
            return Err(ConfigError::validation("globs must contain at least one pattern"));
        }
        if self.app_dir.trim().is_empty() {
            return Err(ConfigError::validation("app_dir cannot be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::validation("port must be between 1 and 65535"));
        }
        Ok(())
    }

    /// Discovery settings for [`vitro_common::discover_experiments`]
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            globs: self.globs.clone(),
            ignore: self.ignore.clone(),
            respect_gitignore: self.respect_gitignore,
            ..Default::default()
        }
    }

    /// Tree builder honoring the configured prefix and dummy names
    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new()
            .with_url_prefix(&self.url_prefix)
            .with_dummy_names(&self.dummy_names)
    }

    /// Route namespace normalized to `/segment/`
    pub fn normalized_url_prefix(&self) -> String {
        normalize_url_prefix(&self.url_prefix)
    }
}
