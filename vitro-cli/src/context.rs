//! Project context shared by every command

use std::path::{Component, Path, PathBuf};

use vitro_config::{ConfigProvider, VitroConfig};

use crate::error::{CliError, CliResult};

/// CLI version written to and compared with the app version file
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version file inside the app directory
pub const VERSION_FILE: &str = "vitro-version.json";

/// Tree file inside the app directory
pub const TREE_FILE: &str = "experimentsTree.json";

/// Experiments map module inside the app directory
pub const MAP_FILE: &str = "experimentsMap.js";

/// Resolved project root
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub root: PathBuf,
}

impl CommandContext {
    /// Resolve the project root from `--project-root` or the current directory
    pub fn new(project_root: Option<&Path>) -> CliResult<Self> {
        let requested = match project_root {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let root = requested
            .canonicalize()
            .map_err(|source| CliError::ProjectRoot {
                path: requested.clone(),
                source,
            })?;
        tracing::debug!("project root: {}", root.display());
        Ok(Self { root })
    }

    /// Load the project configuration
    pub fn load_config(&self) -> CliResult<VitroConfig> {
        Ok(ConfigProvider::new(&self.root).load()?)
    }
}

/// Number of directories between the project root and the app directory
pub fn app_depth(app_dir: &str) -> usize {
    Path::new(app_dir)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}
