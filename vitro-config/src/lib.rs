//! Vitro Configuration Management using Figment
//!
//! Loads the settings of a Vitro project with a clear precedence order:
//! built-in defaults, then the project's `vitro.config.{yaml,yml,json}`, then
//! `VITRO_`-prefixed environment variables.
//!
//! # Quick Start
//!
//! ```no_run
//! use vitro_config::ConfigProvider;
//!
//! let config = ConfigProvider::new(".").load()?;
//! println!("serving on port {}", config.settings.port);
//! # Ok::<(), vitro_config::ConfigError>(())
//! ```
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! globs:
//!   - "src/**/*.vitro.tsx"
//! package_manager: yarn
//! docs_root_path: src/components
//! sidebar_ordering:
//!   getting-started: true
//!   components:
//!     internal: false
//! ```
//!
//! The `sidebar_ordering` section keeps the key order of the file, which
//! figment alone would not.

pub mod defaults;
pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use defaults::default_config_yaml;
pub use discovery::{
    find_config_file, ConfigFile, ConfigFormat, CONFIG_FILE_NAMES, DEFAULT_CONFIG_FILE_NAME,
};
pub use error::{ConfigError, ConfigResult};
pub use provider::{load_ordering, ConfigProvider, VitroConfig, ENV_PREFIX};
pub use types::{PackageManager, VitroSettings};
