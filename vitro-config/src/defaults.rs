//! Default configuration file written by `vitro init`

use crate::types::PackageManager;

/// Render the starter `vitro.config.yaml`.
///
/// Every setting except `globs` and `package_manager` is commented out so the
/// built-in defaults stay in charge until the user opts in.
pub fn default_config_yaml(package_manager: PackageManager) -> String {
    format!(
        r#"# Vitro configuration
#
# Patterns selecting experiment files, relative to this file.
globs:
  - "**/*.vitro.tsx"
  - "**/*.vitro.jsx"
  - "**/*.vitro.ts"
  - "**/*.vitro.js"

package_manager: {package_manager}

# Patterns excluded from discovery.
# ignore:
#   - "**/node_modules/**"

# Component wrapping every experiment page.
# wrapper_component_path: ./src/VitroWrapper.tsx

# Only show this part of the tree in the sidebar.
# docs_root_path: src/components

# port: 7007

# Sidebar order. `false` hides an entry, a nested map orders a folder.
# sidebar_ordering:
#   getting-started: true
#   components:
#     button: true
#     internal: false
"#
    )
}
