//! Experiment file discovery
//!
//! Expands the configured glob patterns against a project root and returns
//! the matching files as `/`-separated paths relative to that root, which is
//! the shape the tree builder consumes.

use crate::error::{Result, VitroError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Maximum number of files to return from discovery
pub const MAX_FILES: usize = 10_000;

/// Configuration for experiment discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Patterns selecting experiment files, relative to the project root
    pub globs: Vec<String>,
    /// Patterns excluding files, matched against the relative path
    pub ignore: Vec<String>,
    /// Whether to respect .gitignore files
    pub respect_gitignore: bool,
    /// Whether to descend into hidden directories
    pub include_hidden: bool,
    /// Maximum number of files to return
    pub max_files: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            globs: Vec::new(),
            ignore: Vec::new(),
            respect_gitignore: true,
            include_hidden: false,
            max_files: MAX_FILES,
        }
    }
}

/// Discover experiment files below `root`.
///
/// Results are grouped by pattern in configuration order; within a pattern
/// files follow a name-sorted walk. A file matched by several patterns is
/// reported once, at its first position.
///
/// # Errors
///
/// Returns [`VitroError::DirectoryNotFound`] when `root` is not a directory
/// and [`VitroError::InvalidGlobPattern`] when any pattern fails to compile.
pub fn discover_experiments(root: &Path, config: &DiscoveryConfig) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(VitroError::DirectoryNotFound {
            path: root.to_path_buf(),
            suggestion: "Run the command from your project directory or pass --project-root"
                .to_string(),
        });
    }

    let ignored = config
        .ignore
        .iter()
        .flat_map(|pattern| expand_braces(pattern))
        .map(|pattern| compile_pattern(&pattern))
        .collect::<Result<Vec<_>>>()?;

    let mut found: Vec<String> = Vec::new();
    for pattern in config.globs.iter().flat_map(|pattern| expand_braces(pattern)) {
        validate_glob_pattern(&pattern)?;
        let before = found.len();
        expand_pattern(root, &pattern, &ignored, config, &mut found)?;
        tracing::debug!("pattern {} matched {} files", pattern, found.len() - before);

        if found.len() >= config.max_files {
            tracing::warn!(
                "experiment discovery stopped at {} files",
                config.max_files
            );
            found.truncate(config.max_files);
            break;
        }
    }

    Ok(found)
}

fn expand_pattern(
    root: &Path,
    pattern: &str,
    ignored: &[glob::Pattern],
    config: &DiscoveryConfig,
    found: &mut Vec<String>,
) -> Result<()> {
    let (base_dir, file_pattern) = parse_glob_pattern(pattern);
    let search_dir = root.join(&base_dir);
    if !search_dir.is_dir() {
        tracing::debug!("skipping {}: {} does not exist", pattern, search_dir.display());
        return Ok(());
    }

    let matcher = compile_pattern(&file_pattern)?;
    let walker = WalkBuilder::new(&search_dir)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .ignore(config.respect_gitignore)
        .require_git(false)
        .parents(true)
        .hidden(!config.include_hidden)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        if found.len() >= config.max_files {
            break;
        }
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let Some(in_search) = relative_slash_path(entry.path(), &search_dir) else {
            continue;
        };
        if !matcher.matches_with(&in_search, match_options()) {
            continue;
        }

        let Some(relative) = relative_slash_path(entry.path(), root) else {
            continue;
        };
        if ignored
            .iter()
            .any(|ignore| ignore.matches_with(&relative, match_options()))
        {
            tracing::trace!("ignored {}", relative);
            continue;
        }
        if !found.contains(&relative) {
            found.push(relative);
        }
    }

    Ok(())
}

fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

fn compile_pattern(pattern: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(pattern).map_err(|e| VitroError::invalid_glob(pattern, e))
}

/// Expand `{a,b}` alternations into separate patterns.
///
/// The `glob` crate has no brace support, so `**/*.vitro.{tsx,jsx}` becomes
/// `**/*.vitro.tsx` and `**/*.vitro.jsx`. Nested groups are expanded left to
/// right.
///
/// ```
/// use vitro_common::discovery::expand_braces;
///
/// assert_eq!(
///     expand_braces("src/*.{ts,js}"),
///     vec!["src/*.ts".to_string(), "src/*.js".to_string()]
/// );
/// assert_eq!(expand_braces("plain/*.tsx"), vec!["plain/*.tsx".to_string()]);
/// ```
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(close) = pattern[open..].find('}').map(|i| open + i) else {
        return vec![pattern.to_string()];
    };

    let (head, alternatives, tail) = (
        &pattern[..open],
        &pattern[open + 1..close],
        &pattern[close + 1..],
    );
    alternatives
        .split(',')
        .flat_map(|alt| expand_braces(&format!("{head}{alt}{tail}")))
        .collect()
}

/// Validate a glob pattern for common issues
///
/// # Returns
/// * `Ok(())` - If the pattern is valid
/// * `Err` - If the pattern is empty, too long or fails to compile
pub fn validate_glob_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(VitroError::invalid_glob(pattern, "Pattern cannot be empty"));
    }

    if pattern.len() > 1000 {
        return Err(VitroError::invalid_glob(
            pattern,
            "Pattern is too long (maximum 1000 characters)",
        ));
    }

    compile_pattern(pattern).map(|_| ())
}

/// Parse a glob pattern to extract base directory and file pattern
///
/// ```
/// use vitro_common::discovery::parse_glob_pattern;
///
/// let (base_dir, file_pattern) = parse_glob_pattern("src/**/*.vitro.tsx");
/// assert_eq!(base_dir.to_str().unwrap(), "src");
/// assert_eq!(file_pattern, "**/*.vitro.tsx");
/// ```
pub fn parse_glob_pattern(pattern: &str) -> (PathBuf, String) {
    let pattern = pattern.trim_start_matches("./");
    let mut base_components = Vec::new();
    let mut pattern_components = Vec::new();
    let mut found_glob = false;

    for component in pattern.split('/').filter(|c| !c.is_empty()) {
        if !found_glob && !component.contains(['*', '?', '[']) {
            base_components.push(component);
        } else {
            found_glob = true;
            pattern_components.push(component);
        }
    }

    // a pattern without wildcards names a single file
    if pattern_components.is_empty() {
        if let Some(file) = base_components.pop() {
            pattern_components.push(file);
        }
    }

    let base_dir = if base_components.is_empty() {
        PathBuf::from(".")
    } else {
        base_components.iter().collect()
    };

    let file_pattern = if pattern_components.is_empty() {
        "*".to_string()
    } else {
        pattern_components.join("/")
    };

    (base_dir, file_pattern)
}
