//! `vitro generate`: discovery, pages, tree and experiments map.

use std::path::Path;

use vitro_common::{discover_experiments, write_file, write_file_if, WriteOutcome};
use vitro_config::VitroConfig;
use vitro_templating::{render_experiments_map, render_page, PageContext, TemplateEngine};
use vitro_tree::TreeNode;

use crate::context::{app_depth, CommandContext, MAP_FILE, TREE_FILE};
use crate::error::CliResult;

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Experiment files discovered
    pub experiments: usize,
    /// Pages created or overwritten
    pub pages_written: usize,
    /// Existing pages left alone
    pub pages_skipped: usize,
}

impl std::fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} experiments, {} pages written, {} unchanged",
            self.experiments, self.pages_written, self.pages_skipped
        )
    }
}

/// Discover experiment files and return them with their unordered tree
pub fn discover_tree(config: &VitroConfig) -> CliResult<(Vec<String>, TreeNode)> {
    let files = discover_experiments(&config.root, &config.settings.discovery_config())?;
    tracing::debug!("discovered {} experiment files", files.len());
    let tree = config.settings.tree_builder().build_tree(&files);
    Ok((files, tree))
}

/// Write every generated file of the preview app
pub fn generate(config: &VitroConfig, force: bool) -> CliResult<GenerateReport> {
    let (files, tree) = discover_tree(config)?;
    let app_dir = config.app_dir();
    let overwrite = force || config.settings.regenerate;

    write_file(
        &app_dir.join(TREE_FILE),
        &serde_json::to_string_pretty(&tree)?,
    )?;

    let engine = TemplateEngine::new()?;
    let depth = app_depth(&config.settings.app_dir);
    let pages_dir = config.pages_dir();
    let mut report = GenerateReport {
        experiments: files.len(),
        ..Default::default()
    };

    let mut map_entries = Vec::with_capacity(files.len());
    for relative in &files {
        let absolute = absolute_path(&config.root, relative);
        let context = PageContext::new(
            relative,
            absolute.clone(),
            config.settings.wrapper_component_path.as_deref(),
            depth,
        );
        let page = render_page(&engine, &context)?;

        match write_file_if(&pages_dir.join(relative), &page, overwrite)? {
            WriteOutcome::Written => report.pages_written += 1,
            WriteOutcome::Skipped => report.pages_skipped += 1,
        }
        map_entries.push((relative.as_str(), absolute));
    }

    let map = render_experiments_map(
        &engine,
        map_entries
            .iter()
            .map(|(relative, absolute)| (*relative, absolute.as_str())),
    )?;
    write_file(&app_dir.join(MAP_FILE), &map)?;

    tracing::info!("generated preview app in {}: {}", app_dir.display(), report);
    Ok(report)
}

fn absolute_path(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

/// Run the generate command
pub fn run_generate(context: &CommandContext, force: bool) -> CliResult<()> {
    let config = context.load_config()?;
    let report = generate(&config, force)?;
    println!("{report}");
    Ok(())
}
