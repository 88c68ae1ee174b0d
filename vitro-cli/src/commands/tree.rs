//! `vitro tree`: print the ordered experiments tree.

use vitro_config::VitroConfig;
use vitro_tree::{apply_ordering, find_by_path, subtree_or_self, TreeNode};

use crate::commands::generate::discover_tree;
use crate::context::CommandContext;
use crate::error::{CliError, CliResult};

/// Options of the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub json: bool,
    pub root: Option<String>,
    pub no_ordering: bool,
}

/// Build the tree the sidebar shows: discovered, ordered and rooted.
pub fn sidebar_tree(config: &VitroConfig, options: &TreeOptions) -> CliResult<TreeNode> {
    let (_, mut tree) = discover_tree(config)?;
    if !options.no_ordering {
        apply_ordering(&mut tree, &config.ordering);
    }

    let subtree = match &options.root {
        Some(path) => find_by_path(&tree, path)
            .filter(|node| node.has_children())
            .ok_or_else(|| CliError::NotFound(format!("No folder at path '{path}'")))?,
        None => subtree_or_self(&tree, config.settings.docs_root_path.as_deref()),
    };
    Ok(subtree.clone())
}

/// Render a tree as an indented outline, one node per line.
///
/// Folders end with `/`; leaves show their URL.
pub fn render_outline(tree: &TreeNode) -> String {
    let mut out = String::new();
    for child in &tree.children {
        write_outline(child, 0, &mut out);
    }
    out
}

fn write_outline(node: &TreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if node.is_leaf() {
        out.push_str(&format!("{indent}{}  {}\n", node.title, node.url));
    } else {
        out.push_str(&format!("{indent}{}/\n", node.title));
    }
    for child in &node.children {
        write_outline(child, depth + 1, out);
    }
}

/// Run the tree command
pub fn run_tree(context: &CommandContext, options: &TreeOptions) -> CliResult<()> {
    let config = context.load_config()?;
    let tree = sidebar_tree(&config, options)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print!("{}", render_outline(&tree));
    }
    Ok(())
}
