//! `vitro nav`: previous / container / next of an experiment URL.

use vitro_config::VitroConfig;
use vitro_tree::{find_siblings_by_url, TreeNode};

use crate::commands::tree::{sidebar_tree, TreeOptions};
use crate::context::CommandContext;
use crate::error::{CliError, CliResult};

/// Accept either a full URL or a path below the URL prefix.
pub fn resolve_url(config: &VitroConfig, url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("{}{}", config.settings.normalized_url_prefix(), url)
    }
}

fn describe(node: Option<&TreeNode>) -> String {
    match node {
        Some(node) if node.is_leaf() => format!("{} ({})", node.title, node.url),
        Some(node) => format!("{}/", node.title),
        None => "-".to_string(),
    }
}

/// Render the neighbourhood of `url` in `tree`
pub fn render_navigation(tree: &TreeNode, url: &str) -> CliResult<String> {
    let siblings = find_siblings_by_url(tree, url)
        .ok_or_else(|| CliError::NotFound(format!("No experiment at URL '{url}'")))?;

    let container = if siblings.current.path.is_empty() {
        "/".to_string()
    } else {
        siblings.current.path.clone()
    };
    Ok(format!(
        "previous: {}\ncurrent:  {}\nnext:     {}\n",
        describe(siblings.previous),
        container,
        describe(siblings.next)
    ))
}

/// Run the nav command
pub fn run_nav(context: &CommandContext, url: &str) -> CliResult<()> {
    let config = context.load_config()?;
    let tree = sidebar_tree(&config, &TreeOptions::default())?;
    let url = resolve_url(&config, url);
    print!("{}", render_navigation(&tree, &url)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitro_tree::make_experiments_tree;

    #[test]
    fn test_render_navigation_middle_entry() {
        let tree = make_experiments_tree(["a/one.tsx", "a/two.tsx", "a/three.tsx", "b/x.tsx"]);
        let rendered = render_navigation(&tree, "/experiments/a/two").unwrap();

        assert_eq!(
            rendered,
            "previous: One (/experiments/a/one)\n\
             current:  a\n\
             next:     Three (/experiments/a/three)\n"
        );
    }

    #[test]
    fn test_render_navigation_edges() {
        let tree = make_experiments_tree(["one.tsx", "two.tsx"]);
        let rendered = render_navigation(&tree, "/experiments/one").unwrap();
        assert!(rendered.starts_with("previous: -\ncurrent:  /\n"));
    }

    #[test]
    fn test_render_navigation_unknown_url() {
        let tree = make_experiments_tree(["one.tsx"]);
        assert!(matches!(
            render_navigation(&tree, "/experiments/nope"),
            Err(CliError::NotFound(_))
        ));
    }
}
