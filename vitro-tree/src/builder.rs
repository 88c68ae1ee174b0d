//! Construction of the experiments tree from flat path lists.

use crate::format::{format_title, format_url, normalize_url_prefix, DEFAULT_URL_PREFIX};
use crate::node::TreeNode;

/// Leaf titles that are absorbed into their parent folder by [`TreeBuilder::simplify`].
pub const DEFAULT_DUMMY_NAMES: &[&str] = &["index", "experiment", "story"];

/// Builds [`TreeNode`] trees from slash-delimited relative paths.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    url_prefix: String,
    dummy_names: Vec<String>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            dummy_names: DEFAULT_DUMMY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different route namespace for leaf URLs.
    pub fn with_url_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.url_prefix = normalize_url_prefix(prefix.as_ref());
        self
    }

    /// Replace the set of dummy leaf names.
    ///
    /// Names are normalized like titles, so `my_story` and `myStory` both
    /// match a leaf called `my-story.tsx`.
    pub fn with_dummy_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dummy_names = names
            .into_iter()
            .map(|name| format_title(&name.into()).to_lowercase())
            .collect();
        self
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn dummy_names(&self) -> &[String] {
        &self.dummy_names
    }

    /// Arrange paths into a list of top-level nodes.
    ///
    /// Children appear in first-discovery order. Segments that are empty
    /// after trimming are dropped, so `"a//b/"` is the same as `"a/b"`.
    pub fn build<I, S>(&self, paths: I) -> Vec<TreeNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roots = Vec::new();
        for path in paths {
            let segments: Vec<&str> = path
                .as_ref()
                .split('/')
                .filter(|segment| !segment.trim().is_empty())
                .collect();
            self.insert(&mut roots, &segments);
        }
        roots
    }

    fn insert(&self, roots: &mut Vec<TreeNode>, segments: &[&str]) {
        let mut level = roots;
        for (depth, &segment) in segments.iter().enumerate() {
            let is_last = depth + 1 == segments.len();
            let index = match level.iter().position(|node| node.name == segment) {
                Some(index) => {
                    if !is_last {
                        // a file that turns out to also be a directory stops being a leaf
                        level[index].url.clear();
                    }
                    index
                }
                None => {
                    let path = segments[..=depth].join("/");
                    let url = if is_last {
                        format_url(&path, &self.url_prefix)
                    } else {
                        String::new()
                    };
                    level.push(TreeNode {
                        name: segment.to_string(),
                        title: format_title(segment),
                        path,
                        url,
                        children: Vec::new(),
                    });
                    level.len() - 1
                }
            };
            level = &mut level[index].children;
        }
    }

    /// Collapse folders that add no navigational information.
    ///
    /// Works bottom-up: children are simplified before their parent is
    /// examined. A node with a single child that has children takes over the
    /// grandchildren; a node whose single child is a dummy-named leaf takes
    /// over that leaf's URL and becomes a leaf itself.
    pub fn simplify(&self, mut node: TreeNode) -> TreeNode {
        node.children = std::mem::take(&mut node.children)
            .into_iter()
            .map(|child| self.simplify(child))
            .collect();

        if node.children.len() != 1 {
            return node;
        }

        if node.children[0].has_children() {
            if let Some(child) = node.children.pop() {
                node.children = child.children;
            }
        } else if self.is_dummy(&node.children[0]) {
            if let Some(child) = node.children.pop() {
                if node.url.is_empty() {
                    node.url = child.url;
                }
            }
        }
        node
    }

    /// Build and simplify a complete tree under a synthetic root.
    pub fn build_tree<I, S>(&self, paths: I) -> TreeNode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.simplify(TreeNode::root(self.build(paths)))
    }

    fn is_dummy(&self, node: &TreeNode) -> bool {
        let title = node.title.to_lowercase();
        self.dummy_names.iter().any(|name| *name == title)
    }
}

/// Build and simplify a tree with the default builder settings.
pub fn make_experiments_tree<I, S>(paths: I) -> TreeNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TreeBuilder::default().build_tree(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_build_shares_common_prefixes() {
        let roots = TreeBuilder::new().build(["a/one.tsx", "a/two.tsx", "b.tsx"]);

        assert_eq!(names(&roots), vec!["a", "b.tsx"]);
        assert_eq!(names(&roots[0].children), vec!["one.tsx", "two.tsx"]);
        assert_eq!(roots[0].url, "");
        assert_eq!(roots[0].title, "A");
        assert_eq!(roots[0].children[1].path, "a/two.tsx");
        assert_eq!(roots[0].children[1].url, "/experiments/a/two");
        assert_eq!(roots[1].url, "/experiments/b");
    }

    #[test]
    fn test_build_keeps_first_discovery_order() {
        let roots = TreeBuilder::new().build(["z/x.tsx", "a/y.tsx", "z/a.tsx"]);
        assert_eq!(names(&roots), vec!["z", "a"]);
        assert_eq!(names(&roots[0].children), vec!["x.tsx", "a.tsx"]);
    }

    #[test]
    fn test_build_deduplicates_paths() {
        let roots = TreeBuilder::new().build(["a/one.tsx", "a/one.tsx"]);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children.len(), 1);
    }

    #[test]
    fn test_build_drops_empty_segments() {
        let roots = TreeBuilder::new().build(["/a//one.tsx/", "", "   ", "//"]);
        assert_eq!(names(&roots), vec!["a"]);
        assert_eq!(roots[0].children[0].path, "a/one.tsx");
    }

    #[test]
    fn test_build_clears_url_of_file_that_becomes_directory() {
        let roots = TreeBuilder::new().build(["a/b", "a/b/c.tsx"]);
        let b = &roots[0].children[0];
        assert!(b.is_folder());
        assert_eq!(b.children.len(), 1);
    }

    #[test]
    fn test_build_with_custom_prefix() {
        let roots = TreeBuilder::new()
            .with_url_prefix("stories")
            .build(["a/one.tsx"]);
        assert_eq!(roots[0].children[0].url, "/stories/a/one");
    }

    #[test]
    fn test_simplify_absorbs_dummy_leaf() {
        let tree = make_experiments_tree(["docs/index.mdx"]);

        assert_eq!(tree.children.len(), 1);
        let docs = &tree.children[0];
        assert_eq!(docs.name, "docs");
        assert_eq!(docs.url, "/experiments/docs");
        assert!(docs.children.is_empty());
    }

    #[test]
    fn test_simplify_keeps_existing_url_when_absorbing() {
        let builder = TreeBuilder::new();
        let node = TreeNode {
            name: "a".to_string(),
            path: "a".to_string(),
            title: "A".to_string(),
            url: "/experiments/keep".to_string(),
            children: builder.build(["a/story.tsx"]).remove(0).children,
        };
        let simplified = builder.simplify(node);
        assert_eq!(simplified.url, "/experiments/keep");
        assert!(simplified.children.is_empty());
    }

    #[test]
    fn test_simplify_splices_single_child_folders() {
        let tree = make_experiments_tree(["a/b/c.tsx"]);

        // the root takes over `a`'s children, `a` takes over `b`'s
        assert_eq!(tree.children.len(), 1);
        let c = &tree.children[0];
        assert_eq!(c.name, "c.tsx");
        assert_eq!(c.path, "a/b/c.tsx");
        assert_eq!(c.url, "/experiments/a/b/c");
    }

    #[test]
    fn test_simplify_does_not_absorb_named_leaf() {
        let builder = TreeBuilder::new();
        let a = builder.build(["a/button.tsx"]).remove(0);
        let simplified = builder.simplify(a);

        assert_eq!(simplified.name, "a");
        assert!(simplified.is_folder());
        assert_eq!(names(&simplified.children), vec!["button.tsx"]);
    }

    #[test]
    fn test_simplify_turns_index_folder_into_leaf() {
        let tree = make_experiments_tree(["a/b/index.tsx", "other.tsx"]);

        let a = &tree.children[0];
        assert_eq!(a.name, "a");
        assert!(a.is_folder());
        assert_eq!(names(&a.children), vec!["b"]);
        assert!(a.children[0].children.is_empty());
        assert_eq!(a.children[0].url, "/experiments/a/b");
    }

    #[test]
    fn test_simplify_collapses_dummy_chain_transitively() {
        let tree = make_experiments_tree(["a/story/index.tsx", "other.tsx"]);

        let a = &tree.children[0];
        assert_eq!(a.name, "a");
        assert!(a.children.is_empty());
        assert_eq!(a.url, "/experiments/a/story");
    }

    #[test]
    fn test_simplify_leaves_multi_child_folders() {
        let tree = make_experiments_tree(["a/one.tsx", "a/two.tsx", "b/three.tsx", "b/four.tsx"]);
        assert_eq!(names(&tree.children), vec!["a", "b"]);
        assert_eq!(tree.children[0].children.len(), 2);
    }

    #[test]
    fn test_simplify_with_custom_dummy_names() {
        let builder = TreeBuilder::new().with_dummy_names(["Main"]);
        let tree = builder.build_tree(["docs/main.tsx", "other/index.tsx"]);

        assert!(tree.children[0].is_leaf());
        assert_eq!(tree.children[0].url, "/experiments/docs/main");
        assert!(tree.children[1].is_folder());
        assert_eq!(names(&tree.children[1].children), vec!["index.tsx"]);
    }

    #[rstest]
    #[case("my_story")]
    #[case("my-story")]
    #[case("myStory")]
    #[case("My Story")]
    fn test_custom_dummy_names_are_normalized_like_titles(#[case] configured: &str) {
        let builder = TreeBuilder::new().with_dummy_names([configured]);
        assert_eq!(builder.dummy_names(), ["my story".to_string()]);

        let tree = builder.build_tree(["docs/my_story.tsx", "other/a.tsx", "other/b.tsx"]);
        assert!(tree.children[0].is_leaf());
        assert_eq!(tree.children[0].url, "/experiments/docs/my_story");
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let builder = TreeBuilder::new();
        let once = builder.build_tree(["a/b/c.tsx", "a/b/d.tsx", "x/y/index.tsx", "q/r/s/t.tsx"]);
        let twice = builder.simplify(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_build_empty_input() {
        let tree = make_experiments_tree(Vec::<String>::new());
        assert!(tree.children.is_empty());
    }
}
