//! The experiment tree node.

use serde::{Deserialize, Serialize};

/// One path segment of the experiments tree, either a folder or a leaf.
///
/// A node is a leaf when its `url` is non-empty. Folders always carry an
/// empty `url`; there is no separate kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Raw path segment
    pub name: String,
    /// Partial path from the root to this node, joined with `/`
    pub path: String,
    /// Human readable label derived from `name`
    pub title: String,
    /// Route of the experiment page, empty for folders
    #[serde(default)]
    pub url: String,
    /// Child nodes in display order
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a synthetic root holding the given top-level nodes.
    pub fn root(children: Vec<TreeNode>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// True when this node points at an experiment page.
    pub fn is_leaf(&self) -> bool {
        !self.url.is_empty()
    }

    /// True when this node is a directory level.
    pub fn is_folder(&self) -> bool {
        self.url.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Iterate over this node and all descendants in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Iterate over the leaves below (and including) this node in display order.
    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> {
        self.iter().filter(|node| node.is_leaf())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order iterator over a [`TreeNode`] subtree.
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
