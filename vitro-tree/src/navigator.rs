//! Ordering and lookups over a built experiments tree.

use crate::node::TreeNode;
use crate::ordering::{Ordering, OrderingNode};

/// Reorder and filter `tree` in place according to `order`.
///
/// At every level children listed in `order` come first, in key order, then
/// the unlisted ones in their current order. A second stable pass moves
/// folders with children after plain entries. Entries whose key maps to
/// [`OrderingNode::Exclude`] are removed. Node fields other than `children`
/// are never touched.
pub fn apply_ordering(tree: &mut TreeNode, order: &Ordering) {
    if tree.children.is_empty() {
        return;
    }

    tree.children
        .sort_by_key(|child| order.position_of(&child.name).map_or(usize::MAX, |(i, _)| i));
    tree.children.sort_by_key(|child| child.has_children());
    tree.children.retain(|child| {
        !matches!(
            order.position_of(&child.name),
            Some((_, OrderingNode::Exclude))
        )
    });

    let empty = Ordering::default();
    for child in &mut tree.children {
        let nested = order.nested(&child.name).unwrap_or(&empty);
        apply_ordering(child, nested);
    }
}

/// Find the first node, in pre-order, whose `path` equals `path`.
///
/// Leading and trailing slashes of the query are ignored. Leaves match like
/// any other node; they just end the descent. An empty tree finds nothing.
pub fn find_by_path<'a>(tree: &'a TreeNode, path: &str) -> Option<&'a TreeNode> {
    if tree.children.is_empty() {
        return None;
    }
    find_node(tree, path.trim_matches('/'))
}

fn find_node<'a>(tree: &'a TreeNode, path: &str) -> Option<&'a TreeNode> {
    if tree.path == path {
        return Some(tree);
    }
    tree.children
        .iter()
        .find_map(|child| find_node(child, path))
}

/// The folder at `path`, falling back to the whole tree when `path` is
/// unset, unknown or names a leaf.
pub fn subtree_or_self<'a>(tree: &'a TreeNode, path: Option<&str>) -> &'a TreeNode {
    path.and_then(|path| find_by_path(tree, path))
        .filter(|node| node.has_children())
        .unwrap_or(tree)
}

/// Neighbourhood of the entry whose URL was looked up.
///
/// `current` is the *container* of the matched entry, not the entry itself;
/// `previous` and `next` are the entry's siblings inside that container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Siblings<'a> {
    pub previous: Option<&'a TreeNode>,
    pub current: &'a TreeNode,
    pub next: Option<&'a TreeNode>,
}

/// Locate the entry with `url` and return its previous and next siblings.
///
/// Children are scanned depth-first: a node's own children are checked one
/// by one, descending into each before moving on to the next.
pub fn find_siblings_by_url<'a>(tree: &'a TreeNode, url: &str) -> Option<Siblings<'a>> {
    for (index, child) in tree.children.iter().enumerate() {
        if child.url == url {
            return Some(Siblings {
                previous: index.checked_sub(1).and_then(|i| tree.children.get(i)),
                current: tree,
                next: tree.children.get(index + 1),
            });
        }
        if let Some(found) = find_siblings_by_url(child, url) {
            return Some(found);
        }
    }
    None
}
