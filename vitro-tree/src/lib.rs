//! # Vitro Tree
//!
//! Turns the flat list of discovered experiment files into the navigation
//! tree shown by the Vitro preview app, and answers the lookups the app needs
//! to render it.
//!
//! ```
//! use vitro_tree::{find_siblings_by_url, TreeBuilder};
//!
//! let tree = TreeBuilder::new().build_tree(["a/one.tsx", "a/two.tsx", "a/three.tsx"]);
//! let siblings = find_siblings_by_url(&tree, "/experiments/a/two").unwrap();
//!
//! assert_eq!(siblings.previous.unwrap().url, "/experiments/a/one");
//! assert_eq!(siblings.next.unwrap().url, "/experiments/a/three");
//! ```
//!
//! Everything in this crate is pure: no I/O, no global state.

pub mod builder;
pub mod format;
pub mod navigator;
pub mod node;
pub mod ordering;

pub use builder::{make_experiments_tree, TreeBuilder, DEFAULT_DUMMY_NAMES};
pub use format::DEFAULT_URL_PREFIX;
pub use navigator::{apply_ordering, find_by_path, find_siblings_by_url, subtree_or_self, Siblings};
pub use node::TreeNode;
pub use ordering::{Ordering, OrderingNode};
