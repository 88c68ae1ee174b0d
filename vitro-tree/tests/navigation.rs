//! End-to-end navigation scenarios: build, simplify, order, look up.

use rstest::rstest;
use vitro_tree::{
    apply_ordering, find_by_path, find_siblings_by_url, make_experiments_tree, subtree_or_self,
    Ordering, OrderingNode, TreeBuilder, TreeNode,
};

fn sample_project() -> TreeNode {
    TreeBuilder::new().build_tree([
        "pages/getting-started/index.mdx",
        "pages/components/button/primary.vitro.tsx",
        "pages/components/button/secondary.vitro.tsx",
        "pages/components/input.vitro.tsx",
        "pages/components/internal/debug.vitro.tsx",
        "pages/components/internal/trace.vitro.tsx",
        "pages/changelog.mdx",
    ])
}

#[test]
fn test_sample_project_shape() {
    let tree = sample_project();

    // `pages` is the only top-level folder and gets spliced into the root
    let names: Vec<&str> = tree.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["getting-started", "components", "changelog.mdx"]);

    let getting_started = &tree.children[0];
    assert!(getting_started.is_leaf());
    assert_eq!(getting_started.url, "/experiments/pages/getting-started");
    assert_eq!(getting_started.title, "Getting Started");
}

#[test]
fn test_ordering_from_yaml_config() {
    let mut tree = sample_project();
    let ordering: Ordering = serde_yaml_ng::from_str(
        r#"
changelog.mdx: true
getting-started: true
components:
  input.vitro: true
  internal: false
"#,
    )
    .unwrap();

    apply_ordering(&mut tree, &ordering);

    let names: Vec<&str> = tree.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["changelog.mdx", "getting-started", "components"]);

    let components = &tree.children[2];
    let names: Vec<&str> = components.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["input.vitro.tsx", "button"]);
}

#[test]
fn test_ordering_from_json_config() {
    let mut tree = sample_project();
    let ordering: Ordering =
        serde_json::from_str(r#"{"components": {"button": {"secondary.vitro": true}}}"#).unwrap();

    apply_ordering(&mut tree, &ordering);

    let button = find_by_path(&tree, "pages/components/button").unwrap();
    let names: Vec<&str> = button.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["secondary.vitro.tsx", "primary.vitro.tsx"]);
}

#[rstest]
#[case("pages/components", Some("pages/components"))]
#[case("/pages/components/", Some("pages/components"))]
#[case("pages/components/button", Some("pages/components/button"))]
#[case("pages/changelog.mdx", Some("pages/changelog.mdx"))]
#[case("pages/missing", None)]
fn test_find_by_path(#[case] query: &str, #[case] expected: Option<&str>) {
    let tree = sample_project();
    let found = find_by_path(&tree, query).map(|node| node.path.as_str());
    assert_eq!(found, expected);
}

#[test]
fn test_docs_root_falls_back_to_whole_tree() {
    let tree = sample_project();
    assert_eq!(subtree_or_self(&tree, Some("pages/components")).children.len(), 3);
    assert_eq!(subtree_or_self(&tree, Some("docs")).path, "");
    assert_eq!(subtree_or_self(&tree, Some("pages/changelog.mdx")).path, "");
}

fn top_level_names(tree: &TreeNode) -> Vec<&str> {
    tree.children.iter().map(|n| n.name.as_str()).collect()
}

#[test]
fn test_excluding_a_dotted_folder_keeps_its_neighbours() {
    let mut tree = make_experiments_tree(["v1.0/a.tsx", "v1.0/b.tsx", "v1.1/a.tsx", "v1.1/b.tsx"]);
    let ordering = Ordering::new().with("v1.0", OrderingNode::Exclude);

    apply_ordering(&mut tree, &ordering);
    assert_eq!(top_level_names(&tree), vec!["v1.1"]);
}

#[rstest]
#[case("button.tsx", vec!["button.mdx", "other.tsx"])]
#[case("button", vec!["other.tsx"])]
#[case("button.jsx", vec!["button.mdx", "other.tsx"])]
#[case("button.mdx", vec!["button.tsx", "other.tsx"])]
fn test_excluding_one_extension_keeps_the_other(
    #[case] key: &str,
    #[case] expected: Vec<&str>,
) {
    let mut tree = make_experiments_tree(["button.tsx", "button.mdx", "other.tsx"]);
    apply_ordering(&mut tree, &Ordering::new().with(key, OrderingNode::Exclude));
    assert_eq!(top_level_names(&tree), expected);
}

#[rstest]
#[case(
    "/experiments/pages/components/button/secondary.vitro",
    Some("/experiments/pages/components/button/primary.vitro"),
    None
)]
#[case(
    "/experiments/pages/components/input.vitro",
    Some(""),
    Some("")
)]
#[case(
    "/experiments/pages/getting-started",
    None,
    Some("")
)]
fn test_siblings(
    #[case] url: &str,
    #[case] previous: Option<&str>,
    #[case] next: Option<&str>,
) {
    let tree = sample_project();
    let siblings = find_siblings_by_url(&tree, url).unwrap();
    assert_eq!(siblings.previous.map(|n| n.url.as_str()), previous);
    assert_eq!(siblings.next.map(|n| n.url.as_str()), next);
}

#[test]
fn test_siblings_descend_into_a_child_before_checking_the_next() {
    let tree = make_experiments_tree(["a/x/index.tsx", "a/x/other.tsx", "a/x.tsx", "a/w.tsx"]);

    let siblings = find_siblings_by_url(&tree, "/experiments/a/x").unwrap();
    assert_eq!(siblings.current.path, "a/x");
    assert!(siblings.previous.is_none());
    assert_eq!(siblings.next.map(|n| n.url.as_str()), Some("/experiments/a/x/other"));
}

#[test]
fn test_siblings_unknown_url() {
    let tree = sample_project();
    assert!(find_siblings_by_url(&tree, "/experiments/nope").is_none());
}

#[test]
fn test_tree_serializes_for_the_preview_app() {
    let tree = TreeBuilder::new().build_tree(["a/one.tsx", "a/two.tsx"]);
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["children"][0]["name"], "one.tsx");
    assert_eq!(json["children"][0]["url"], "/experiments/a/one");
    assert_eq!(json["children"][0]["title"], "One");

    let back: TreeNode = serde_json::from_value(json).unwrap();
    assert_eq!(back, tree);
}
