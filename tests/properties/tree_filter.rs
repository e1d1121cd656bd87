//! Property tests for forest filtering.

use proptest::prelude::*;

use drilltree::domain::entities::{find_in_forest, forest_len, TreeNode};
use drilltree::domain::services::{filter_by_title, title_matches};

fn title() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Ca-c ]{0,6}").unwrap()
}

fn forest() -> impl Strategy<Value = Vec<TreeNode>> {
    let leaf = title().prop_map(|t| TreeNode::view("", t));
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        (title(), proptest::collection::vec(inner, 0..4)).prop_map(|(t, children)| {
            children
                .into_iter()
                .fold(TreeNode::folder("", t), |folder, child| folder.with_child(child))
        })
    });
    proptest::collection::vec(tree, 0..4).prop_map(assign_keys)
}

/// Give every node a unique key in pre-order
fn assign_keys(mut forest: Vec<TreeNode>) -> Vec<TreeNode> {
    fn walk(nodes: &mut [TreeNode], parent: Option<&str>, next: &mut usize) {
        for node in nodes {
            node.key = format!("n{}", next);
            node.parent_id = parent.map(str::to_string);
            *next += 1;
            let key = node.key.clone();
            walk(&mut node.children, Some(&key), next);
        }
    }
    let mut next = 0;
    walk(&mut forest, None, &mut next);
    forest
}

fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Ca-c]{1,2}").unwrap()
}

/// Every kept node matches or keeps a descendant, and exists in the source
fn check_sound(kept: &[TreeNode], source: &[TreeNode], query: &str) -> Result<(), TestCaseError> {
    for node in kept {
        prop_assert!(
            title_matches(query, node) || !node.children.is_empty(),
            "node {} kept without reason",
            node.key
        );
        let original = find_in_forest(source, &node.key);
        prop_assert!(original.is_some(), "node {} was fabricated", node.key);
        prop_assert_eq!(&original.unwrap().title, &node.title);
        check_sound(&node.children, source, query)?;
    }
    Ok(())
}

/// Every matching source node survives
fn check_complete(source: &[TreeNode], kept: &[TreeNode], query: &str) -> Result<(), TestCaseError> {
    for node in source {
        if title_matches(query, node) {
            prop_assert!(
                find_in_forest(kept, &node.key).is_some(),
                "match {} was dropped",
                node.key
            );
        }
        check_complete(&node.children, kept, query)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Kept nodes match or have a kept descendant; nothing is invented.
    #[test]
    fn property_filter_is_sound(forest in forest(), query in query()) {
        let kept = filter_by_title(&forest, &query);
        check_sound(&kept, &forest, &query)?;
    }

    /// PROPERTY: No matching node is lost.
    #[test]
    fn property_filter_is_complete(forest in forest(), query in query()) {
        let kept = filter_by_title(&forest, &query);
        check_complete(&forest, &kept, &query)?;
        prop_assert!(forest_len(&kept) <= forest_len(&forest));
    }

    /// PROPERTY: An empty or blank query returns the forest unchanged.
    #[test]
    fn property_empty_query_is_identity(forest in forest(), blank in "[ ]{0,3}") {
        prop_assert_eq!(filter_by_title(&forest, &blank), forest);
    }

    /// PROPERTY: Filtering twice with the same query changes nothing.
    #[test]
    fn property_filter_is_idempotent(forest in forest(), query in query()) {
        let once = filter_by_title(&forest, &query);
        let twice = filter_by_title(&once, &query);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Matching ignores case.
    #[test]
    fn property_filter_ignores_case(forest in forest(), query in query()) {
        prop_assert_eq!(
            filter_by_title(&forest, &query.to_uppercase()),
            filter_by_title(&forest, &query.to_lowercase())
        );
    }
}
