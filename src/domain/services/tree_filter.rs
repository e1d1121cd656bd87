//! Hierarchy-preserving search over a forest
//!
//! A node survives a query if it matches directly or if at least one of its
//! descendants survives. Survivors keep every attribute; only `children` is
//! pruned. Flat lists are forests without children and go through the same
//! path.

use crate::domain::entities::TreeNode;

/// Filter behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// A directly matching node keeps all of its original children
    pub keep_matched_subtree: bool,
}

/// Case-insensitive substring match against the node title
pub fn title_matches(query: &str, node: &TreeNode) -> bool {
    node.title.to_lowercase().contains(&query.to_lowercase())
}

/// Filter with the default title predicate and default options
pub fn filter_by_title(forest: &[TreeNode], query: &str) -> Vec<TreeNode> {
    filter_forest(forest, query, title_matches)
}

/// Filter a forest with a custom predicate.
///
/// An empty or whitespace-only query returns the forest unchanged.
pub fn filter_forest<P>(forest: &[TreeNode], query: &str, predicate: P) -> Vec<TreeNode>
where
    P: Fn(&str, &TreeNode) -> bool,
{
    filter_forest_with(forest, query, &predicate, FilterOptions::default())
}

/// Filter a forest with a custom predicate and options
pub fn filter_forest_with<P>(
    forest: &[TreeNode],
    query: &str,
    predicate: &P,
    options: FilterOptions,
) -> Vec<TreeNode>
where
    P: Fn(&str, &TreeNode) -> bool,
{
    if query.trim().is_empty() {
        return forest.to_vec();
    }
    prune(forest, query, predicate, options)
}

fn prune<P>(nodes: &[TreeNode], query: &str, predicate: &P, options: FilterOptions) -> Vec<TreeNode>
where
    P: Fn(&str, &TreeNode) -> bool,
{
    nodes
        .iter()
        .filter_map(|node| {
            let is_match = predicate(query, node);
            let children = if is_match && options.keep_matched_subtree {
                node.children.clone()
            } else {
                prune(&node.children, query, predicate, options)
            };

            if is_match || !children.is_empty() {
                Some(TreeNode {
                    children,
                    ..node.clone_shallow()
                })
            } else {
                None
            }
        })
        .collect()
}

/// Expand every folder that still has children so matches are visible
pub fn expand_survivors(forest: &mut [TreeNode]) {
    for node in forest {
        if !node.children.is_empty() {
            node.expanded = true;
            expand_survivors(&mut node.children);
        }
    }
}

impl TreeNode {
    /// Copy of this node without its children
    fn clone_shallow(&self) -> TreeNode {
        TreeNode {
            key: self.key.clone(),
            title: self.title.clone(),
            parent_id: self.parent_id.clone(),
            is_folder: self.is_folder,
            children: Vec::new(),
            disabled: self.disabled,
            expanded: self.expanded,
            icon: self.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `[{A, [B, C]}, {D}]`
    fn sample_forest() -> Vec<TreeNode> {
        vec![
            TreeNode::folder("a", "A")
                .with_child(TreeNode::view("b", "B"))
                .with_child(TreeNode::view("c", "C")),
            TreeNode::view("d", "D"),
        ]
    }

    fn keys(forest: &[TreeNode]) -> Vec<String> {
        let mut out = Vec::new();
        for node in forest {
            out.push(node.key.clone());
            out.extend(keys(&node.children));
        }
        out
    }

    #[test]
    fn descendant_match_pulls_in_ancestor() {
        let result = filter_by_title(&sample_forest(), "b");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "a");
        assert_eq!(result[0].children.len(), 1);
        assert_eq!(result[0].children[0].key, "b");
    }

    #[test]
    fn empty_query_is_identity() {
        let forest = sample_forest();
        assert_eq!(filter_by_title(&forest, ""), forest);
        assert_eq!(filter_by_title(&forest, "   "), forest);
    }

    #[test]
    fn matching_folder_does_not_keep_all_children() {
        let forest = vec![TreeNode::folder("s", "Sales")
            .with_child(TreeNode::view("r", "Revenue"))
            .with_child(TreeNode::view("c", "Sales by city"))];

        let result = filter_by_title(&forest, "sales");
        assert_eq!(keys(&result), vec!["s", "c"]);
    }

    #[test]
    fn keep_matched_subtree_keeps_children() {
        let forest = vec![TreeNode::folder("s", "Sales")
            .with_child(TreeNode::view("r", "Revenue"))
            .with_child(TreeNode::view("c", "Cost"))];

        let options = FilterOptions {
            keep_matched_subtree: true,
        };
        let result = filter_forest_with(&forest, "sales", &title_matches, options);
        assert_eq!(keys(&result), vec!["s", "r", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let forest = vec![TreeNode::view("1", "Monthly Revenue")];
        assert_eq!(filter_by_title(&forest, "REVENUE").len(), 1);
        assert_eq!(filter_by_title(&forest, "mOnThLy").len(), 1);
    }

    #[test]
    fn substring_not_tokenized() {
        let forest = vec![TreeNode::view("1", "Monthly Revenue")];
        assert!(filter_by_title(&forest, "monthly  revenue").is_empty());
        assert_eq!(filter_by_title(&forest, "ly rev").len(), 1);
    }

    #[test]
    fn no_match_and_empty_forest_both_empty() {
        assert!(filter_by_title(&sample_forest(), "zzz").is_empty());
        assert!(filter_by_title(&[], "a").is_empty());
    }

    #[test]
    fn survivors_keep_attributes() {
        let mut folder = TreeNode::folder("a", "A").with_child(TreeNode::view("b", "B"));
        folder.disabled = true;
        folder.expanded = true;

        let result = filter_by_title(&[folder], "b");
        assert!(result[0].disabled);
        assert!(result[0].expanded);
        assert_eq!(result[0].title, "A");
    }

    #[test]
    fn flat_list_is_filtered() {
        let list = vec![
            TreeNode::view("1", "Old report"),
            TreeNode::view("2", "Draft"),
            TreeNode::view("3", "Report v2"),
        ];
        assert_eq!(keys(&filter_by_title(&list, "report")), vec!["1", "3"]);
    }

    #[test]
    fn custom_predicate_is_used() {
        let forest = sample_forest();
        let by_key = |q: &str, n: &TreeNode| n.key == q;
        let result = filter_forest(&forest, "c", by_key);
        assert_eq!(keys(&result), vec!["a", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let forest = sample_forest();
        let once = filter_by_title(&forest, "c");
        let twice = filter_by_title(&once, "c");
        assert_eq!(once, twice);
    }

    #[test]
    fn expand_survivors_opens_folders_with_children() {
        let mut result = filter_by_title(&sample_forest(), "b");
        assert!(!result[0].expanded);
        expand_survivors(&mut result);
        assert!(result[0].expanded);
        assert!(!result[0].children[0].expanded);
    }
}
