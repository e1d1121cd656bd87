//! Build sidebar trees from flat view records
//!
//! Sibling order equals array order in the returned forest. The builder
//! establishes that order by sorting siblings on `index` (records without an
//! index go last, ties keep input order), so consumers such as the insertion
//! calculator can rely on it.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::domain::entities::{IconRule, TreeNode, ViewRecord};

/// Build the live view tree.
///
/// Records whose parent is missing from the set are promoted to roots.
/// Folders listed in `expanded` are marked expanded.
pub fn build_view_tree(records: &[ViewRecord], expanded: &HashSet<String>) -> Vec<TreeNode> {
    let known: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();

    let mut by_parent: HashMap<Option<&str>, Vec<&ViewRecord>> = HashMap::new();
    for record in records {
        let parent = record.parent_key().filter(|p| known.contains(p));
        by_parent.entry(parent).or_default().push(record);
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by(|a, b| compare_index(a.index, b.index));
    }

    let mut visiting = HashSet::new();
    build_level(None, &by_parent, expanded, &mut visiting)
}

fn build_level<'a>(
    parent: Option<&'a str>,
    by_parent: &HashMap<Option<&'a str>, Vec<&'a ViewRecord>>,
    expanded: &HashSet<String>,
    visiting: &mut HashSet<String>,
) -> Vec<TreeNode> {
    let Some(siblings) = by_parent.get(&parent) else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(siblings.len());
    for &record in siblings {
        // Parent cycles are a collaborator bug; cut them instead of recursing forever
        if !visiting.insert(record.id.clone()) {
            continue;
        }
        let children = build_level(Some(record.id.as_str()), by_parent, expanded, visiting);
        visiting.remove(&record.id);

        nodes.push(TreeNode {
            key: record.id.clone(),
            title: record.name.clone(),
            parent_id: record.parent_key().map(str::to_string),
            is_folder: record.is_folder,
            children,
            disabled: record.delete_loading,
            expanded: record.is_folder && expanded.contains(&record.id),
            icon: IconRule::for_live(record.is_folder),
        });
    }
    nodes
}

/// Build the flat recycle bin list from archived records
pub fn build_recycle_list(archived: &[ViewRecord]) -> Vec<TreeNode> {
    archived
        .iter()
        .map(|record| TreeNode {
            key: record.id.clone(),
            title: record.name.clone(),
            parent_id: record.parent_key().map(str::to_string),
            is_folder: record.is_folder,
            children: Vec::new(),
            disabled: record.delete_loading,
            expanded: false,
            icon: IconRule::for_archived(record.is_folder),
        })
        .collect()
}

/// Sort records into display order
pub fn sort_by_display_order(records: &mut [ViewRecord]) {
    records.sort_by(|a, b| compare_index(a.index, b.index));
}

fn compare_index(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
