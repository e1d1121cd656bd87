//! Insertion index calculation for new nodes
//!
//! The calculator assumes sibling order equals the order of
//! `existing_siblings`; see the tree builder for where that order is set.

use crate::domain::entities::{InsertionContext, ViewRecord};

use super::tree_builder::sort_by_display_order;

/// 0-based position among the existing siblings for a new node.
///
/// Without a hint the node is appended. A hint wins and is clamped to
/// `[0, siblings.len()]`.
pub fn compute_index(context: &InsertionContext) -> usize {
    let count = context.existing_siblings.len();
    match context.position_hint {
        Some(hint) => hint.min(count),
        None => count,
    }
}

/// Records sharing `parent_id`, in input order.
///
/// An empty parent id means root. A parent that matches no record simply
/// yields whatever records claim it, possibly none.
pub fn siblings_of(parent_id: Option<&str>, records: &[ViewRecord]) -> Vec<ViewRecord> {
    let parent_id = parent_id.filter(|p| !p.is_empty());
    records
        .iter()
        .filter(|r| r.parent_key() == parent_id)
        .cloned()
        .collect()
}

/// Build the context for adding under `parent_id`, siblings in display order
pub fn insertion_context(
    parent_id: Option<&str>,
    records: &[ViewRecord],
    position_hint: Option<usize>,
) -> InsertionContext {
    let mut existing_siblings = siblings_of(parent_id, records);
    sort_by_display_order(&mut existing_siblings);
    InsertionContext {
        declared_parent_id: parent_id.filter(|p| !p.is_empty()).map(str::to_string),
        existing_siblings,
        position_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_siblings() -> Vec<ViewRecord> {
        vec![
            ViewRecord::view("a", "A"),
            ViewRecord::view("b", "B"),
            ViewRecord::view("c", "C"),
        ]
    }

    #[test]
    fn no_siblings_no_hint_is_zero() {
        assert_eq!(compute_index(&InsertionContext::default()), 0);
    }

    #[test]
    fn appends_without_hint() {
        let ctx = InsertionContext::new(None, three_siblings());
        assert_eq!(compute_index(&ctx), 3);
    }

    #[test]
    fn hint_wins() {
        let ctx = InsertionContext::new(None, three_siblings()).with_position_hint(1);
        assert_eq!(compute_index(&ctx), 1);
    }

    #[test]
    fn hint_is_clamped() {
        let ctx = InsertionContext::new(None, three_siblings()).with_position_hint(10);
        assert_eq!(compute_index(&ctx), 3);
    }

    #[test]
    fn siblings_share_parent() {
        let records = vec![
            ViewRecord::folder("f", "F"),
            ViewRecord::view("a", "A").with_parent("f"),
            ViewRecord::view("b", "B"),
            ViewRecord::view("c", "C").with_parent("f"),
        ];
        let in_folder: Vec<_> = siblings_of(Some("f"), &records)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(in_folder, vec!["a", "c"]);

        let roots: Vec<_> = siblings_of(Some(""), &records)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(roots, vec!["f", "b"]);
    }

    #[test]
    fn context_siblings_are_in_display_order() {
        let records = vec![
            ViewRecord::view("a", "A").with_index(2.0),
            ViewRecord::view("b", "B").with_index(0.0),
            ViewRecord::view("c", "C").with_parent("x"),
        ];
        let ctx = insertion_context(None, &records, Some(1));
        let ids: Vec<_> = ctx.existing_siblings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(compute_index(&ctx), 1);
    }

    #[test]
    fn unknown_parent_has_no_siblings() {
        let ctx = insertion_context(Some("missing"), &three_siblings(), None);
        assert_eq!(ctx.declared_parent_id.as_deref(), Some("missing"));
        assert_eq!(compute_index(&ctx), 0);
    }
}
