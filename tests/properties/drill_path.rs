//! Property tests for drill path derivation.

use proptest::prelude::*;

use drilltree::application::DrillPathView;
use drilltree::derive_path;
use drilltree::domain::entities::{FieldCategory, FieldSpec};

fn category() -> impl Strategy<Value = FieldCategory> {
    prop_oneof![
        Just(FieldCategory::Dimension),
        Just(FieldCategory::Measure),
        Just(FieldCategory::Filter),
        Just(FieldCategory::Other),
    ]
}

fn fields() -> impl Strategy<Value = Vec<FieldSpec>> {
    proptest::collection::vec(category(), 0..12).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| FieldSpec {
                category,
                ..FieldSpec::dimension(i.to_string(), format!("col{}", i))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The path is exactly the drill-eligible fields, in input order.
    #[test]
    fn property_path_is_ordered_eligible_subsequence(fields in fields()) {
        let path = derive_path(Some(&fields));
        let expected: Vec<FieldSpec> = fields
            .iter()
            .filter(|f| f.category == FieldCategory::Dimension)
            .cloned()
            .collect();
        prop_assert_eq!(path, expected);
    }

    /// PROPERTY: At most one segment is active, and only for an in-range level.
    #[test]
    fn property_single_active_segment(fields in fields(), active in proptest::option::of(0usize..16)) {
        let path = derive_path(Some(&fields));
        let view = DrillPathView::new(&path, active);
        let active_count = view.segments.iter().filter(|s| s.is_active).count();
        let in_range = active.is_some_and(|a| a < path.len());
        prop_assert_eq!(active_count, usize::from(in_range));
    }

    /// PROPERTY: Separators only sit between two nodes.
    #[test]
    fn property_separator_count(fields in fields()) {
        let path = derive_path(Some(&fields));
        let view = DrillPathView::new(&path, None);
        let separators = view.items().len() - view.segments.len();
        prop_assert_eq!(separators, path.len().saturating_sub(1));
    }
}

#[test]
fn absent_fields_give_empty_path() {
    assert!(derive_path(None).is_empty());
    assert!(derive_path(Some(&[])).is_empty());
}
