//! Property tests for the insertion index calculation.

use proptest::prelude::*;

use drilltree::compute_index;
use drilltree::domain::entities::{InsertionContext, ViewRecord};

fn siblings() -> impl Strategy<Value = Vec<ViewRecord>> {
    (0usize..10).prop_map(|count| {
        (0..count)
            .map(|i| ViewRecord::view(format!("v{}", i), format!("View {}", i)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The index always lies in `[0, siblings]`.
    #[test]
    fn property_index_in_range(siblings in siblings(), hint in proptest::option::of(0usize..32)) {
        let count = siblings.len();
        let mut context = InsertionContext::new(None, siblings);
        if let Some(hint) = hint {
            context = context.with_position_hint(hint);
        }
        let index = compute_index(&context);
        prop_assert!(index <= count);
        match hint {
            Some(h) => prop_assert_eq!(index, h.min(count)),
            None => prop_assert_eq!(index, count),
        }
    }
}
