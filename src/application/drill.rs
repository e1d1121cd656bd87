//! Drill path indicator
//!
//! `DrillBar` derives the drill path from a chart configuration, exposes a
//! positional view model for rendering, and forwards selections to the owner
//! through a callback. A selection also becomes the active level; the owner
//! can override it later through [`DrillBar::set_active_level`].

use serde::Serialize;

use crate::domain::entities::{ChartConfig, DrillState, FieldSpec};
use crate::domain::services::derive_path;

/// One rendered node of the drill path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillSegment {
    /// Position in the path; the segment's identity
    pub position: usize,
    pub uid: String,
    pub label: String,
    pub is_active: bool,
}

/// A drill path element or the separator between two of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillItem<'a> {
    Node(&'a DrillSegment),
    Separator,
}

/// Positional view model of a drill path
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DrillPathView {
    pub segments: Vec<DrillSegment>,
}

impl DrillPathView {
    /// Build the view. `active` outside the path marks nothing active.
    pub fn new(path: &[FieldSpec], active: Option<usize>) -> Self {
        let segments = path
            .iter()
            .enumerate()
            .map(|(position, field)| DrillSegment {
                position,
                uid: field.uid.clone(),
                label: field.render_name(),
                is_active: active == Some(position),
            })
            .collect();
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn active(&self) -> Option<&DrillSegment> {
        self.segments.iter().find(|s| s.is_active)
    }

    /// Segments interleaved with separators; none after the last segment
    pub fn items(&self) -> Vec<DrillItem<'_>> {
        let mut items = Vec::with_capacity(self.segments.len() * 2);
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                items.push(DrillItem::Separator);
            }
            items.push(DrillItem::Node(segment));
        }
        items
    }
}

/// Drill path bound to a selection callback
pub struct DrillBar<F>
where
    F: FnMut(usize),
{
    path: Vec<FieldSpec>,
    state: Option<DrillState>,
    on_select: F,
}

impl<F> DrillBar<F>
where
    F: FnMut(usize),
{
    /// Build from an optional chart configuration
    pub fn new(config: Option<&ChartConfig>, state: Option<DrillState>, on_select: F) -> Self {
        let fields = config.map(ChartConfig::drill_fields);
        Self::from_fields(fields.as_deref(), state, on_select)
    }

    /// Build from an optional raw field list
    pub fn from_fields(
        fields: Option<&[FieldSpec]>,
        state: Option<DrillState>,
        on_select: F,
    ) -> Self {
        Self {
            path: derive_path(fields),
            state,
            on_select,
        }
    }

    pub fn path(&self) -> &[FieldSpec] {
        &self.path
    }

    pub fn state(&self) -> Option<DrillState> {
        self.state
    }

    /// Current view model
    pub fn view(&self) -> DrillPathView {
        DrillPathView::new(&self.path, self.state.map(|s| s.current))
    }

    /// Click on segment `position`: notify the owner, then make it active.
    /// Returns false if no such segment exists.
    pub fn select(&mut self, position: usize) -> bool {
        if position >= self.path.len() {
            tracing::debug!(position, len = self.path.len(), "drill selection out of range");
            return false;
        }
        (self.on_select)(position);
        self.set_active_level(position);
        true
    }

    /// Record the level the owner settled on
    pub fn set_active_level(&mut self, level: usize) {
        self.state
            .get_or_insert_with(DrillState::default)
            .set_active_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn country_city() -> Vec<FieldSpec> {
        vec![
            FieldSpec::dimension("1", "country").with_alias("Country"),
            FieldSpec::dimension("2", "city").with_alias("City"),
        ]
    }

    #[test]
    fn active_segment_and_single_separator() {
        let view = DrillPathView::new(&country_city(), Some(1));

        assert!(!view.segments[0].is_active);
        assert!(view.segments[1].is_active);
        assert_eq!(view.active().map(|s| s.label.as_str()), Some("City"));

        let items = view.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], DrillItem::Separator);
        assert!(matches!(items[2], DrillItem::Node(_)));
    }

    #[test]
    fn empty_path_renders_nothing() {
        let view = DrillPathView::new(&[], Some(0));
        assert!(view.is_empty());
        assert!(view.items().is_empty());
    }

    #[test]
    fn absent_or_out_of_range_active_marks_nothing() {
        assert!(DrillPathView::new(&country_city(), None).active().is_none());
        assert!(DrillPathView::new(&country_city(), Some(2)).active().is_none());
        assert!(DrillPathView::new(&country_city(), Some(usize::MAX))
            .active()
            .is_none());
    }

    #[test]
    fn duplicate_uids_are_positionally_distinct() {
        let fields = vec![
            FieldSpec::dimension("x", "country"),
            FieldSpec::dimension("x", "country"),
        ];
        let view = DrillPathView::new(&fields, Some(1));
        assert_eq!(view.segments[0].position, 0);
        assert_eq!(view.segments[1].position, 1);
        assert!(!view.segments[0].is_active);
        assert!(view.segments[1].is_active);
    }

    #[test]
    fn select_invokes_callback() {
        let selected = RefCell::new(Vec::new());
        let mut bar = DrillBar::from_fields(Some(&country_city()), None, |i| {
            selected.borrow_mut().push(i)
        });

        assert!(bar.select(0));
        assert!(bar.select(1));
        assert!(!bar.select(2));
        drop(bar);
        assert_eq!(selected.into_inner(), vec![0, 1]);
    }

    #[test]
    fn select_makes_segment_active() {
        let mut bar = DrillBar::from_fields(Some(&country_city()), None, |_| {});

        assert!(bar.select(1));
        assert_eq!(bar.state(), Some(DrillState::new(1)));
        assert_eq!(bar.view().active().map(|s| s.label.as_str()), Some("City"));

        assert!(!bar.select(5));
        assert_eq!(bar.state(), Some(DrillState::new(1)));
    }

    #[test]
    fn set_active_level_updates_view() {
        let mut bar = DrillBar::from_fields(Some(&country_city()), None, |_| {});
        assert!(bar.view().active().is_none());

        bar.set_active_level(0);
        assert_eq!(bar.state(), Some(DrillState::new(0)));
        assert_eq!(bar.view().active().map(|s| s.position), Some(0));
    }

    #[test]
    fn absent_config_has_empty_path() {
        let bar = DrillBar::new(None, Some(DrillState::new(0)), |_| {});
        assert!(bar.path().is_empty());
        assert!(bar.view().is_empty());
    }
}
