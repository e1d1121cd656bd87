//! Drill path derivation
//!
//! The drill path is the ordered list of drill-eligible fields of a chart.
//! It is recomputed on every configuration change and never stored.

use crate::domain::entities::{ChartConfig, FieldSpec};

/// Derive the drill path from a chart's field list.
///
/// Keeps drill-eligible fields in their original relative order. Absent input
/// or a list without eligible fields yields an empty path.
pub fn derive_path(fields: Option<&[FieldSpec]>) -> Vec<FieldSpec> {
    fields
        .unwrap_or_default()
        .iter()
        .filter(|f| f.category.is_drillable())
        .cloned()
        .collect()
}

impl ChartConfig {
    /// Drill path of this chart: drillable group sections, dimension fields only
    pub fn drill_path(&self) -> Vec<FieldSpec> {
        derive_path(Some(&self.drill_fields()))
    }
}
