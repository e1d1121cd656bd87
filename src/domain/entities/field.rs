//! Chart field configuration
//!
//! A chart configuration is a list of data sections, each holding an ordered
//! list of fields. Only dimension fields inside drillable sections take part
//! in drill-down navigation.

use serde::{Deserialize, Serialize};

/// Category tag of a chart field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Grouping column; the only category usable for drilling
    #[default]
    Dimension,
    /// Aggregated value column
    Measure,
    /// Column used only for filtering
    Filter,
    /// Anything else (computed, info, ...)
    #[serde(other)]
    Other,
}

impl FieldCategory {
    /// Whether fields of this category may appear in a drill path
    pub fn is_drillable(self) -> bool {
        matches!(self, FieldCategory::Dimension)
    }
}

/// A single data-field descriptor from a chart configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field identifier (not necessarily unique within a path)
    pub uid: String,
    /// Source column name
    pub col_name: String,
    /// User supplied display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Aggregate function applied to the column, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(default)]
    pub category: FieldCategory,
}

impl FieldSpec {
    /// Create a dimension field
    pub fn dimension(uid: impl Into<String>, col_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            col_name: col_name.into(),
            alias: None,
            aggregate: None,
            category: FieldCategory::Dimension,
        }
    }

    /// Create a measure field with an aggregate function
    pub fn measure(
        uid: impl Into<String>,
        col_name: impl Into<String>,
        aggregate: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            col_name: col_name.into(),
            alias: None,
            aggregate: Some(aggregate.into()),
            category: FieldCategory::Measure,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name shown to the user.
    ///
    /// Alias wins when present; otherwise aggregated columns render as
    /// `AGG(column)` and plain columns as their column name.
    pub fn render_name(&self) -> String {
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.trim().is_empty()) {
            return alias.to_string();
        }
        match self.aggregate.as_deref().filter(|a| !a.is_empty()) {
            Some(agg) => format!("{}({})", agg.to_uppercase(), self.col_name),
            None => self.col_name.clone(),
        }
    }
}

/// Kind of a chart data section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Group,
    Aggregate,
    Filter,
    Color,
    Info,
    /// Any section type not listed above (size, mixed, label, ...)
    #[serde(other)]
    Other,
}

/// One section of a chart's data configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartDataSection {
    #[serde(default, rename = "type")]
    pub kind: SectionKind,
    /// Whether drill-down is enabled on this section
    #[serde(default)]
    pub drillable: bool,
    #[serde(default)]
    pub rows: Vec<FieldSpec>,
}

/// A chart configuration as far as drilling is concerned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartConfig {
    #[serde(default)]
    pub datas: Vec<ChartDataSection>,
}

impl ChartConfig {
    /// All fields of drillable group sections, in configuration order
    pub fn drill_fields(&self) -> Vec<FieldSpec> {
        self.datas
            .iter()
            .filter(|section| section.drillable && section.kind == SectionKind::Group)
            .flat_map(|section| section.rows.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_name_prefers_alias() {
        let field = FieldSpec::dimension("f1", "country").with_alias("Country");
        assert_eq!(field.render_name(), "Country");
    }

    #[test]
    fn render_name_ignores_blank_alias() {
        let field = FieldSpec::dimension("f1", "country").with_alias("  ");
        assert_eq!(field.render_name(), "country");
    }

    #[test]
    fn render_name_wraps_aggregate() {
        let field = FieldSpec::measure("m1", "amount", "sum");
        assert_eq!(field.render_name(), "SUM(amount)");
    }

    #[test]
    fn only_dimensions_are_drillable() {
        assert!(FieldCategory::Dimension.is_drillable());
        assert!(!FieldCategory::Measure.is_drillable());
        assert!(!FieldCategory::Filter.is_drillable());
        assert!(!FieldCategory::Other.is_drillable());
    }

    #[test]
    fn drill_fields_skip_non_drillable_sections() {
        let config = ChartConfig {
            datas: vec![
                ChartDataSection {
                    kind: SectionKind::Group,
                    drillable: true,
                    rows: vec![
                        FieldSpec::dimension("a", "country"),
                        FieldSpec::dimension("b", "city"),
                    ],
                },
                ChartDataSection {
                    kind: SectionKind::Group,
                    drillable: false,
                    rows: vec![FieldSpec::dimension("c", "street")],
                },
                ChartDataSection {
                    kind: SectionKind::Aggregate,
                    drillable: true,
                    rows: vec![FieldSpec::measure("d", "amount", "sum")],
                },
            ],
        };

        let uids: Vec<_> = config.drill_fields().into_iter().map(|f| f.uid).collect();
        assert_eq!(uids, vec!["a", "b"]);
    }

    #[test]
    fn chart_config_parses_json() {
        let json = r#"{
            "datas": [
                {"type": "group", "drillable": true, "rows": [
                    {"uid": "1", "colName": "country", "alias": "Country"},
                    {"uid": "2", "colName": "amount", "aggregate": "sum", "category": "measure"}
                ]}
            ]
        }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.datas.len(), 1);
        assert_eq!(config.datas[0].rows[1].category, FieldCategory::Measure);
        assert_eq!(config.datas[0].rows[0].category, FieldCategory::Dimension);
    }

    #[test]
    fn unknown_section_and_category_do_not_break_parsing() {
        let json = r#"{
            "datas": [
                {"type": "size", "rows": []},
                {"type": "group", "drillable": true, "rows": [
                    {"uid": "1", "colName": "country"},
                    {"uid": "2", "colName": "month", "category": "dateLevelComputedField"},
                    {"uid": "3", "colName": "city"}
                ]}
            ]
        }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.datas[0].kind, SectionKind::Other);
        assert_eq!(config.datas[1].rows[1].category, FieldCategory::Other);

        let uids: Vec<_> = config.drill_path().into_iter().map(|f| f.uid).collect();
        assert_eq!(uids, vec!["1", "3"]);
    }
}
