//! Chart configuration files
//!
//! A chart file is a `ChartConfig` plus the optional drill state of the
//! editing session:
//!
//! ```json
//! { "datas": [ ... ], "drillOption": { "current": 1 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ChartConfig, DrillState};
use crate::error::{DrilltreeError, DrilltreeResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFile {
    #[serde(flatten)]
    pub config: ChartConfig,
    #[serde(default)]
    pub drill_option: Option<DrillState>,
}

/// Load a chart file
pub fn load_chart(path: &Path) -> DrilltreeResult<ChartFile> {
    if !path.exists() {
        return Err(DrilltreeError::ChartNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let chart: ChartFile = serde_json::from_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        sections = chart.config.datas.len(),
        "chart config loaded"
    );
    Ok(chart)
}
