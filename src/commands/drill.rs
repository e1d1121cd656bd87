//! Drill command handler
//!
//! Prints the drill path of a chart config, active level bracketed.

use std::path::Path;

use anyhow::Result;

use drilltree::application::DrillPathView;
use drilltree::domain::entities::DrillState;
use drilltree::load_chart;

use crate::ui::context::UiContext;
use crate::ui::output::emit_json;
use crate::ui::views::drill::render_drill_path;

pub fn cmd_drill(chart: &Path, active: Option<usize>, ui: &UiContext) -> Result<()> {
    let chart = load_chart(chart)?;
    let state = active.map(DrillState::new).or(chart.drill_option);
    let path = chart.config.drill_path();
    tracing::debug!(levels = path.len(), active = ?state, "drill path derived");

    let view = DrillPathView::new(&path, state.map(|s| s.current));
    if ui.json {
        return emit_json(&view);
    }
    if !view.is_empty() {
        println!("{}", render_drill_path(&view, ui.unicode, ui.color));
    }
    Ok(())
}
