//! Recycle command handler

use std::path::Path;

use anyhow::Result;

use drilltree::domain::ports::ViewTreeProvider;
use drilltree::domain::services::{build_recycle_list, filter_by_title};
use drilltree::JsonWorkspace;

use crate::ui::context::UiContext;
use crate::ui::output::emit_json;
use crate::ui::views::tree::{render_forest, TreeStyle};

pub fn cmd_recycle(workspace: &Path, search: Option<&str>, ui: &UiContext) -> Result<()> {
    let workspace = JsonWorkspace::load(workspace)?;
    let list = build_recycle_list(&workspace.archived());
    let filtered = filter_by_title(&list, search.unwrap_or_default());

    if ui.json {
        return emit_json(&filtered);
    }

    let style = TreeStyle {
        unicode: ui.unicode,
        color: ui.color,
        width: ui.width(),
        expand_all: false,
    };
    if list.is_empty() {
        eprintln!("Recycle bin is empty");
    }
    print!("{}", render_forest(&filtered, &style));
    Ok(())
}
