//! Tree command handler
//!
//! Prints the saved-view tree, optionally filtered by title.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use drilltree::config::Config;
use drilltree::domain::ports::ViewTreeProvider;
use drilltree::domain::services::{
    build_view_tree, expand_survivors, filter_forest_with, title_matches, FilterOptions,
};
use drilltree::JsonWorkspace;

use crate::ui::context::UiContext;
use crate::ui::output::emit_json;
use crate::ui::views::tree::{render_forest, TreeStyle};

pub fn cmd_tree(
    workspace: &Path,
    search: Option<&str>,
    keep_subtree: bool,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    let workspace = JsonWorkspace::load(workspace)?;
    let tree = build_view_tree(&workspace.views(), &HashSet::new());

    let query = search.unwrap_or_default();
    let options = FilterOptions {
        keep_matched_subtree: keep_subtree || config.search.keep_matched_subtree,
    };
    let mut filtered = filter_forest_with(&tree, query, &title_matches, options);
    if config.search.auto_expand && !query.trim().is_empty() {
        expand_survivors(&mut filtered);
    }
    tracing::info!(query, roots = filtered.len(), "view tree filtered");

    if ui.json {
        return emit_json(&filtered);
    }

    let style = TreeStyle {
        unicode: ui.unicode,
        color: ui.color,
        width: ui.width(),
        expand_all: true,
    };
    print!("{}", render_forest(&filtered, &style));
    if filtered.is_empty() && !query.trim().is_empty() {
        eprintln!("No views match '{}'", query);
    }
    Ok(())
}
