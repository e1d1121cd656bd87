//! Add-folder command handler
//!
//! Computes where the folder goes among its siblings and saves it to the
//! workspace file. Prompts for the name when it is not given.

use is_terminal::IsTerminal as _;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use drilltree::application::{Sidebar, SidebarCommand, SidebarEffect};
use drilltree::config::Config;
use drilltree::domain::ports::ViewTreeProvider;
use drilltree::{DrilltreeError, JsonWorkspace};

use crate::ui::context::UiContext;
use crate::ui::output::emit_json;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn cmd_add_folder(
    workspace: &Path,
    name: Option<String>,
    parent: Option<String>,
    position: Option<usize>,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    let workspace = JsonWorkspace::load(workspace)?;

    if let Some(parent) = parent.as_deref().filter(|p| !p.is_empty()) {
        let known = workspace
            .views()
            .iter()
            .any(|r| r.id == parent && r.is_folder);
        if !known {
            tracing::warn!(parent, "parent is not a folder in this workspace");
        }
    }

    let name = match name {
        Some(name) => name,
        None => prompt_name(ui)?,
    };

    let mut sidebar = Sidebar::new(workspace, config.sidebar_options());
    let command = SidebarCommand::AddFolder {
        name,
        parent_id: parent,
        position,
    };
    let SidebarEffect::FolderSaved { folder } = sidebar.dispatch(command, Instant::now())? else {
        bail!("folder name must not be empty");
    };

    if ui.json {
        return emit_json(&folder);
    }
    println!(
        "{} Created folder '{}' ({}) at index {}",
        ColoredText::success(theme::success_icon(ui.unicode)).render(ui.color),
        folder.name,
        folder.id,
        folder.index.unwrap_or_default()
    );
    Ok(())
}

fn prompt_name(ui: &UiContext) -> Result<String> {
    if ui.json || !std::io::stdin().is_terminal() {
        bail!("--name is required when not running interactively");
    }

    let colorful = ColorfulTheme::default();
    let theme: &dyn Theme = if ui.color { &colorful } else { &SimpleTheme };
    let name = Input::<String>::with_theme(theme)
        .with_prompt("Folder name")
        .interact_text()
        .map_err(|e| DrilltreeError::Prompt(e.to_string()))?;
    Ok(name)
}
