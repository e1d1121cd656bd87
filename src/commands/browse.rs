//! Browse command handler: interactive sidebar

use is_terminal::IsTerminal as _;
use std::path::Path;

use anyhow::{bail, Result};

use drilltree::application::Sidebar;
use drilltree::config::Config;
use drilltree::JsonWorkspace;

use crate::ui::context::UiContext;
use crate::ui::views::tree::TreeStyle;
use crate::ui::widgets::sidebar::{run_interactive, SidebarMenu};

pub fn cmd_browse(workspace: &Path, ui: &UiContext, config: &Config) -> Result<()> {
    if ui.json {
        bail!("browse is interactive and has no JSON output");
    }
    if !ui.caps.is_tty || !std::io::stdin().is_terminal() {
        bail!("browse needs an interactive terminal");
    }

    let workspace = JsonWorkspace::load(workspace)?;
    let mut menu = SidebarMenu::new(Sidebar::new(workspace, config.sidebar_options()));
    let style = TreeStyle {
        unicode: ui.unicode,
        color: ui.color,
        width: ui.width(),
        expand_all: false,
    };
    run_interactive(&mut menu, style)
}
