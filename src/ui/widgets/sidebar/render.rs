//! Terminal rendering functions for the sidebar menu.

use std::time::Instant;

use drilltree::application::Pane;
use drilltree::domain::ports::{FolderStore, ViewTreeProvider};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::views::tree::{render_row, TreeStyle};

use super::menu::{InputMode, SidebarMenu};

/// Pane title line
pub fn render_header(pane: Pane, folded: bool, color: bool) -> String {
    let title = match pane {
        Pane::List => "Views",
        Pane::Recycle => "Recycle bin",
    };
    let mut line = ColoredText::info(title).bold().render(color);
    if folded {
        line.push_str(&ColoredText::dim(" (folded)").render(color));
    }
    line
}

/// Search box line; `pending` marks input that has not been applied yet
pub fn render_search_bar(input: &str, mode: InputMode, pending: bool, unicode: bool) -> String {
    let caret = if mode == InputMode::Search { "_" } else { "" };
    let pending = match (pending, unicode) {
        (false, _) => "",
        (true, true) => " …",
        (true, false) => " ...",
    };
    format!("{} {}{}{}", theme::search_icon(unicode), input, caret, pending)
}

/// Help bar showing keyboard shortcuts
pub fn render_help_bar(mode: InputMode) -> String {
    match mode {
        InputMode::Navigate => String::from(
            "[/] Search    [Tab] Recycle bin    [f] Fold    [a] New view    [n] New folder    [q] Quit\n\
             (Use ↑↓ to navigate, Enter to open/close a folder)",
        ),
        InputMode::Search => String::from("[Esc] Done    [Backspace] Erase"),
        InputMode::FolderName => String::from("[Enter] Create    [Esc] Cancel"),
    }
}

/// Full screen contents for the menu
pub fn render_menu<W>(menu: &SidebarMenu<W>, style: &TreeStyle, now: Instant) -> String
where
    W: ViewTreeProvider + FolderStore,
{
    let sidebar = menu.sidebar();
    let input_line = if menu.mode() == InputMode::FolderName {
        format!("New folder: {}_", menu.folder_name())
    } else {
        render_search_bar(
            menu.input(),
            menu.mode(),
            menu.next_due(now).is_some(),
            style.unicode,
        )
    };
    let mut lines = vec![
        render_header(sidebar.pane(), sidebar.is_folded(), style.color),
        input_line,
        String::new(),
    ];

    let rows = menu.rows();
    if rows.is_empty() && !sidebar.is_folded() {
        lines.push(ColoredText::dim("  (no matches)").render(style.color));
    }
    let row_style = TreeStyle {
        width: style.width.saturating_sub(2),
        ..*style
    };
    for (i, row) in rows.iter().enumerate() {
        let cursor = if i == menu.cursor_position() {
            theme::pointer(style.unicode)
        } else {
            " "
        };
        lines.push(format!("{} {}", cursor, render_row(row, &row_style)));
    }

    lines.push(String::new());
    if let Some(status) = menu.status() {
        lines.push(format!(
            "{} {}",
            ColoredText::success(theme::success_icon(style.unicode)).render(style.color),
            status
        ));
    }
    lines.push(render_help_bar(menu.mode()));
    lines.join("\n")
}
