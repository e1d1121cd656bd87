//! Tree and list rendering for the view sidebar and recycle bin

use drilltree::domain::entities::{IconRule, TreeNode};
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::{truncate_to_width, ColoredText};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyle {
    pub unicode: bool,
    pub color: bool,
    /// Maximum columns per line
    pub width: usize,
    /// Show children of collapsed folders too
    pub expand_all: bool,
}

/// A node at its display depth
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
}

/// Depth-first rows, descending only into expanded folders unless `expand_all`
pub fn visible_rows(forest: &[TreeNode], expand_all: bool) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::new();
    push_rows(forest, 0, expand_all, &mut rows);
    rows
}

fn push_rows<'a>(nodes: &'a [TreeNode], depth: usize, expand_all: bool, rows: &mut Vec<TreeRow<'a>>) {
    for node in nodes {
        rows.push(TreeRow { node, depth });
        if expand_all || node.expanded {
            push_rows(&node.children, depth + 1, expand_all, rows);
        }
    }
}

/// One line for a row, without cursor
pub fn render_row(row: &TreeRow<'_>, style: &TreeStyle) -> String {
    let node = row.node;
    let indent = "  ".repeat(row.depth);
    let marker = if node.icon == IconRule::Folder {
        theme::expand_marker(node.expanded || style.expand_all, style.unicode)
    } else {
        " "
    };
    let icon = theme::glyph_icon(node.glyph(), style.unicode);
    let suffix = if node.disabled { " (deleting)" } else { "" };

    let prefix = format!("{}{} {} ", indent, marker, icon);
    let room = style
        .width
        .saturating_sub(prefix.width())
        .saturating_sub(suffix.len());
    let title = truncate_to_width(&node.title, room, style.unicode);

    let title = if node.disabled {
        ColoredText::dim(title).render(style.color)
    } else if node.is_folder {
        ColoredText::plain(title).bold().render(style.color)
    } else {
        title
    };

    if suffix.is_empty() {
        format!("{}{}", prefix, title)
    } else {
        format!("{}{}{}", prefix, title, ColoredText::dim(suffix).render(style.color))
    }
}

/// Render a forest, one node per line
pub fn render_forest(forest: &[TreeNode], style: &TreeStyle) -> String {
    let mut out = String::new();
    for row in visible_rows(forest, style.expand_all) {
        out.push_str(&render_row(&row, style));
        out.push('\n');
    }
    out
}
