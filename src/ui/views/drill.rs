//! Drill path line: `Country › [City]`

use drilltree::application::{DrillItem, DrillPathView};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Render the path on one line; the active segment is bracketed.
///
/// An empty path renders as an empty string.
pub fn render_drill_path(view: &DrillPathView, unicode: bool, color: bool) -> String {
    let separator = format!(" {} ", theme::drill_separator(unicode));

    view.items()
        .into_iter()
        .map(|item| match item {
            DrillItem::Node(segment) if segment.is_active => {
                ColoredText::info(format!("[{}]", segment.label))
                    .bold()
                    .render(color)
            }
            DrillItem::Node(segment) => ColoredText::plain(segment.label.as_str()).render(color),
            DrillItem::Separator => ColoredText::dim(separator.as_str()).render(color),
        })
        .collect()
}
