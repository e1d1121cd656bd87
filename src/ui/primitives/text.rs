use std::fmt;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Warning,
    Info,
    Dim,
}

/// Text with an optional semantic color, rendered plain when color is off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, SemanticColor::Dim)
    }

    fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = match color {
            SemanticColor::Success => self.text.as_str().with(theme::colors::SUCCESS),
            SemanticColor::Warning => self.text.as_str().with(theme::colors::WARNING),
            SemanticColor::Info => self.text.as_str().with(theme::colors::INFO),
            SemanticColor::Dim => self.text.as_str().with(theme::colors::DIM),
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cut `text` to at most `max` terminal columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max: usize, unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let ellipsis = if unicode { "…" } else { "..." };
    let budget = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::success("ok");
        assert_eq!(t.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let t = ColoredText::info("City").bold();
        assert!(t.render(true).contains("\u{1b}["));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("Sales", 10, true), "Sales");
    }

    #[test]
    fn truncate_counts_columns_not_bytes() {
        // Each CJK character is two columns wide
        let cut = truncate_to_width("销售报表汇总", 7, true);
        assert_eq!(cut, "销售报…");
        assert!(cut.width() <= 7);
    }

    #[test]
    fn truncate_ascii_ellipsis() {
        assert_eq!(truncate_to_width("Revenue by region", 10, false), "Revenue...");
    }
}
