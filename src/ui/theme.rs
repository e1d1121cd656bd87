use crossterm::style::Color;
use drilltree::domain::entities::Glyph;

/// Design tokens for the drilltree UI.
///
/// All icons and separators are sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "›";
    pub const SEARCH: &str = "⌕";

    pub const FOLDER_OPEN: &str = "📂";
    pub const FOLDER_CLOSED: &str = "📁";
    pub const CODE: &str = "</>";
    pub const FOLDER_OUTLINE: &str = "🗀";
    pub const FILE: &str = "🗋";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const DRILL_SEPARATOR: &str = "›";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";
    pub const SEARCH: &str = "/";

    pub const FOLDER_OPEN: &str = "[-]";
    pub const FOLDER_CLOSED: &str = "[+]";
    pub const CODE: &str = "</>";
    pub const FOLDER_OUTLINE: &str = "[d]";
    pub const FILE: &str = "[f]";

    pub const EXPAND: &str = "v";
    pub const COLLAPSE: &str = ">";

    pub const DRILL_SEPARATOR: &str = ">";
}

/// Icon text for a node glyph
pub fn glyph_icon(glyph: Glyph, unicode: bool) -> &'static str {
    match (glyph, unicode) {
        (Glyph::FolderOpen, true) => icons::FOLDER_OPEN,
        (Glyph::FolderOpen, false) => icons_ascii::FOLDER_OPEN,
        (Glyph::FolderClosed, true) => icons::FOLDER_CLOSED,
        (Glyph::FolderClosed, false) => icons_ascii::FOLDER_CLOSED,
        (Glyph::Code, true) => icons::CODE,
        (Glyph::Code, false) => icons_ascii::CODE,
        (Glyph::FolderOutline, true) => icons::FOLDER_OUTLINE,
        (Glyph::FolderOutline, false) => icons_ascii::FOLDER_OUTLINE,
        (Glyph::File, true) => icons::FILE,
        (Glyph::File, false) => icons_ascii::FILE,
    }
}

pub fn drill_separator(unicode: bool) -> &'static str {
    if unicode {
        icons::DRILL_SEPARATOR
    } else {
        icons_ascii::DRILL_SEPARATOR
    }
}

pub fn expand_marker(expanded: bool, unicode: bool) -> &'static str {
    match (expanded, unicode) {
        (true, true) => icons::EXPAND,
        (false, true) => icons::COLLAPSE,
        (true, false) => icons_ascii::EXPAND,
        (false, false) => icons_ascii::COLLAPSE,
    }
}

pub fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

pub fn success_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::SUCCESS
    } else {
        icons_ascii::SUCCESS
    }
}

pub fn search_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::SEARCH
    } else {
        icons_ascii::SEARCH
    }
}

pub fn pointer(unicode: bool) -> &'static str {
    if unicode {
        icons::POINTER
    } else {
        icons_ascii::POINTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_icons_are_ascii() {
        for glyph in [
            Glyph::FolderOpen,
            Glyph::FolderClosed,
            Glyph::Code,
            Glyph::FolderOutline,
            Glyph::File,
        ] {
            assert!(glyph_icon(glyph, false).is_ascii(), "{glyph:?}");
        }
        assert!(drill_separator(false).is_ascii());
        assert!(expand_marker(true, false).is_ascii());
    }

    #[test]
    fn folder_icons_follow_expansion() {
        assert_eq!(glyph_icon(Glyph::FolderOpen, true), "📂");
        assert_eq!(glyph_icon(Glyph::FolderClosed, true), "📁");
        assert_ne!(
            glyph_icon(Glyph::FolderOpen, false),
            glyph_icon(Glyph::FolderClosed, false)
        );
    }
}
