//! Output settings resolved from flags, config and the terminal

use drilltree::config::{ColorMode, Config};
use drilltree::presentation::ColorWhen;

use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(json, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color: color && !json,
            unicode,
        }
    }

    /// Columns available for a line of output
    pub fn width(&self) -> usize {
        if self.caps.is_tty {
            usize::from(self.caps.width)
        } else {
            usize::MAX
        }
    }
}
