use drilltree::config::ConfigWarning;
use serde::Serialize;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Report unknown config keys on stderr
pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool, color: bool) {
    let icon = ColoredText::warning(theme::warning_icon(unicode)).render(color);
    for w in warnings {
        let path = w.file.display();
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, path, line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, path);
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Print a value as one line of JSON on stdout
pub fn emit_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
