//! Terminal styling for the parts of a log line
//!
//! Styling is process-wide: `colored` decides from `NO_COLOR`, `CLICOLOR`,
//! `CLICOLOR_FORCE` and whether stdout is a terminal, unless overridden with
//! [`set_color_mode`]. With styling off, [`paint`] hands the text back
//! untouched and without allocating.
//!
//! The automatic decision looks at stdout, not at the logger's sink. A
//! program logging to stderr (the default sink) with `2>file` and stdout on a
//! terminal gets escape codes in the file. Programs that redirect stderr or
//! write to files should call `set_color_mode(ColorMode::Never)`, or
//! `ColorMode::Auto` only when the sink is the terminal stdout reports on.

use super::level::Level;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The semantic role of a piece of text in a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Timestamp,
    Prefix,
    Key,
    Level(Level),
}

/// Whether styling escapes are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the environment decide
    #[default]
    Auto,
    Always,
    Never,
}

/// Force styling on or off for the whole process, or restore the default.
pub fn set_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Whether styling is currently on.
///
/// Under [`ColorMode::Auto`] this reflects the environment and whether
/// *stdout* is a terminal, whatever sink a logger writes to.
#[inline]
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Apply the style for `role` to `text`.
pub fn paint(role: StyleRole, text: &str) -> Cow<'_, str> {
    if !colors_enabled() {
        return Cow::Borrowed(text);
    }

    let styled = match role {
        StyleRole::Timestamp => text.dimmed(),
        StyleRole::Prefix => text.dimmed().bold(),
        StyleRole::Key => text.magenta(),
        StyleRole::Level(level) => match level {
            Level::DEBUG => text.blue().bold(),
            Level::INFO => text.cyan().bold(),
            Level::WARN => text.yellow().bold(),
            Level::ERROR => text.red().bold(),
            _ => return Cow::Borrowed(text),
        },
    };

    Cow::Owned(styled.to_string())
}
