//! Terminal renderer for the console protocol.

use crossterm::style::{Color, Stylize};

/// Width of the `=` rule printed under the banner title.
pub const BANNER_RULE_WIDTH: usize = 50;
/// Width of the `-` separator printed before each prompt.
pub const SEPARATOR_WIDTH: usize = 30;
/// Prefix for error lines, matching the console protocol's locale.
pub const LABEL_ERROR: &str = "❌ Ошибка:";
/// Bullet used for command-help lines.
pub const GLYPH_HINT_BULLET: &str = "•";

const COLOR_BANNER: Color = Color::Cyan;
const COLOR_HINT: Color = Color::Grey;
const COLOR_SEPARATOR: Color = Color::DarkGrey;
const COLOR_INFO: Color = Color::Green;
const COLOR_WARNING: Color = Color::Yellow;
const COLOR_ERROR: Color = Color::Red;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the banner title and its rule line (to stderr).
    pub fn banner(&self, title: &str) {
        if self.color {
            eprintln!("{}", title.with(COLOR_BANNER).bold());
        } else {
            eprintln!("{title}");
        }
        eprintln!("{}", "=".repeat(BANNER_RULE_WIDTH));
    }

    /// Print one bulleted command-help line (to stderr).
    pub fn hint(&self, text: &str) {
        if self.color {
            eprintln!("{} {}", GLYPH_HINT_BULLET, text.with(COLOR_HINT));
        } else {
            eprintln!("{GLYPH_HINT_BULLET} {text}");
        }
    }

    /// Print the dashed separator shown before each prompt (to stderr).
    pub fn separator(&self) {
        let rule = "-".repeat(SEPARATOR_WIDTH);
        if self.color {
            eprintln!("\n{}", rule.with(COLOR_SEPARATOR));
        } else {
            eprintln!("\n{rule}");
        }
    }

    /// Print a section header (to stderr).
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!("\n{}", title.bold());
        } else {
            eprintln!("\n{title}");
        }
    }

    /// Print one 1-based listing entry (to stdout).
    pub fn entry(&self, index: usize, text: &str) {
        println!("{index}. {text}");
    }

    /// Print a greeting block, preceded by a blank line (to stdout).
    pub fn greeting(&self, text: &str) {
        println!("\n{text}");
    }

    /// Print a status message (to stderr).
    pub fn info(&self, msg: &str) {
        if self.color {
            eprintln!("{}", msg.with(COLOR_INFO));
        } else {
            eprintln!("{msg}");
        }
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{}", msg.with(COLOR_WARNING));
        } else {
            eprintln!("{msg}");
        }
    }

    /// Print an error line with the locale's error prefix (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(COLOR_ERROR).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}
