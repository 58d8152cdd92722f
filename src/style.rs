use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, RgbColor, Style};

pub const ACCENT_RGB: (u8, u8, u8) = (207, 106, 76);

pub const ACCENT: Style = Style::new().fg_color(Some(anstyle::Color::Rgb(RgbColor(
    ACCENT_RGB.0,
    ACCENT_RGB.1,
    ACCENT_RGB.2,
))));
pub const WARN: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));
pub const ERROR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));
pub const DIM: Style = Style::new().dimmed();
pub const BOLD: Style = Style::new().bold();

/// Whether to emit escape codes on stderr.
#[must_use]
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Wrap `s` in `style` when color is enabled.
#[must_use]
pub fn paint(style: Style, s: &str) -> String {
    if color_enabled() {
        format!("{style}{s}{Reset}")
    } else {
        s.to_string()
    }
}

/// Announcement printed before a command is spawned.
#[must_use]
pub fn command_line(command: &str) -> String {
    format!("{} {}", paint(ACCENT, "❱"), paint(BOLD, command))
}

/// Fatal error line for the binary.
#[must_use]
pub fn error_line(message: &str) -> String {
    format!("{} {message}", paint(ERROR, "Error:"))
}
