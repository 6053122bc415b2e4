//! TTY detection and color support logic

use std::io::IsTerminal;

/// Output stream a message is headed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Determine if colors should be used for `stream` based on environment and TTY status
pub fn should_use_colors(stream: Stream) -> bool {
    colors_enabled(
        |key| std::env::var(key).ok(),
        || match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        },
    )
}

fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: impl FnOnce() -> bool) -> bool {
    // NO_COLOR wins over everything (https://no-color.org/)
    if var("NO_COLOR").is_some() {
        return false;
    }

    if let Some(val) = var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    is_tty()
}
