//! Styled terminal output using termimad

use termimad::crossterm::style::Stylize;
use termimad::MadSkin;

use crate::display::terminal::{should_use_colors, Stream};

/// Print markdown to stdout with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors(Stream::Stdout) {
        skin().print_text(markdown);
    } else {
        println!("{}", plain_text(markdown));
    }
}

/// Print a progress line
pub fn print_status(message: &str) {
    println!("{}", message);
}

/// Print a completion line, green when colors are enabled
pub fn print_success(message: &str) {
    if should_use_colors(Stream::Stdout) {
        println!("{}", message.green());
    } else {
        println!("{}", message);
    }
}

/// Print an error to stderr
pub fn print_error(error: &dyn std::error::Error) {
    if should_use_colors(Stream::Stderr) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    } else {
        eprintln!("Error: {}", error);
    }
}

/// Drop inline-code markers so plain output reads as normal text
fn plain_text(markdown: &str) -> String {
    markdown.replace('`', "")
}

fn skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);
    skin.inline_code.set_fg(Yellow);
    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_styles_inline_code() {
        let skin = skin();
        let rendered = skin.inline("`gclone -config`").to_string();
        assert!(rendered.contains("gclone -config"));
    }

    #[test]
    fn test_plain_text_strips_inline_code() {
        assert_eq!(
            plain_text(crate::cli::USAGE),
            "Usage: gclone [-c] [-tmp] repository-name\n       gclone -config (to configure settings)"
        );
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_markdown("**Usage:** `gclone repo`");
        print_status("Cloning https://github.com/alice/repo...");
        print_success("Clone completed successfully!");
        print_error(&crate::error::GcloneError::NotConfigured);
    }
}
