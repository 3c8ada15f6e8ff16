//! Colored status lines for the CLI.
//!
//! Status goes to stdout, errors to stderr. Colors are dropped when
//! `NO_COLOR` is set.

use std::env;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

/// One status line, icon first.
pub fn render<T: fmt::Display>(tone: Tone, msg: T, colored: bool) -> String {
    if colored {
        format!("{}{BOLD}{} {RESET}{msg}", tone.color(), tone.icon())
    } else {
        format!("{} {msg}", tone.icon())
    }
}

fn colored() -> bool {
    env::var_os("NO_COLOR").is_none()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Info, msg, colored()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Success, msg, colored()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Warning, msg, colored()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Tone::Error, msg, colored()));
}

/// Title line above a book listing.
pub fn header<T: fmt::Display>(msg: T) {
    let rule = "=".repeat(22);
    if colored() {
        println!("{}{BOLD}{rule} {msg}{RESET}\n", Tone::Info.color());
    } else {
        println!("{rule} {msg}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let line = render(Tone::Warning, "No book with id 3.", false);
        assert_eq!(line, "⚠️ No book with id 3.");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn colored_lines_reset_before_the_message() {
        let line = render(Tone::Success, "12 books deleted.", true);
        assert!(line.starts_with("\x1b[32m"));
        assert!(line.ends_with(&format!("{RESET}12 books deleted.")));
    }
}
