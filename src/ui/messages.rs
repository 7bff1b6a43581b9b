use ansi_term::{Colour, Style};
use std::fmt;
use std::io::IsTerminal;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(style: Style, icon: &str, colored: bool) -> String {
    if colored {
        style.paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let colored = std::io::stdout().is_terminal();
    println!("{} {}", icon(Colour::Blue.bold(), ICON_INFO, colored), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let colored = std::io::stdout().is_terminal();
    println!("{} {}", icon(Colour::Green.bold(), ICON_OK, colored), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let colored = std::io::stdout().is_terminal();
    println!("{} {}", icon(Colour::Yellow.bold(), ICON_WARN, colored), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let colored = std::io::stderr().is_terminal();
    eprintln!("{} {}", icon(Colour::Red.bold(), ICON_ERR, colored), msg);
}
