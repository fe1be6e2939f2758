//! User-facing console messages. Colour is dropped when `NO_COLOR` is set.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint(style: Style, icon: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        icon.to_string()
    } else {
        style.paint(icon).to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue.bold(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green.bold(), ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow.bold(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red.bold(), ICON_ERR), msg);
}

/// Section header followed by a blank line.
pub fn header<T: fmt::Display>(msg: T) {
    let title = format!("=== {} ===", msg);
    println!("{}\n", paint(Colour::Blue.bold(), &title));
}
