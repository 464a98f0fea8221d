//! Styled terminal messages shared by every command.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn paint<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(RED, "❌", msg));
}

/// Section header for multi-part outputs (dashboard, stats).
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}
