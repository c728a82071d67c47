//! CLI output helpers.
//!
//! Results go to stdout; everything else (errors, verbose progress notes)
//! goes to stderr so JSON output stays pipeable.

use crate::context::{AppContext, VerbosityLevel};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Control for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and NO_COLOR is unset.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl ColorChoice {
    /// Whether error output should be colored.
    fn enabled(&self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
            }
        }
    }
}

/// Prints an error message to stderr.
pub fn error(ctx: &AppContext, message: &str) {
    if ctx.color.enabled() {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("✗ {}", message);
    }
}

/// Prints a progress note to stderr when the context is at least as verbose
/// as `level`.
pub fn print(ctx: &AppContext, level: VerbosityLevel, message: &str) {
    if ctx.verbosity >= level {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
