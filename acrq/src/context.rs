//! Application context holding resolved runtime settings.
//!
//! Built once from CLI flags right after parsing and passed as read-only
//! throughout the command handlers.

use crate::format::ColorChoice;

/// How chatty the tool is on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Only results and errors.
    Normal,
    /// Progress notes (-v).
    Verbose,
    /// Everything (-vv and beyond).
    Debug,
}

impl VerbosityLevel {
    /// Maps the repeated `-v` flag count to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            _ => VerbosityLevel::Debug,
        }
    }
}

/// Resolved runtime state shared by all command handlers.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Color output preference.
    pub color: ColorChoice,
    /// Verbosity resolved from the CLI flags.
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Builds the context from CLI flag values.
    pub fn build(color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        Self { color, verbosity }
    }
}
