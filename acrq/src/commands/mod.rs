/// Describe command handler and logic
pub mod describe;

/// List command handler and logic
pub mod list;
