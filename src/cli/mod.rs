//! Command-line interface module
//!
//! - args: accept Go-style single-dash long flags
//! - configure: interactive `-config` setup
//! - clone: precondition checks, then clone orchestration
pub mod args;
pub mod clone;
pub mod configure;

/// Usage block printed when no repository is given
pub const USAGE: &str = "Usage: `gclone [-c] [-tmp] repository-name`\n       `gclone -config` (to configure settings)";
