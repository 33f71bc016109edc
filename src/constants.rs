// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used throughout the codebase.
// - ANSI escape sequences for console styling (one color per severity)
// - LOG_FILE: name of the mirror file created in the working directory

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[0;31m";
pub const BLUE: &str = "\x1b[0;36m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BOLD: &str = "\x1b[1m";

pub const LOG_FILE: &str = "logs.txt";
