// ══════════════════════════════════════════════════════════════════════════════
// STRIP MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Removes ANSI/VT100 escape sequences from formatted lines before they are
// persisted to the log file. Covers the full CSI form (ESC [ params
// intermediates final) plus the short two-byte ESC form, so any mix of the
// styling tokens used by the logger strips cleanly.

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").unwrap()
});

/// Returns the input with every ANSI escape sequence removed, all other text untouched.
pub fn strip_ansi(input: &str) -> String {
	ANSI_ESCAPE.replace_all(input, "").into_owned()
}
