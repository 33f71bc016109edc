// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINTLOG                                      ║
// ║                    Tiny Leveled Console/File Logger                          ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 WHAT IT DOES
// ---------------
// Tintlog stamps every message with a severity tag and the date the logger was
// created, tints the console line by severity (blue info, yellow warning, red
// error), and can mirror a stripped, color-free copy of each line into an
// append-only `logs.txt` in the working directory.
//
// 📼 HOW A LINE IS BUILT
// ----------------------
//   {color}{bold}[dd/mm/yyyy] LEVEL:{reset}{color} {message}
//
// The console gets the full styled line followed by a reset line; the file
// (when mirroring is enabled) gets the same line with every ANSI escape
// sequence stripped out.
//
// 🎨 DESIGN PHILOSOPHY
// --------------------
// - **One struct, no machinery**: a `Logger` holds a severity, a mirror flag,
//   and a creation date. No facade, no global state, no background threads.
// - **Nothing left open**: the log file is opened, appended, and dropped on
//   every call, so output is always flushed and no handle outlives a write.
// - **Caller owns concurrency**: a single synchronous writer is assumed;
//   callers sharing a logger across threads serialize externally.

pub mod constants;
pub mod logger;
pub mod strip;

pub use logger::{LogError, Logger, Severity};
pub use strip::strip_ansi;
