// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, date-stamped console logging with three severity levels,
// with optional mirroring of the stripped line into an append-only log file.
// The construction date is captured once and stamped on every line; file
// handles are opened and dropped per call so nothing is ever left open.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::constants::{BLUE, BOLD, LOG_FILE, RED, RESET, YELLOW};
use crate::strip::strip_ansi;

/// Message severity. Each level carries a fixed display label and console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
	#[default]
	Info,
	Warning,
	Error,
}

impl Severity {
	/// Lowercase display label for this severity.
	pub fn label(self) -> &'static str {
		match self {
			Severity::Info => "info",
			Severity::Warning => "warning",
			Severity::Error => "error",
		}
	}

	/// ANSI color sequence this severity renders with on the console.
	pub fn color(self) -> &'static str {
		match self {
			Severity::Info => BLUE,
			Severity::Warning => YELLOW,
			Severity::Error => RED,
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Severity {
	type Err = LogError;

	/// Parses a severity from its label. Anything outside the three defined
	/// levels is rejected with `LogError::InvalidSeverity`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"info" | "Info" => Ok(Severity::Info),
			"warning" | "Warning" => Ok(Severity::Warning),
			"error" | "Error" => Ok(Severity::Error),
			other => Err(LogError::InvalidSeverity(other.to_string())),
		}
	}
}

/// Errors surfaced by the logger. File and console failures propagate as I/O
/// errors; nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum LogError {
	#[error("severity must be one of info, warning, error (got '{0}')")]
	InvalidSeverity(String),
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Leveled console logger with optional file mirroring.
pub struct Logger {
	severity: Severity,
	mirror_to_file: bool,
	created_at: NaiveDate,
	log_file: PathBuf,
}

impl Logger {
	/// Creates a logger, capturing today's date for stamping all messages.
	pub fn new(severity: Severity, mirror_to_file: bool) -> Self {
		Self {
			severity,
			mirror_to_file,
			created_at: Local::now().date_naive(),
			log_file: PathBuf::from(LOG_FILE),
		}
	}

	#[cfg(test)]
	fn with_log_file(path: impl Into<PathBuf>) -> Self {
		let mut logger = Self::default();
		logger.log_file = path.into();
		logger
	}

	/// Resets the severity back to `Info`.
	pub fn reset_severity(&mut self) {
		self.severity = Severity::Info;
	}

	/// Sets the severity used by `log`. The closed enum leaves no invalid
	/// values to check; string input goes through `Severity::from_str`.
	pub fn set_severity(&mut self, severity: Severity) {
		self.severity = severity;
	}

	/// Enables mirroring of stripped output into the log file.
	pub fn enable_file_mirroring(&mut self) {
		self.mirror_to_file = true;
	}

	/// Disables mirroring into the log file.
	pub fn disable_file_mirroring(&mut self) {
		self.mirror_to_file = false;
	}

	/// Removes the log file if it exists. A missing file is a no-op, not an error.
	pub fn clear_log_file(&self) -> Result<(), LogError> {
		match fs::remove_file(&self.log_file) {
			Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
			_ => Ok(()),
		}
	}

	/// Logs the message at the currently configured severity.
	pub fn log(&self, message: &str) -> Result<(), LogError> {
		match self.severity {
			Severity::Info => self.info(message),
			Severity::Warning => self.warning(message),
			Severity::Error => self.error(message),
		}
	}

	/// Logs the message in blue at `Info`, regardless of the configured severity.
	pub fn info(&self, message: &str) -> Result<(), LogError> {
		self.emit(Severity::Info, message)
	}

	/// Logs the message in yellow at `Warning`, regardless of the configured severity.
	pub fn warning(&self, message: &str) -> Result<(), LogError> {
		self.emit(Severity::Warning, message)
	}

	/// Logs the message in red at `Error`, regardless of the configured severity.
	pub fn error(&self, message: &str) -> Result<(), LogError> {
		self.emit(Severity::Error, message)
	}

	// Console and file writes are independent side effects: the console line
	// is attempted even when the mirror write failed. A console error is
	// returned as-is; otherwise a stored mirror error surfaces.
	fn emit(&self, severity: Severity, message: &str) -> Result<(), LogError> {
		let line = self.format_line(severity, message);

		let mirrored = if self.mirror_to_file {
			self.append_to_file(&line)
		} else {
			Ok(())
		};

		let mut stdout = io::stdout();
		writeln!(stdout, "{line}")?;
		writeln!(stdout, "{RESET}")?;

		mirrored.map_err(LogError::from)
	}

	// Line layout: {color}{bold}[dd/mm/yyyy] LEVEL:{reset}{color} {message}
	fn format_line(&self, severity: Severity, message: &str) -> String {
		let color = severity.color();
		format!(
			"{color}{BOLD}[{}] {}:{RESET}{color} {message}",
			format_date(self.created_at),
			severity.label().to_uppercase(),
		)
	}

	// Opens in append/create mode and drops the handle before returning, so
	// the file is released on every exit path.
	fn append_to_file(&self, line: &str) -> io::Result<()> {
		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.log_file)?;
		writeln!(file, "{}", strip_ansi(line))
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new(Severity::Info, false)
	}
}

/// Formats a date as `dd/mm/yyyy`, day and month zero-padded, year unpadded.
fn format_date(date: NaiveDate) -> String {
	format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn read_lines(path: &std::path::Path) -> Vec<String> {
		fs::read_to_string(path)
			.unwrap()
			.lines()
			.map(str::to_string)
			.collect()
	}

	#[test]
	fn emit_lines_carry_label_and_color() {
		let logger = Logger::default();
		for (severity, label, color) in [
			(Severity::Info, "INFO", BLUE),
			(Severity::Warning, "WARNING", YELLOW),
			(Severity::Error, "ERROR", RED),
		] {
			let line = logger.format_line(severity, "check");
			assert!(line.contains(label), "missing {label} in {line:?}");
			assert!(line.starts_with(color));
			assert!(line.contains(BOLD));
			assert!(line.ends_with(" check"));
		}
	}

	#[test]
	fn date_is_zero_padded() {
		let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
		assert_eq!(format_date(date), "05/03/2024");
		let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
		assert_eq!(format_date(date), "25/12/2023");
	}

	#[test]
	fn stripped_info_line_round_trips() {
		let logger = Logger::default();
		let line = logger.format_line(Severity::Info, "hello");
		let stripped = strip_ansi(&line);
		assert_eq!(
			stripped,
			format!("[{}] INFO: hello", format_date(logger.created_at))
		);
		assert!(!stripped.contains('\x1b'));
	}

	#[test]
	fn log_dispatches_to_configured_severity() {
		let dir = tempfile::tempdir().unwrap();
		let mut logger = Logger::with_log_file(dir.path().join(LOG_FILE));
		logger.enable_file_mirroring();
		logger.set_severity(Severity::Warning);

		logger.log("low disk space").unwrap();
		logger.warning("low disk space").unwrap();

		let lines = read_lines(&logger.log_file);
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], lines[1]);
		assert!(lines[0].contains("WARNING: low disk space"));
	}

	#[test]
	fn reset_severity_falls_back_to_info() {
		let dir = tempfile::tempdir().unwrap();
		let mut logger = Logger::with_log_file(dir.path().join(LOG_FILE));
		logger.enable_file_mirroring();
		logger.set_severity(Severity::Error);
		logger.reset_severity();

		logger.log("back to normal").unwrap();

		let lines = read_lines(&logger.log_file);
		assert!(lines[0].contains("INFO: back to normal"));
	}

	#[test]
	fn mirrored_errors_append_in_order() {
		let dir = tempfile::tempdir().unwrap();
		let mut logger = Logger::with_log_file(dir.path().join(LOG_FILE));
		logger.enable_file_mirroring();

		logger.error("a").unwrap();
		logger.error("b").unwrap();

		let lines = read_lines(&logger.log_file);
		assert_eq!(lines.len(), 2);
		assert!(lines[0].ends_with("ERROR: a"));
		assert!(lines[1].ends_with("ERROR: b"));
		assert!(lines.iter().all(|l| !l.contains('\x1b')));
	}

	#[test]
	fn no_file_appears_while_mirroring_is_off() {
		let dir = tempfile::tempdir().unwrap();
		let logger = Logger::with_log_file(dir.path().join(LOG_FILE));

		logger.info("ephemeral").unwrap();

		assert!(!logger.log_file.exists());
	}

	#[test]
	fn clear_log_file_is_a_noop_when_missing() {
		let dir = tempfile::tempdir().unwrap();
		let logger = Logger::with_log_file(dir.path().join(LOG_FILE));

		logger.clear_log_file().unwrap();
		assert!(!logger.log_file.exists());
	}

	#[test]
	fn clear_log_file_removes_and_next_write_recreates() {
		let dir = tempfile::tempdir().unwrap();
		let mut logger = Logger::with_log_file(dir.path().join(LOG_FILE));
		logger.enable_file_mirroring();

		logger.info("first").unwrap();
		assert!(logger.log_file.exists());

		logger.clear_log_file().unwrap();
		assert!(!logger.log_file.exists());

		logger.info("second").unwrap();
		let lines = read_lines(&logger.log_file);
		assert_eq!(lines.len(), 1);
		assert!(lines[0].ends_with("INFO: second"));
	}

	#[test]
	fn severity_parses_labels_and_rejects_strangers() {
		assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
		assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
		assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);

		let err = "verbose".parse::<Severity>().unwrap_err();
		assert!(matches!(err, LogError::InvalidSeverity(ref s) if s == "verbose"));
	}

	#[test]
	fn parsed_severity_takes_effect_immediately() {
		let dir = tempfile::tempdir().unwrap();
		let mut logger = Logger::with_log_file(dir.path().join(LOG_FILE));
		logger.enable_file_mirroring();

		logger.set_severity("error".parse().unwrap());
		logger.log("boom").unwrap();

		let lines = read_lines(&logger.log_file);
		assert!(lines[0].contains("ERROR: boom"));
	}
}
