//! Structured result envelope for CLI commands.
//!
//! Every command prints one envelope on stdout:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "ok": true,
//!   "command": "run",
//!   "data": { "endpoint": "...", "profile": "phone", "steps": [ ... ] },
//!   "timings": { "durationMs": 812 }
//! }
//! ```
//!
//! On failure `data` is replaced by `error: { code, message, details }`.


use std::io::{self, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use formrun::RunnerConfig;
use serde::{Deserialize, Serialize};

/// Current schema version for command output.
pub const SCHEMA_VERSION: u32 = 1;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Pretty-printed JSON (default)
	#[default]
	Json,
	/// Single-line JSON
	Ndjson,
	/// Human-readable text
	Text,
}

impl std::str::FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"json" => Ok(OutputFormat::Json),
			"ndjson" => Ok(OutputFormat::Ndjson),
			"text" => Ok(OutputFormat::Text),
			_ => Err(format!("unknown format: {s}")),
		}
	}
}

/// The result envelope returned by every command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	pub schema_version: u32,

	pub ok: bool,

	/// Command name ("run", "capabilities")
	pub command: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,

	/// Effective configuration used for the command
	#[serde(skip_serializing_if = "Option::is_none")]
	pub config: Option<RunnerConfig>,
}

/// Error information for failed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,

	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Session could not be opened or released
	ConnectionFailed,
	/// No element with the requested name
	ElementNotFound,
	/// Send-keys or click failed
	InteractionFailed,
	/// Bad flags, config, or scenario
	InvalidInput,
	IoError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			ErrorCode::ConnectionFailed => "CONNECTION_FAILED",
			ErrorCode::ElementNotFound => "ELEMENT_NOT_FOUND",
			ErrorCode::InteractionFailed => "INTERACTION_FAILED",
			ErrorCode::InvalidInput => "INVALID_INPUT",
			ErrorCode::IoError => "IO_ERROR",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// Builder for constructing command results
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	config: Option<RunnerConfig>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
			config: None,
		}
	}

	/// Start timing from an earlier instant, e.g. before config resolution.
	pub fn started_at(mut self, start: Instant) -> Self {
		self.start_time = start;
		self
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, error: CommandError) -> Self {
		self.error = Some(error);
		self
	}

	pub fn config(mut self, config: RunnerConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn build(self) -> CommandResult<T> {
		CommandResult {
			schema_version: SCHEMA_VERSION,
			ok: self.error.is_none() && self.data.is_some(),
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(Timings::from(self.start_time.elapsed())),
			config: self.config,
		}
	}
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) -> io::Result<()> {
	let mut stdout = io::stdout().lock();
	match format {
		OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(result)?),
		OutputFormat::Ndjson => writeln!(stdout, "{}", serde_json::to_string(result)?),
		OutputFormat::Text => write_text(&mut stdout, result),
	}
}

fn write_text<T: Serialize>(out: &mut impl Write, result: &CommandResult<T>) -> io::Result<()> {
	if result.ok {
		writeln!(out, "{} {}", "ok".green().bold(), result.command)?;
		if let Some(ref data) = result.data {
			writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
		}
	} else if let Some(ref error) = result.error {
		writeln!(out, "{} [{}]: {}", "error".red().bold(), error.code, error.message)?;
	}

	if let Some(ref timings) = result.timings {
		writeln!(out, "{}", format!("completed in {}ms", timings.duration_ms).dimmed())?;
	}
	Ok(())
}

/// Print an error to stderr in human-readable format
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("{} [{}]: {}", "error".red().bold(), error.code, error.message);
}
