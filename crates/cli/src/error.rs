use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Run(#[from] formrun::Error),

	#[error("failed to write output: {0}")]
	Io(#[from] std::io::Error),
}

impl CliError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, details) = match self {
			CliError::Run(err) => classify(err),
			CliError::Io(_) => (ErrorCode::IoError, None),
		};

		CommandError {
			code,
			message: self.to_string(),
			details,
		}
	}
}

fn classify(err: &formrun::Error) -> (ErrorCode, Option<serde_json::Value>) {
	use formrun::Error;

	match err {
		Error::Connection { endpoint, .. } => (
			ErrorCode::ConnectionFailed,
			Some(serde_json::json!({ "endpoint": endpoint })),
		),
		Error::ElementNotFound { name, .. } => (
			ErrorCode::ElementNotFound,
			Some(serde_json::json!({ "name": name })),
		),
		Error::Interaction { action, name, .. } => (
			ErrorCode::InteractionFailed,
			Some(serde_json::json!({ "name": name, "action": action })),
		),
		Error::Config(_) | Error::Json(_) => (ErrorCode::InvalidInput, None),
		Error::Io { path, .. } => (
			ErrorCode::IoError,
			Some(serde_json::json!({ "path": path })),
		),
	}
}
