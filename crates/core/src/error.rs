//! Error types for scenario runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::scenario::Action;

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a scenario run.
///
/// None of these are retried. The first one raised ends the run.
#[derive(Debug, Error)]
pub enum Error {
	/// Endpoint unreachable, malformed, or capabilities rejected.
	#[error("Failed to open session at {endpoint}: {message}")]
	Connection { endpoint: String, message: String },

	/// No element with the given `name` attribute appeared within the client's wait window.
	#[error("No element named '{name}': {message}")]
	ElementNotFound { name: String, message: String },

	/// Send-keys or click failed against an element that was located.
	#[error("{action} on element '{name}' failed: {message}")]
	Interaction {
		action: Action,
		name: String,
		message: String,
	},

	/// Invalid runner configuration or scenario.
	#[error("Invalid configuration: {0}")]
	Config(String),

	/// Failed to read a config or scenario file.
	#[error("Failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn connection(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
		Error::Connection {
			endpoint: endpoint.into(),
			message: err.to_string(),
		}
	}

	pub(crate) fn not_found(name: impl Into<String>, err: impl std::fmt::Display) -> Self {
		Error::ElementNotFound {
			name: name.into(),
			message: err.to_string(),
		}
	}

	pub(crate) fn interaction(
		action: Action,
		name: impl Into<String>,
		err: impl std::fmt::Display,
	) -> Self {
		Error::Interaction {
			action,
			name: name.into(),
			message: err.to_string(),
		}
	}

	/// Returns true if the session could not be opened or released.
	pub fn is_connection(&self) -> bool {
		matches!(self, Error::Connection { .. })
	}

	/// Returns true if a named element could not be located.
	pub fn is_element_not_found(&self) -> bool {
		matches!(self, Error::ElementNotFound { .. })
	}

	/// Returns true if an action against a located element failed.
	pub fn is_interaction(&self) -> bool {
		matches!(self, Error::Interaction { .. })
	}

	/// Element name the error refers to, if any.
	pub fn element_name(&self) -> Option<&str> {
		match self {
			Error::ElementNotFound { name, .. } | Error::Interaction { name, .. } => Some(name),
			_ => None,
		}
	}
}
