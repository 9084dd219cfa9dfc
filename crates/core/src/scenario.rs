//! Scenario model: an ordered list of name-addressed UI steps.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of interaction performed on a located element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	Type,
	Click,
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Action::Type => f.write_str("type"),
			Action::Click => f.write_str("click"),
		}
	}
}

/// A single scenario step. Every step locates its element by `name` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
	/// Send `text` as keystrokes to the element.
	Type { name: String, text: String },
	/// Click the element.
	Click { name: String },
}

impl Step {
	pub fn type_text(name: impl Into<String>, text: impl Into<String>) -> Self {
		Step::Type {
			name: name.into(),
			text: text.into(),
		}
	}

	pub fn click(name: impl Into<String>) -> Self {
		Step::Click { name: name.into() }
	}

	pub fn name(&self) -> &str {
		match self {
			Step::Type { name, .. } | Step::Click { name } => name,
		}
	}

	pub fn action(&self) -> Action {
		match self {
			Step::Type { .. } => Action::Type,
			Step::Click { .. } => Action::Click,
		}
	}
}

/// Ordered steps run against a single session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
	pub steps: Vec<Step>,
}

impl Scenario {
	pub fn new(steps: Vec<Step>) -> Self {
		Self { steps }
	}

	/// The sign-up form: first name, last name, then continue.
	pub fn sign_up_form() -> Self {
		Self::new(vec![
			Step::type_text("fname", "kamal"),
			Step::type_text("lname", "Behera"),
			Step::click("continue"),
		])
	}

	pub fn from_json(json: &str) -> Result<Self> {
		let scenario: Scenario = serde_json::from_str(json)?;
		scenario.validate()?;
		Ok(scenario)
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&content)
	}

	/// Rejects empty scenarios and steps without an element name.
	pub fn validate(&self) -> Result<()> {
		if self.steps.is_empty() {
			return Err(Error::Config("scenario has no steps".into()));
		}
		if let Some(index) = self.steps.iter().position(|s| s.name().trim().is_empty()) {
			return Err(Error::Config(format!(
				"step {index} has an empty element name"
			)));
		}
		Ok(())
	}
}
