//! Runner configuration: which endpoint to drive and what to ask it for.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::capabilities::{Capabilities, PlatformProfile};
use crate::error::{Error, Result};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/wd/hub/";

/// On-disk configuration. Every field is optional; unset fields fall through
/// to flags, environment, or defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
	#[serde(default)]
	pub endpoint: Option<String>,

	#[serde(default)]
	pub profile: Option<PlatformProfile>,

	/// Capability overrides applied on top of the profile defaults.
	#[serde(default)]
	pub capabilities: Option<Capabilities>,
}

impl ConfigFile {
	pub fn from_file(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(serde_json::from_str(&content)?)
	}
}

/// Explicit settings that take precedence over a [`ConfigFile`].
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub endpoint: Option<String>,
	pub profile: Option<PlatformProfile>,
	pub capabilities: Option<Capabilities>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
	/// Remote automation endpoint.
	pub endpoint: String,
	/// Base profile the capabilities were built from.
	pub profile: PlatformProfile,
	/// Capabilities sent at session creation.
	pub capabilities: Capabilities,
}

impl RunnerConfig {
	/// Config for `endpoint` with the default profile and no overrides.
	pub fn new(endpoint: impl Into<String>) -> Self {
		let profile = PlatformProfile::default();
		Self {
			endpoint: endpoint.into(),
			profile,
			capabilities: profile.defaults(),
		}
	}

	/// Layers defaults, then `file`, then `overrides`.
	///
	/// Capability overrides from both layers are merged in that order, so a
	/// key set on the command line beats the same key in the file.
	pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Self {
		let file = file.unwrap_or_default();

		let endpoint = overrides
			.endpoint
			.or(file.endpoint)
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
		let profile = overrides.profile.or(file.profile).unwrap_or_default();

		let mut capabilities = profile.defaults();
		if let Some(caps) = &file.capabilities {
			capabilities.merge(caps);
		}
		if let Some(caps) = &overrides.capabilities {
			capabilities.merge(caps);
		}

		Self {
			endpoint,
			profile,
			capabilities,
		}
	}

	pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
		self.capabilities = capabilities;
		self
	}

	/// Parses the endpoint. A malformed or non-HTTP endpoint is a connection failure.
	///
	/// The path always ends with `/` so protocol routes such as `session`
	/// resolve below it (`/wd/hub` and `/wd/hub/` name the same hub).
	pub fn endpoint_url(&self) -> Result<Url> {
		let mut url = Url::parse(&self.endpoint).map_err(|e| Error::connection(&self.endpoint, e))?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(Error::connection(
				&self.endpoint,
				format!("unsupported scheme '{}', expected http or https", url.scheme()),
			));
		}
		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}
		Ok(url)
	}
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT)
	}
}
