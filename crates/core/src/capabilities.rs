//! Capability descriptors negotiated at session creation.
//!
//! A [`PlatformProfile`] supplies a base descriptor. The exact device or
//! platform version is left to the caller, who layers overrides on top with
//! [`Capabilities::merge`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Named base descriptor for the target platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformProfile {
	/// Generic phone defaults.
	#[default]
	Phone,
	/// Generic tablet defaults.
	Tablet,
	/// Android device defaults.
	Android,
	/// Empty base; every capability comes from overrides.
	Custom,
}

impl PlatformProfile {
	pub fn as_str(&self) -> &'static str {
		match self {
			PlatformProfile::Phone => "phone",
			PlatformProfile::Tablet => "tablet",
			PlatformProfile::Android => "android",
			PlatformProfile::Custom => "custom",
		}
	}

	/// Base capabilities for this profile.
	pub fn defaults(&self) -> Capabilities {
		let pairs: &[(&str, &str)] = match self {
			PlatformProfile::Phone => &[("browserName", "iPhone"), ("platform", "MAC")],
			PlatformProfile::Tablet => &[("browserName", "iPad"), ("platform", "MAC")],
			PlatformProfile::Android => &[("browserName", "android"), ("platform", "ANDROID")],
			PlatformProfile::Custom => &[],
		};

		let mut caps = Capabilities::new();
		for (key, value) in pairs {
			caps.set(*key, *value);
		}
		caps
	}
}

impl fmt::Display for PlatformProfile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PlatformProfile {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"phone" => Ok(PlatformProfile::Phone),
			"tablet" => Ok(PlatformProfile::Tablet),
			"android" => Ok(PlatformProfile::Android),
			"custom" => Ok(PlatformProfile::Custom),
			_ => Err(Error::Config(format!("unknown platform profile: {s}"))),
		}
	}
}

/// Capabilities payload passed once when the session is opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(Map<String, Value>);

impl Capabilities {
	pub fn new() -> Self {
		Self::default()
	}

	/// Profile defaults with `overrides` applied on top.
	pub fn for_profile(profile: PlatformProfile, overrides: Option<&Capabilities>) -> Self {
		let mut caps = profile.defaults();
		if let Some(overrides) = overrides {
			caps.merge(overrides);
		}
		caps
	}

	/// Parses a JSON object. Anything other than an object is rejected.
	pub fn from_json(json: &str) -> Result<Self> {
		match serde_json::from_str::<Value>(json)? {
			Value::Object(map) => Ok(Self(map)),
			other => Err(Error::Config(format!(
				"capabilities must be a JSON object, got: {other}"
			))),
		}
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Copies every key of `other` into `self`, replacing existing values.
	pub fn merge(&mut self, other: &Capabilities) {
		for (key, value) in &other.0 {
			self.0.insert(key.clone(), value.clone());
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	pub fn into_map(self) -> Map<String, Value> {
		self.0
	}
}
