//! In-memory [`Automation`] that records every call and keeps field values,
//! standing in for a remote application.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use formrun::{Action, Automation, Capabilities, ElementHandle, Error, RemoteSession, Result};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	Connect(String),
	Find(String),
	SendKeys(String, String),
	Click(String),
	Quit,
}

#[derive(Default)]
struct State {
	reachable: bool,
	elements: HashSet<String>,
	stale: HashSet<String>,
	fail_quit: bool,
	calls: Mutex<Vec<Call>>,
	values: Mutex<HashMap<String, String>>,
	values_at_click: Mutex<Option<HashMap<String, String>>>,
	capabilities: Mutex<Option<Capabilities>>,
}

#[derive(Clone)]
pub struct FakeApp {
	state: Arc<State>,
}

impl FakeApp {
	/// Reachable app exposing elements with the given names.
	pub fn with_elements(names: &[&str]) -> FakeAppBuilder {
		FakeAppBuilder {
			state: State {
				reachable: true,
				elements: names.iter().map(|n| n.to_string()).collect(),
				..Default::default()
			},
		}
	}

	/// The sign-up form with all three elements present.
	pub fn sign_up_form() -> FakeAppBuilder {
		Self::with_elements(&["fname", "lname", "continue"])
	}

	pub fn calls(&self) -> Vec<Call> {
		self.state.calls.lock().clone()
	}

	pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
		self.state.calls.lock().iter().filter(|c| pred(c)).count()
	}

	pub fn value(&self, name: &str) -> Option<String> {
		self.state.values.lock().get(name).cloned()
	}

	/// Field values as they were when the first click landed.
	pub fn values_at_click(&self) -> Option<HashMap<String, String>> {
		self.state.values_at_click.lock().clone()
	}

	pub fn negotiated_capabilities(&self) -> Option<Capabilities> {
		self.state.capabilities.lock().clone()
	}

	fn record(&self, call: Call) {
		self.state.calls.lock().push(call);
	}
}

pub struct FakeAppBuilder {
	state: State,
}

impl FakeAppBuilder {
	pub fn unreachable(mut self) -> Self {
		self.state.reachable = false;
		self
	}

	/// Actions against `name` fail as if the element went stale.
	pub fn stale(mut self, name: &str) -> Self {
		self.state.stale.insert(name.to_string());
		self
	}

	pub fn fail_quit(mut self) -> Self {
		self.state.fail_quit = true;
		self
	}

	pub fn build(self) -> FakeApp {
		FakeApp {
			state: Arc::new(self.state),
		}
	}
}

#[async_trait]
impl Automation for FakeApp {
	type Session = FakeSession;

	async fn connect(&self, endpoint: &str, capabilities: &Capabilities) -> Result<FakeSession> {
		self.record(Call::Connect(endpoint.to_string()));
		if !self.state.reachable {
			return Err(Error::Connection {
				endpoint: endpoint.to_string(),
				message: "connection refused".into(),
			});
		}
		*self.state.capabilities.lock() = Some(capabilities.clone());
		Ok(FakeSession { app: self.clone() })
	}
}

pub struct FakeSession {
	app: FakeApp,
}

#[async_trait]
impl RemoteSession for FakeSession {
	type Element = FakeElement;

	async fn find_by_name(&self, name: &str) -> Result<FakeElement> {
		self.app.record(Call::Find(name.to_string()));
		if !self.app.state.elements.contains(name) {
			return Err(Error::ElementNotFound {
				name: name.to_string(),
				message: "no such element".into(),
			});
		}
		Ok(FakeElement {
			app: self.app.clone(),
			name: name.to_string(),
		})
	}

	async fn quit(self) -> Result<()> {
		self.app.record(Call::Quit);
		if self.app.state.fail_quit {
			return Err(Error::Connection {
				endpoint: "fake".into(),
				message: "session already closed".into(),
			});
		}
		Ok(())
	}
}

pub struct FakeElement {
	app: FakeApp,
	name: String,
}

impl FakeElement {
	fn check_stale(&self, action: Action) -> Result<()> {
		if self.app.state.stale.contains(&self.name) {
			return Err(Error::Interaction {
				action,
				name: self.name.clone(),
				message: "stale element reference".into(),
			});
		}
		Ok(())
	}
}

#[async_trait]
impl ElementHandle for FakeElement {
	async fn send_keys(&self, text: &str) -> Result<()> {
		self.app.record(Call::SendKeys(self.name.clone(), text.to_string()));
		self.check_stale(Action::Type)?;
		self.app
			.state
			.values
			.lock()
			.entry(self.name.clone())
			.or_default()
			.push_str(text);
		Ok(())
	}

	async fn click(&self) -> Result<()> {
		self.app.record(Call::Click(self.name.clone()));
		self.check_stale(Action::Click)?;
		let snapshot = self.app.state.values.lock().clone();
		self.app.state.values_at_click.lock().get_or_insert(snapshot);
		Ok(())
	}
}
