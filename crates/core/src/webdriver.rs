//! [`Automation`] over a remote WebDriver endpoint, backed by `thirtyfour`.
//!
//! Client errors are classified by the phase they occur in: anything while
//! opening or closing the session is a connection failure, anything while
//! locating is element-not-found, anything while acting on a located element
//! is an interaction failure.

use async_trait::async_trait;
use thirtyfour::{By, WebDriver, WebElement};
use tracing::debug;

use crate::capabilities::Capabilities;
use crate::driver::{Automation, ElementHandle, RemoteSession};
use crate::error::{Error, Result};
use crate::scenario::Action;

/// Opens WebDriver sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDriverAutomation;

impl WebDriverAutomation {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl Automation for WebDriverAutomation {
	type Session = WebDriverSession;

	async fn connect(&self, endpoint: &str, capabilities: &Capabilities) -> Result<WebDriverSession> {
		debug!(target = "formrun", endpoint, capabilities = ?capabilities.as_map(), "new session");

		let driver = WebDriver::new(endpoint, capabilities.clone().into_map())
			.await
			.map_err(|e| Error::connection(endpoint, e))?;

		Ok(WebDriverSession {
			driver,
			endpoint: endpoint.to_string(),
		})
	}
}

/// A WebDriver session bound to one endpoint.
pub struct WebDriverSession {
	driver: WebDriver,
	endpoint: String,
}

#[async_trait]
impl RemoteSession for WebDriverSession {
	type Element = WebDriverElement;

	async fn find_by_name(&self, name: &str) -> Result<WebDriverElement> {
		let element = self
			.driver
			.find(By::Name(name))
			.await
			.map_err(|e| Error::not_found(name, e))?;

		Ok(WebDriverElement {
			element,
			name: name.to_string(),
		})
	}

	async fn quit(self) -> Result<()> {
		let WebDriverSession { driver, endpoint } = self;
		debug!(target = "formrun", endpoint = %endpoint, "quit session");
		driver.quit().await.map_err(|e| Error::connection(&endpoint, e))
	}
}

/// An element located by name.
pub struct WebDriverElement {
	element: WebElement,
	name: String,
}

#[async_trait]
impl ElementHandle for WebDriverElement {
	async fn send_keys(&self, text: &str) -> Result<()> {
		self.element
			.send_keys(text)
			.await
			.map_err(|e| Error::interaction(Action::Type, &self.name, e))
	}

	async fn click(&self) -> Result<()> {
		self.element
			.click()
			.await
			.map_err(|e| Error::interaction(Action::Click, &self.name, e))
	}
}
