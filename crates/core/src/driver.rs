//! Seam between the runner and the remote automation client.
//!
//! The runner only needs three capabilities from a client: open a session,
//! locate an element by its `name` attribute, and act on that element.
//! [`crate::webdriver`] implements these over a WebDriver endpoint.

use async_trait::async_trait;

use crate::capabilities::Capabilities;
use crate::error::Result;

/// Opens sessions against a remote automation endpoint.
#[async_trait]
pub trait Automation: Send + Sync {
	type Session: RemoteSession;

	/// Opens a session. Fails with [`crate::Error::Connection`].
	async fn connect(&self, endpoint: &str, capabilities: &Capabilities) -> Result<Self::Session>;
}

/// A live session. Must be released with [`RemoteSession::quit`].
#[async_trait]
pub trait RemoteSession: Send + Sync + Sized {
	type Element: ElementHandle;

	/// Locates the element whose `name` attribute equals `name`.
	///
	/// Fails with [`crate::Error::ElementNotFound`] once the client's default
	/// wait policy gives up.
	async fn find_by_name(&self, name: &str) -> Result<Self::Element>;

	/// Ends the session on the remote side.
	async fn quit(self) -> Result<()>;
}

/// A located element. Failures surface as [`crate::Error::Interaction`].
#[async_trait]
pub trait ElementHandle: Send + Sync {
	async fn send_keys(&self, text: &str) -> Result<()>;

	async fn click(&self) -> Result<()>;
}
