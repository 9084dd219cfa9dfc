//! formrun: drive a form on a remote mobile application over WebDriver.
//!
//! A run opens one session against a remote automation endpoint, locates
//! form elements by their `name` attribute, types into them, clicks, and
//! releases the session.
//!
//! # Example
//!
//! ```ignore
//! use formrun::{RunnerConfig, run_default};
//!
//! #[tokio::main]
//! async fn main() -> formrun::Result<()> {
//!     let config = RunnerConfig::new("http://10.0.2.92:3001/wd/hub/");
//!     let report = run_default(&config).await?;
//!     assert_eq!(report.steps.len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! The runner is generic over [`Automation`], so custom clients can be
//! plugged in with [`run_scenario`].

pub mod capabilities;
pub mod config;
pub mod driver;
pub mod error;
pub mod runner;
pub mod scenario;
pub mod webdriver;

pub use capabilities::{Capabilities, PlatformProfile};
pub use config::{ConfigFile, DEFAULT_ENDPOINT, Overrides, RunnerConfig};
pub use driver::{Automation, ElementHandle, RemoteSession};
pub use error::{Error, Result};
pub use runner::{RunReport, StepRecord, run_default, run_scenario};
pub use scenario::{Action, Scenario, Step};
pub use webdriver::{WebDriverAutomation, WebDriverElement, WebDriverSession};
