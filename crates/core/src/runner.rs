//! Executes a [`Scenario`] against one remote session.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::capabilities::PlatformProfile;
use crate::config::RunnerConfig;
use crate::driver::{Automation, ElementHandle, RemoteSession};
use crate::error::Result;
use crate::scenario::{Action, Scenario, Step};
use crate::webdriver::WebDriverAutomation;

/// One completed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
	pub index: usize,
	pub action: Action,
	pub name: String,
	pub duration_ms: u64,
}

/// Summary of a successful run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
	pub endpoint: String,
	pub profile: PlatformProfile,
	pub steps: Vec<StepRecord>,
}

/// Runs the sign-up form scenario over WebDriver.
pub async fn run_default(config: &RunnerConfig) -> Result<RunReport> {
	run_scenario(&WebDriverAutomation::new(), config, &Scenario::sign_up_form()).await
}

/// Connects, runs every step in order, and quits the session.
///
/// The first failing step aborts the run. The session is quit on every path
/// once it has been opened. If quitting fails after a step already failed,
/// the step error wins and the quit error is only logged.
pub async fn run_scenario<A: Automation>(
	automation: &A,
	config: &RunnerConfig,
	scenario: &Scenario,
) -> Result<RunReport> {
	scenario.validate()?;
	let endpoint = config.endpoint_url()?;

	info!(
		target = "formrun",
		endpoint = %endpoint,
		profile = %config.profile,
		steps = scenario.steps.len(),
		"open session"
	);
	let session = automation.connect(endpoint.as_str(), &config.capabilities).await?;

	match run_steps(&session, scenario).await {
		Ok(steps) => {
			session.quit().await?;
			info!(target = "formrun", steps = steps.len(), "scenario complete");
			Ok(RunReport {
				endpoint: endpoint.to_string(),
				profile: config.profile,
				steps,
			})
		}
		Err(err) => {
			if let Err(quit_err) = session.quit().await {
				warn!(target = "formrun", error = %quit_err, "failed to quit session after error");
			}
			Err(err)
		}
	}
}

async fn run_steps<S: RemoteSession>(session: &S, scenario: &Scenario) -> Result<Vec<StepRecord>> {
	let mut records = Vec::with_capacity(scenario.steps.len());

	for (index, step) in scenario.steps.iter().enumerate() {
		let start = Instant::now();
		info!(target = "formrun", index, action = %step.action(), name = step.name(), "step");

		let element = session.find_by_name(step.name()).await?;
		match step {
			Step::Type { text, .. } => {
				debug!(target = "formrun", name = step.name(), chars = text.chars().count(), "send keys");
				element.send_keys(text).await?;
			}
			Step::Click { .. } => element.click().await?,
		}

		records.push(StepRecord {
			index,
			action: step.action(),
			name: step.name().to_string(),
			duration_ms: start.elapsed().as_millis() as u64,
		});
	}

	Ok(records)
}
