//! Run a form scenario against the configured endpoint.
//!
//! # Example
//!
//! ```bash
//! formrun run --endpoint http://10.0.2.92:3001/wd/hub/ --profile phone
//! formrun run --scenario signup.json -f text
//! ```

use std::time::Instant;

use formrun::{Scenario, WebDriverAutomation, run_scenario};
use tracing::info;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, print_result};

pub async fn execute(args: &RunArgs, format: OutputFormat) -> Result<()> {
	let start = Instant::now();
	let config = args.target.resolve()?;
	let scenario = match &args.scenario {
		Some(path) => Scenario::from_file(path)?,
		None => Scenario::sign_up_form(),
	};

	info!(
		target = "formrun",
		endpoint = %config.endpoint,
		profile = %config.profile,
		scenario = args.scenario.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "sign-up form".into()),
		"run"
	);

	let report = run_scenario(&WebDriverAutomation::new(), &config, &scenario).await?;

	let result = ResultBuilder::new("run")
		.started_at(start)
		.config(config)
		.data(report)
		.build();
	print_result(&result, format)?;
	Ok(())
}
