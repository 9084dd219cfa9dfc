//! Print the resolved capabilities without opening a session.

use crate::cli::TargetArgs;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, print_result};

pub fn execute(args: &TargetArgs, format: OutputFormat) -> Result<()> {
	let config = args.resolve()?;

	let result = ResultBuilder::new("capabilities")
		.data(config.capabilities.clone())
		.config(config)
		.build();
	print_result(&result, format)?;
	Ok(())
}
