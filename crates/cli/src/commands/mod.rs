mod capabilities;
mod run;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;
	match cli.command {
		Commands::Run(args) => run::execute(&args, format).await,
		Commands::Capabilities(args) => capabilities::execute(&args, format),
	}
}
