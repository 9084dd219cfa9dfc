use clap::Parser;
use formrun_cli::{
	cli::Cli,
	commands,
	error::CliError,
	logging,
	output::{self, CommandResult, OutputFormat, ResultBuilder},
};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(command, err, format);
		std::process::exit(1);
	}
}

fn handle_error(command: &str, err: CliError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the envelope with ok=false on stdout for machine consumers
	if format != OutputFormat::Text {
		let result: CommandResult<()> = ResultBuilder::new(command).error(cmd_error).build();
		let _ = output::print_result(&result, format);
	}
}
