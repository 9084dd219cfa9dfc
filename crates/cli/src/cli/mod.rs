
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand, ValueEnum};
use formrun::{Capabilities, ConfigFile, Overrides, PlatformProfile, RunnerConfig};

use crate::error::Result;
use crate::output::OutputFormat;

/// Cargo-like help colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(name = "formrun")]
#[command(about = "Fill and submit a form on a remote mobile app over WebDriver")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default), ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
	pub format: OutputFormat,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Open a session, run the scenario, and quit the session.
	Run(RunArgs),
	/// Print the capabilities that would be sent, without connecting.
	Capabilities(TargetArgs),
}

impl Commands {
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Run(_) => "run",
			Commands::Capabilities(_) => "capabilities",
		}
	}
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
	#[command(flatten)]
	pub target: TargetArgs,

	/// JSON scenario file; defaults to the built-in sign-up form.
	#[arg(long, value_name = "FILE")]
	pub scenario: Option<PathBuf>,
}

/// Where to connect and what to ask for.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
	/// Remote WebDriver endpoint
	#[arg(long, env = "FORMRUN_ENDPOINT", value_name = "URL")]
	pub endpoint: Option<String>,

	/// Base capability profile
	#[arg(long, env = "FORMRUN_PROFILE", value_enum)]
	pub profile: Option<CliProfile>,

	/// JSON object merged over the profile capabilities
	#[arg(long, env = "FORMRUN_CAPABILITIES", value_name = "JSON")]
	pub capabilities: Option<String>,

	/// JSON config file with endpoint, profile, and capabilities
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

impl TargetArgs {
	/// Layers the config file under flags and environment.
	pub fn resolve(&self) -> Result<RunnerConfig> {
		let file = self
			.config
			.as_deref()
			.map(ConfigFile::from_file)
			.transpose()?;
		let capabilities = self
			.capabilities
			.as_deref()
			.map(Capabilities::from_json)
			.transpose()?;

		Ok(RunnerConfig::resolve(
			file,
			Overrides {
				endpoint: self.endpoint.clone(),
				profile: self.profile.map(Into::into),
				capabilities,
			},
		))
	}
}

/// Capability profile (CLI wrapper for formrun::PlatformProfile)
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliProfile {
	Phone,
	Tablet,
	Android,
	/// No defaults; capabilities come only from --capabilities or the config file
	Custom,
}

impl From<CliProfile> for PlatformProfile {
	fn from(profile: CliProfile) -> Self {
		match profile {
			CliProfile::Phone => PlatformProfile::Phone,
			CliProfile::Tablet => PlatformProfile::Tablet,
			CliProfile::Android => PlatformProfile::Android,
			CliProfile::Custom => PlatformProfile::Custom,
		}
	}
}
