use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use telemetry::LoggerConfig;

/// Transport Engine simulation options tool
#[derive(Parser, Debug)]
#[command(name = "transport")]
#[command(about = "Validate simulation options and prepare them for the transport backend")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::default()
            .with_level(if self.verbose { "debug" } else { "warn" })
            .with_json(self.json_logs)
            .with_target(self.verbose)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an options payload and print the normalized options or every error
    Validate(ValidateArgs),
    /// Validate an options payload and print its SHIELD-HIT12A beam cards
    Cards(InputArgs),
    /// Print the built-in default options
    Defaults {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON options payload, `-` for stdin
    pub file: PathBuf,

    /// JSON file with the defaults to merge under the payload
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// TOML validator settings
    #[arg(long, env = "TRANSPORT_VALIDATOR_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Identity the payload is submitted under, recorded in error reports
    #[arg(long)]
    pub submitted_by: Option<String>,

    /// Request id recorded in error reports
    #[arg(long)]
    pub request_id: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
