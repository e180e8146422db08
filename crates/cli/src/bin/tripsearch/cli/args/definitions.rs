use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tripsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tripsearch",
	version,
	long_version = long_version(),
	about = "Destination autocomplete and trip-search planning",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TRIPSEARCH_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long,
		value_name = "PATH",
		global = true,
		help = "Destination dataset, JSON or gzipped JSON (default: dataset.path)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "RATIO",
		global = true,
		help = "Share of query characters allowed to be typos (default: 0.3)"
	)]
	pub(crate) threshold: Option<f32>,
	#[arg(
		long = "min-score",
		value_name = "NUM",
		global = true,
		help = "Drop suggestions scoring below this (default: 0)"
	)]
	pub(crate) min_score: Option<u16>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		global = true,
		help = "Quiet window before a keystroke triggers a search (default: 100)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "min-check-in-offset",
		value_name = "DAYS",
		global = true,
		help = "Days from today until the earliest allowed check-in (default: 0)"
	)]
	pub(crate) min_check_in_offset: Option<u32>,
	#[arg(
		short,
		long,
		global = true,
		help = "Log debug output to stderr (default: warnings only)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Command {
	/// Print destination suggestions for a query.
	Suggest {
		#[arg(value_name = "QUERY")]
		query: String,
	},
	/// Type a destination, pick a suggestion, and submit a trip search.
	Plan {
		#[arg(long, value_name = "TEXT")]
		destination: String,
		#[arg(long = "check-in", value_name = "YYYY-MM-DD")]
		check_in: Option<NaiveDate>,
		#[arg(long = "check-out", value_name = "YYYY-MM-DD")]
		check_out: Option<NaiveDate>,
		#[arg(long, value_name = "NUM")]
		rooms: Option<u32>,
		#[arg(long = "guests-per-room", value_name = "NUM")]
		guests_per_room: Option<u32>,
	},
	/// Serve the JSON worker protocol over stdin and stdout.
	Worker,
}
