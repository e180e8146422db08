mod cli;
mod logging;
mod settings;
mod workflow;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use cli::{Command, OutputFormat, parse_cli, print_json, print_plain};
use workflow::{Outcome, TripRequest, TripWorkflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.command {
		Command::Suggest { query } => {
			let workflow = TripWorkflow::from_config(resolved)?;
			report(cli.output, &workflow.suggest(&query)?)
		}
		Command::Plan {
			destination,
			check_in,
			check_out,
			rooms,
			guests_per_room,
		} => {
			let workflow = TripWorkflow::from_config(resolved)?;
			let request = TripRequest {
				destination,
				check_in,
				check_out,
				rooms,
				guests_per_room,
			};
			report(cli.output, &workflow.plan(request)?)
		}
		Command::Worker => {
			let workflow = TripWorkflow::from_config(resolved)?;
			workflow.serve(io::stdin().lock(), &mut io::stdout().lock())?;
			Ok(ExitCode::SUCCESS)
		}
	}
}

/// Print the outcome in the chosen format; a rejected plan exits with 2.
fn report(format: OutputFormat, outcome: &Outcome) -> Result<ExitCode> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}

	if outcome.is_rejected() {
		Ok(ExitCode::from(2))
	} else {
		Ok(ExitCode::SUCCESS)
	}
}
