use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde_json::json;
use tripsearch_core::{
	Destination, DestinationSet, FieldErrors, FormDefaults, SearchEvent, SearchTuning,
	SearchWorker, SubmitError, TripSearchSession,
};

use crate::settings::ResolvedConfig;

/// How long to wait for the worker to answer one query.
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);
/// Simulated gap between keystrokes when planning a trip.
const KEYSTROKE_GAP: Duration = Duration::from_millis(15);
const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// What a subcommand produced, ready for printing.
#[derive(Debug)]
pub(crate) enum Outcome {
	Suggestions {
		query: String,
		results: Vec<Destination>,
	},
	Planned {
		event: SearchEvent,
	},
	Rejected {
		errors: FieldErrors,
	},
}

impl Outcome {
	pub(crate) fn is_rejected(&self) -> bool {
		matches!(self, Self::Rejected { .. })
	}
}

/// Trip details supplied by the `plan` subcommand.
#[derive(Debug, Clone, Default)]
pub(crate) struct TripRequest {
	pub(crate) destination: String,
	pub(crate) check_in: Option<NaiveDate>,
	pub(crate) check_out: Option<NaiveDate>,
	pub(crate) rooms: Option<u32>,
	pub(crate) guests_per_room: Option<u32>,
}

/// Runs subcommands against the configured dataset.
pub(crate) struct TripWorkflow {
	config: ResolvedConfig,
	destinations: Arc<DestinationSet>,
}

impl TripWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let destinations = DestinationSet::load(&config.dataset).with_context(|| {
			format!(
				"failed to load destinations from {}",
				config.dataset.display()
			)
		})?;
		info!(
			"loaded {} destinations from {}",
			destinations.len(),
			config.dataset.display()
		);
		Ok(Self::with_destinations(config, Arc::new(destinations)))
	}

	pub(crate) fn with_destinations(
		config: ResolvedConfig,
		destinations: Arc<DestinationSet>,
	) -> Self {
		Self {
			config,
			destinations,
		}
	}

	/// One search through a dedicated worker.
	pub(crate) fn suggest(&self, query: &str) -> Result<Outcome> {
		let mut worker = SearchWorker::spawn(self.config.tuning);
		worker.init(self.destinations.to_vec());
		let id = worker.search(query);

		let reply = worker
			.recv_timeout(REPLY_TIMEOUT)
			.filter(|reply| reply.id == id)
			.context("search worker did not answer")?;
		worker.terminate();

		Ok(Outcome::Suggestions {
			query: reply.payload.query,
			results: reply.payload.results,
		})
	}

	/// Drive a mounted form the way a user would: type the destination,
	/// take the suggestion naming it, fill in the rest and submit.
	pub(crate) fn plan(&self, request: TripRequest) -> Result<Outcome> {
		let mut session = TripSearchSession::mount(
			Arc::clone(&self.destinations),
			self.config.form_rules(),
			FormDefaults::default(),
			self.config.session_settings(),
		);

		let now = type_destination(&mut session, &request.destination);
		settle(&mut session, now)?;

		if let Some(index) = session
			.suggestions()
			.iter()
			.position(|suggestion| suggestion.is_term(&request.destination))
		{
			let picked = session.select_suggestion(index);
			debug!("selected suggestion {picked:?}");
		} else {
			debug!(
				"no suggestion named '{}' among {} results",
				request.destination,
				session.suggestions().len()
			);
		}

		let form = session.controller_mut();
		form.set_check_in(request.check_in);
		form.set_check_out(request.check_out);
		if let Some(rooms) = request.rooms {
			form.set_rooms(rooms);
		}
		if let Some(guests_per_room) = request.guests_per_room {
			form.set_guests_per_room(guests_per_room);
		}

		let outcome = match session.submit() {
			Ok(event) => Outcome::Planned { event },
			Err(SubmitError::Invalid(errors)) => Outcome::Rejected { errors },
			Err(err @ SubmitError::AlreadyNavigating) => bail!(err),
		};
		session.unmount();
		Ok(outcome)
	}

	/// Serve the worker protocol with the loaded dataset already indexed.
	pub(crate) fn serve<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<usize> {
		run_worker(
			self.config.tuning,
			Some(self.destinations.as_ref()),
			input,
			output,
		)
	}
}

fn type_destination(session: &mut TripSearchSession, text: &str) -> Instant {
	let mut now = Instant::now();
	let mut typed = String::with_capacity(text.len());
	for ch in text.chars() {
		typed.push(ch);
		now += KEYSTROKE_GAP;
		session.input_destination(&typed, now);
		session.tick(now);
	}
	now
}

/// Tick until the debounced query has been answered.
fn settle(session: &mut TripSearchSession, mut now: Instant) -> Result<()> {
	let deadline = Instant::now() + REPLY_TIMEOUT;
	while session.is_busy() {
		if Instant::now() >= deadline {
			bail!("search worker did not answer");
		}
		if let Some(due) = session.next_deadline() {
			now = now.max(due);
		}
		if !session.tick(now) {
			thread::sleep(POLL_INTERVAL);
		}
	}
	Ok(())
}

/// Serve the JSON worker protocol: one message per input line, one reply
/// per search on the output. Malformed lines are ignored.
pub(crate) fn run_worker<R, W>(
	tuning: SearchTuning,
	destinations: Option<&DestinationSet>,
	input: R,
	output: &mut W,
) -> Result<usize>
where
	R: BufRead,
	W: Write,
{
	let mut worker = SearchWorker::spawn(tuning);
	if let Some(destinations) = destinations {
		worker.init(destinations.to_vec());
	}

	let mut replies = 0;
	for line in input.lines() {
		let line = line.context("failed to read worker input")?;
		if line.trim().is_empty() {
			continue;
		}
		let Some(id) = worker.post_raw(&line) else {
			continue;
		};

		loop {
			let Some(reply) = worker.recv_timeout(REPLY_TIMEOUT) else {
				warn!("no reply for request {id}");
				break;
			};
			let message = json!({
				"type": "results",
				"id": reply.id,
				"query": reply.payload.query,
				"payload": reply.payload.results,
			});
			writeln!(output, "{message}").context("failed to write worker reply")?;
			replies += 1;
			if reply.id == id {
				break;
			}
		}
		output.flush().context("failed to flush worker output")?;
	}

	worker.terminate();
	Ok(replies)
}
