//! A mounted trip-search form with live destination suggestions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::debounce::{DEFAULT_DEBOUNCE, QueryDebouncer};
use crate::destinations::{Destination, DestinationSet};
use crate::form::{FormController, FormDefaults, FormRules, SearchEvent, SubmitError};
use crate::search::{SearchRuntime, SearchTuning, StalePolicy};

/// Tunables for a session's autocomplete behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
	pub debounce: Duration,
	pub tuning: SearchTuning,
	pub stale_policy: StalePolicy,
}

impl Default for SessionSettings {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			tuning: SearchTuning::default(),
			stale_policy: StalePolicy::default(),
		}
	}
}

/// Form controller, debouncer, and search worker wired together.
///
/// The worker lives exactly as long as the session: it is spawned by
/// [`TripSearchSession::mount`] and terminated by
/// [`TripSearchSession::unmount`] or on drop.
pub struct TripSearchSession {
	controller: FormController,
	debouncer: QueryDebouncer,
	runtime: SearchRuntime,
	suggestions: Vec<Destination>,
}

impl TripSearchSession {
	pub fn mount(
		destinations: Arc<DestinationSet>,
		rules: FormRules,
		defaults: FormDefaults,
		settings: SessionSettings,
	) -> Self {
		let mut runtime = SearchRuntime::create(settings.tuning, settings.stale_policy);
		runtime.init(destinations.to_vec());
		debug!(
			"mounted trip search over {} destinations (debounce {:?})",
			destinations.len(),
			settings.debounce
		);
		Self {
			controller: FormController::new(destinations, rules, defaults),
			debouncer: QueryDebouncer::new(settings.debounce),
			runtime,
			suggestions: Vec::new(),
		}
	}

	pub fn controller(&self) -> &FormController {
		&self.controller
	}

	/// Direct access for the date and guest fields.
	pub fn controller_mut(&mut self) -> &mut FormController {
		&mut self.controller
	}

	/// A keystroke in the destination field.
	pub fn input_destination(&mut self, text: &str, now: Instant) {
		self.controller.set_destination_text(text);
		self.debouncer
			.observe(text, self.controller.committed_term(), now);
		if text.trim().is_empty() {
			self.runtime.discard_pending();
			self.suggestions.clear();
		}
	}

	/// Advance timers and apply worker replies. Returns whether the
	/// suggestion list was replaced.
	pub fn tick(&mut self, now: Instant) -> bool {
		if let Some(query) = self.debouncer.poll(now) {
			self.runtime.issue(query);
		}
		match self.runtime.drain() {
			Some(results) => {
				self.suggestions = results;
				true
			}
			None => false,
		}
	}

	/// When the next debounced query is due, if one is pending.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Whether a query is waiting on the debounce window or the worker.
	pub fn is_busy(&self) -> bool {
		self.debouncer.is_pending() || self.runtime.is_in_flight()
	}

	pub fn suggestions(&self) -> &[Destination] {
		&self.suggestions
	}

	/// Commit the suggestion at `index` as the destination.
	pub fn select_suggestion(&mut self, index: usize) -> Option<Destination> {
		let record = self.suggestions.get(index)?.clone();
		self.controller.select_destination(&record);
		self.debouncer.cancel();
		self.runtime.discard_pending();
		self.suggestions.clear();
		Some(record)
	}

	pub fn submit(&mut self) -> Result<SearchEvent, SubmitError> {
		self.controller.submit()
	}

	/// Rebuild the worker over a new dataset.
	pub fn reload(&mut self, destinations: Arc<DestinationSet>) {
		self.runtime.reload(destinations.to_vec());
		self.controller.set_destinations(destinations);
		self.suggestions.clear();
	}

	pub fn unmount(&mut self) {
		self.debouncer.cancel();
		self.runtime.terminate();
	}

	pub fn is_mounted(&self) -> bool {
		!self.runtime.is_terminated()
	}
}

impl Drop for TripSearchSession {
	fn drop(&mut self) {
		self.unmount();
	}
}

#[cfg(test)]
mod tests {
	use chrono::{Days, NaiveDate};

	use super::*;

	fn destinations() -> Arc<DestinationSet> {
		Arc::new(DestinationSet::new(vec![
			Destination::new("RsBU", "Singapore, Singapore"),
			Destination::new("WD0M", "Singapore"),
			Destination::new("A6Dz", "Rome, Italy"),
			Destination::new("jiVY", "Sydney, Australia"),
		]))
	}

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
	}

	fn mount() -> TripSearchSession {
		TripSearchSession::mount(
			destinations(),
			FormRules::starting(today(), 0),
			FormDefaults::default(),
			SessionSettings::default(),
		)
	}

	fn settle(session: &mut TripSearchSession, mut now: Instant) -> Instant {
		let deadline = Instant::now() + Duration::from_secs(2);
		while session.is_busy() && Instant::now() < deadline {
			now += Duration::from_millis(10);
			session.tick(now);
			std::thread::sleep(Duration::from_millis(2));
		}
		now
	}

	fn type_text(session: &mut TripSearchSession, text: &str, start: Instant) -> Instant {
		let mut now = start;
		for end in 1..=text.len() {
			now += Duration::from_millis(20);
			session.input_destination(&text[..end], now);
			session.tick(now);
		}
		now
	}

	#[test]
	fn typing_shows_exact_match_first() {
		let mut session = mount();
		let now = type_text(&mut session, "singapore", Instant::now());
		settle(&mut session, now);

		let suggestions = session.suggestions();
		assert!(!suggestions.is_empty() && suggestions.len() <= 8);
		assert_eq!(suggestions[0].uid, "WD0M");
	}

	#[test]
	fn selecting_a_suggestion_suppresses_search() {
		let mut session = mount();
		let now = type_text(&mut session, "rome", Instant::now());
		let now = settle(&mut session, now);

		let picked = session.select_suggestion(0).expect("suggestion");
		assert_eq!(picked.uid, "A6Dz");
		assert!(session.suggestions().is_empty());

		session.input_destination("Rome, Italy", now);
		assert!(!session.is_busy());
		assert_eq!(session.controller().form().selected_uid.as_deref(), Some("A6Dz"));
	}

	#[test]
	fn reply_in_flight_does_not_reopen_after_selection() {
		let mut session = mount();
		let now = type_text(&mut session, "rom", Instant::now());
		let mut now = settle(&mut session, now);
		assert!(!session.suggestions().is_empty());

		now += Duration::from_millis(20);
		session.input_destination("rome", now);
		now += Duration::from_millis(150);
		session.tick(now);

		session.select_suggestion(0).expect("suggestion");
		std::thread::sleep(Duration::from_millis(50));
		assert!(!session.tick(now + Duration::from_millis(10)));
		assert!(session.suggestions().is_empty());
		assert!(!session.is_busy());
	}

	#[test]
	fn blank_input_clears_suggestions() {
		let mut session = mount();
		let now = type_text(&mut session, "syd", Instant::now());
		let now = settle(&mut session, now);
		assert!(!session.suggestions().is_empty());

		session.input_destination("  ", now);
		assert!(session.suggestions().is_empty());
		assert!(!session.is_busy());
	}

	#[test]
	fn singapore_trip_navigates() {
		let mut session = mount();
		let now = type_text(&mut session, "Singapore", Instant::now());
		settle(&mut session, now);

		let controller = session.controller_mut();
		controller.set_check_in(Some(today()));
		controller.set_check_out(today().checked_add_days(Days::new(2)));

		let event = session.submit().expect("navigates");
		assert_eq!(event.destination_id, "WD0M");
		assert_eq!(event.check_in.to_string(), "2026-10-19");
		assert_eq!(event.check_out.to_string(), "2026-10-21");
		assert_eq!(event.guests_param(), "2");
	}

	#[test]
	fn reload_and_unmount_manage_the_worker() {
		let mut session = mount();
		session.reload(Arc::new(DestinationSet::new(vec![Destination::new(
			"tokyo",
			"Tokyo, Japan",
		)])));
		let now = type_text(&mut session, "tokyo", Instant::now());
		settle(&mut session, now);
		assert_eq!(session.suggestions()[0].uid, "tokyo");

		session.unmount();
		assert!(!session.is_mounted());
		assert!(!session.tick(Instant::now() + Duration::from_secs(1)));
	}
}
