//! Keystroke debouncing for the destination field.
//!
//! A single pending slot holds the latest text and the instant it becomes due.
//! Every qualifying input replaces the slot, so a burst of keystrokes yields
//! exactly one query carrying the final text. Time is supplied by the caller,
//! which keeps the UI loop in charge of when the debouncer is polled.

use std::time::{Duration, Instant};

use crate::destinations::fold_term;

/// Default quiet window before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingQuery {
	text: String,
	due: Instant,
}

#[derive(Debug, Clone)]
pub struct QueryDebouncer {
	window: Duration,
	pending: Option<PendingQuery>,
}

impl Default for QueryDebouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl QueryDebouncer {
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	pub fn window(&self) -> Duration {
		self.window
	}

	/// Record a change of the destination text.
	///
	/// Cancels any pending query. A new one is scheduled unless the text is
	/// blank or still matches the `committed` selection's term.
	pub fn observe(&mut self, text: &str, committed: Option<&str>, now: Instant) {
		self.pending = None;

		if text.trim().is_empty() {
			return;
		}
		if committed.is_some_and(|term| fold_term(term) == fold_term(text)) {
			return;
		}

		self.pending = Some(PendingQuery {
			text: text.to_owned(),
			due: now + self.window,
		});
	}

	/// Take the pending query once its quiet window has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		if self.pending.as_ref().is_some_and(|pending| now >= pending.due) {
			return self.pending.take().map(|pending| pending.text);
		}
		None
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending query becomes due.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.due)
	}
}
