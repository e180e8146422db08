use log::trace;

use super::index::SearchTuning;
use super::worker::SearchWorker;
use crate::destinations::Destination;

/// How replies for superseded queries are treated.
///
/// Every search carries a monotonic request id. With
/// [`StalePolicy::DiscardSuperseded`] only the reply to the most recently
/// issued query is applied, so a slow reply for an older query can never
/// overwrite newer suggestions. [`StalePolicy::LastMessageWins`] applies every
/// reply in arrival order, which lets an old reply flash over a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
	#[default]
	DiscardSuperseded,
	LastMessageWins,
}

/// UI-side owner of the search worker lifecycle.
pub struct SearchRuntime {
	worker: Option<SearchWorker>,
	tuning: SearchTuning,
	policy: StalePolicy,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	/// Spawn a worker with an empty index.
	pub fn create(tuning: SearchTuning, policy: StalePolicy) -> Self {
		Self {
			worker: Some(SearchWorker::spawn(tuning)),
			tuning,
			policy,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub fn init(&mut self, records: Vec<Destination>) {
		if let Some(worker) = &self.worker {
			worker.init(records);
		}
	}

	/// Replace the worker with a fresh one seeded with `records`.
	///
	/// Replies still in flight from the old worker are never applied.
	pub fn reload(&mut self, records: Vec<Destination>) {
		self.terminate();
		let worker = SearchWorker::spawn(self.tuning);
		worker.init(records);
		self.worker = Some(worker);
	}

	pub fn terminate(&mut self) {
		if let Some(mut worker) = self.worker.take() {
			worker.terminate();
		}
		self.current_query_id = None;
		self.in_flight = false;
	}

	pub fn is_terminated(&self) -> bool {
		self.worker.is_none()
	}

	/// Send `query` to the worker without waiting for the reply.
	pub fn issue(&mut self, query: impl Into<String>) -> Option<u64> {
		let worker = self.worker.as_mut()?;
		let id = worker.search(query);
		self.current_query_id = Some(id);
		self.in_flight = true;
		Some(id)
	}

	/// Drain pending replies and return the suggestion list to display, if
	/// any reply should replace the current one.
	pub fn drain(&mut self) -> Option<Vec<Destination>> {
		let worker = self.worker.as_ref()?;
		let mut applied = None;
		while let Some(result) = worker.try_recv() {
			if self.current_query_id == Some(result.id) {
				self.in_flight = false;
			}
			if self.should_apply(result.id) {
				applied = Some(result.payload.results);
			} else {
				trace!(
					"discarding reply {} for superseded query '{}'",
					result.id, result.payload.query
				);
			}
		}
		applied
	}

	/// Forget the outstanding query so its reply is never applied.
	pub fn discard_pending(&mut self) {
		if let Some(id) = self.current_query_id.take() {
			trace!("discarding pending query {id}");
		}
		self.in_flight = false;
	}

	fn should_apply(&self, id: u64) -> bool {
		self.current_query_id == Some(id) || self.policy == StalePolicy::LastMessageWins
	}

	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub fn policy(&self) -> StalePolicy {
		self.policy
	}
}

impl Drop for SearchRuntime {
	fn drop(&mut self) {
		self.terminate();
	}
}
