//! Background search worker thread and its owning handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace, warn};
use tripsearch_stream::DataStream;

use super::commands::{SearchReply, SearchResult, WorkerCommand, WorkerMessage};
use super::index::{DestinationIndex, SearchTuning};
use crate::destinations::Destination;

/// Launches the background search worker thread and returns communication channels.
fn spawn(
	tuning: SearchTuning,
	terminated: Arc<AtomicBool>,
) -> (Sender<WorkerCommand>, Receiver<SearchResult>, JoinHandle<()>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let mut index = DestinationIndex::new(tuning);

	let handle =
		thread::spawn(move || worker_loop(&mut index, command_rx, result_tx, &terminated));

	(command_tx, result_rx, handle)
}

fn worker_loop(
	index: &mut DestinationIndex,
	command_rx: Receiver<WorkerCommand>,
	result_tx: Sender<SearchResult>,
	terminated: &AtomicBool,
) {
	while let Ok(command) = command_rx.recv() {
		if terminated.load(AtomicOrdering::Acquire) {
			break;
		}
		if !handle_command(index, &result_tx, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	index: &mut DestinationIndex,
	result_tx: &Sender<SearchResult>,
	command: WorkerCommand,
) -> bool {
	match command {
		WorkerCommand::Init(records) => {
			index.init(records);
			true
		}
		WorkerCommand::InitRaw(payload) => {
			index.init_from_value(payload);
			true
		}
		WorkerCommand::Search { id, query } => {
			let results = index.search(&query);
			DataStream::new(result_tx, id).send(SearchReply { query, results })
		}
		WorkerCommand::Shutdown => false,
	}
}

/// Owned handle to one search worker thread.
///
/// The worker owns its index exclusively; records and queries are moved into
/// it and results are moved back, so nothing is shared between the threads.
/// Dropping the handle terminates the worker.
pub struct SearchWorker {
	tx: Sender<WorkerCommand>,
	rx: Option<Receiver<SearchResult>>,
	handle: Option<JoinHandle<()>>,
	terminated: Arc<AtomicBool>,
	next_id: u64,
}

impl SearchWorker {
	pub fn spawn(tuning: SearchTuning) -> Self {
		let terminated = Arc::new(AtomicBool::new(false));
		let (tx, rx, handle) = spawn(tuning, Arc::clone(&terminated));
		debug!("search worker started");
		Self {
			tx,
			rx: Some(rx),
			handle: Some(handle),
			terminated,
			next_id: 0,
		}
	}

	/// Replace the worker's index with `records`.
	pub fn init(&self, records: Vec<Destination>) {
		self.send(WorkerCommand::Init(records));
	}

	/// Queue a search and return the id its reply will carry.
	pub fn search(&mut self, query: impl Into<String>) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.send(WorkerCommand::Search {
			id,
			query: query.into(),
		});
		id
	}

	/// Forward a protocol message. Returns the request id for searches.
	pub fn post(&mut self, message: WorkerMessage) -> Option<u64> {
		match message {
			WorkerMessage::Init(payload) => {
				self.send(WorkerCommand::InitRaw(payload));
				None
			}
			WorkerMessage::Search(query) => Some(self.search(query)),
		}
	}

	/// Parse and forward a raw JSON message; unrecognized messages are dropped.
	pub fn post_raw(&mut self, raw: &str) -> Option<u64> {
		match WorkerMessage::parse(raw) {
			Some(message) => self.post(message),
			None => {
				trace!("dropping unrecognized worker message");
				None
			}
		}
	}

	/// Next reply, if one is ready.
	pub fn try_recv(&self) -> Option<SearchResult> {
		self.rx.as_ref()?.try_recv().ok()
	}

	/// Wait up to `timeout` for the next reply.
	pub fn recv_timeout(&self, timeout: Duration) -> Option<SearchResult> {
		self.rx.as_ref()?.recv_timeout(timeout).ok()
	}

	/// Stop the worker and join its thread. Queued work is discarded and no
	/// further replies are delivered through this handle.
	pub fn terminate(&mut self) {
		if self.rx.is_none() {
			return;
		}
		self.terminated.store(true, AtomicOrdering::Release);
		let _ = self.tx.send(WorkerCommand::Shutdown);
		self.rx = None;
		if let Some(handle) = self.handle.take()
			&& handle.join().is_err()
		{
			warn!("search worker panicked");
		}
	}

	pub fn is_terminated(&self) -> bool {
		self.rx.is_none()
	}

	/// Whether the worker thread is still alive.
	pub fn is_running(&self) -> bool {
		self.handle
			.as_ref()
			.is_some_and(|handle| !handle.is_finished())
	}

	fn send(&self, command: WorkerCommand) {
		if self.rx.is_none() {
			trace!("dropping command for terminated worker");
			return;
		}
		let _ = self.tx.send(command);
	}
}

impl Drop for SearchWorker {
	fn drop(&mut self) {
		self.terminate();
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	const TIMEOUT: Duration = Duration::from_secs(1);

	fn records() -> Vec<Destination> {
		vec![
			Destination::new("RsBU", "Singapore, Singapore"),
			Destination::new("WD0M", "Singapore"),
			Destination::new("A6Dz", "Rome, Italy"),
		]
	}

	#[test]
	fn search_results_are_forwarded() {
		let mut worker = SearchWorker::spawn(SearchTuning::default());
		worker.init(records());
		let id = worker.search("singapore");

		let result = worker.recv_timeout(TIMEOUT).expect("receive search result");
		assert_eq!(result.id, id);
		assert_eq!(result.payload.query, "singapore");
		assert_eq!(result.payload.results[0].uid, "WD0M");
	}

	#[test]
	fn replies_arrive_in_send_order() {
		let mut worker = SearchWorker::spawn(SearchTuning::default());
		worker.init(records());
		let first = worker.search("rome");
		let second = worker.search("singapore");

		let a = worker.recv_timeout(TIMEOUT).expect("first");
		let b = worker.recv_timeout(TIMEOUT).expect("second");
		assert_eq!((a.id, b.id), (first, second));
	}

	#[test]
	fn whitespace_query_replies_with_no_results() {
		let mut worker = SearchWorker::spawn(SearchTuning::default());
		worker.init(records());
		worker.search("   ");
		let result = worker.recv_timeout(TIMEOUT).expect("reply");
		assert!(result.payload.results.is_empty());
	}

	#[test]
	fn raw_protocol_messages_drive_the_worker() {
		let mut worker = SearchWorker::spawn(SearchTuning::default());
		let init = json!({
			"type": "init",
			"payload": [{"uid": "a", "term": "Tokyo, Japan"}, {"uid": "b", "term": 7}],
		});
		assert_eq!(worker.post_raw(&init.to_string()), None);
		assert_eq!(worker.post_raw(r#"{"type": "explode"}"#), None);
		let id = worker
			.post_raw(r#"{"type": "search", "payload": "tokyo"}"#)
			.expect("search id");

		let result = worker.recv_timeout(TIMEOUT).expect("reply");
		assert_eq!(result.id, id);
		assert_eq!(result.payload.results.len(), 1);
		assert_eq!(result.payload.results[0].uid, "a");
	}

	#[test]
	fn terminate_joins_worker_and_discards_replies() {
		let mut worker = SearchWorker::spawn(SearchTuning::default());
		worker.init(records());
		worker.search("singapore");
		worker.terminate();

		assert!(worker.is_terminated());
		assert!(worker.try_recv().is_none());
		assert!(worker.recv_timeout(Duration::from_millis(50)).is_none());
		assert!(!worker.is_running());
	}
}
