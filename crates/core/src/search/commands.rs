use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripsearch_stream::StreamEnvelope;

use crate::destinations::Destination;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum WorkerCommand {
	/// Build the index from typed records.
	Init(Vec<Destination>),
	/// Build the index from an untyped JSON array, filtering unusable entries.
	InitRaw(Value),
	/// Run a fuzzy search for the provided query.
	Search {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		/// User supplied query string.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Untyped message as posted by a host that speaks the JSON worker protocol:
/// `{"type": "init", "payload": [...]}` or `{"type": "search", "payload": "..."}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum WorkerMessage {
	Init(Value),
	Search(String),
}

impl WorkerMessage {
	/// Parse a message, returning `None` for unknown types or bad shapes.
	pub fn parse(raw: &str) -> Option<Self> {
		serde_json::from_str(raw).ok()
	}

	pub fn from_value(value: Value) -> Option<Self> {
		serde_json::from_value(value).ok()
	}
}

/// Results of one search, echoing the query for correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReply {
	pub query: String,
	pub results: Vec<Destination>,
}

/// Reply envelope delivered to the UI thread, tagged with the request id.
pub type SearchResult = StreamEnvelope<SearchReply>;
