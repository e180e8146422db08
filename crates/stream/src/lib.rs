//! Message envelopes for delivering worker replies across threads, plus the
//! fuzzy-matching primitives the destination index is built on.
//!
//! The base types wrap an [`mpsc`] channel so a background worker can hand
//! results back to the UI thread without sharing any state with it. Every
//! payload travels by value inside a [`StreamEnvelope`] tagged with the id of
//! the request that produced it, which lets the receiver tell fresh replies
//! from superseded ones.
//!
//! `tripsearch_stream::search` scores any [`search::Dataset`] against a query
//! with Frizbee, weighting several fields per record and returning a stable
//! ranking.
//!
//! Base usage:
//! ```
//! use std::sync::mpsc;
//!
//! use tripsearch_stream::{DataStream, StreamEnvelope};
//!
//! let (tx, rx) = mpsc::channel::<StreamEnvelope<Vec<String>>>();
//! let stream = DataStream::new(&tx, 7);
//! assert!(stream.send(vec!["Singapore".to_string()]));
//! let envelope = rx.recv().unwrap();
//! assert_eq!(envelope.id, 7);
//! assert_eq!(envelope.payload, vec!["Singapore".to_string()]);
//! ```
//!
//! [`mpsc`]: std::sync::mpsc

use std::sync::mpsc::Sender;

/// Message emitted by a background worker and delivered to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEnvelope<P> {
	/// Identifier correlating the message with the request that produced it.
	pub id: u64,
	/// Payload delivered to the consumer.
	pub payload: P,
}

impl<P> StreamEnvelope<P> {
	/// Transform the payload while preserving the envelope id.
	pub fn map_payload<N>(self, f: impl FnOnce(P) -> N) -> StreamEnvelope<N> {
		StreamEnvelope {
			id: self.id,
			payload: f(self.payload),
		}
	}
}

/// Handle for producing stream messages backed by an [`mpsc::Sender`].
///
/// [`mpsc::Sender`]: std::sync::mpsc::Sender
pub struct DataStream<'a, P> {
	tx: &'a Sender<StreamEnvelope<P>>,
	id: u64,
}

impl<'a, P: Send + 'static> DataStream<'a, P> {
	/// Create a new handle backed by the provided sender.
	#[must_use]
	pub fn new(tx: &'a Sender<StreamEnvelope<P>>, id: u64) -> Self {
		Self { tx, id }
	}

	/// Identifier associated with this stream.
	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Emit a payload to the consumer.
	///
	/// Returns `false` once the receiving side has hung up.
	pub fn send(&self, payload: P) -> bool {
		self.tx
			.send(StreamEnvelope {
				id: self.id,
				payload,
			})
			.is_ok()
	}

	/// Clone the underlying sender so additional producers can emit messages.
	pub fn clone_sender(&self) -> Sender<StreamEnvelope<P>> {
		self.tx.clone()
	}
}

impl<P> Clone for DataStream<'_, P> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx,
			id: self.id,
		}
	}
}

/// Fielded fuzzy matching built on Frizbee.
pub mod search;

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	#[test]
	fn send_reports_hang_up() {
		let (tx, rx) = mpsc::channel::<StreamEnvelope<u8>>();
		let stream = DataStream::new(&tx, 1);
		assert!(stream.send(1));
		drop(rx);
		assert!(!stream.send(2));
	}

	#[test]
	fn map_payload_keeps_id() {
		let envelope = StreamEnvelope { id: 3, payload: 2 };
		let mapped = envelope.map_payload(|value| value * 10);
		assert_eq!(mapped, StreamEnvelope { id: 3, payload: 20 });
	}
}
