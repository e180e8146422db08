use log::{debug, trace};
use serde_json::Value;
use tripsearch_stream::search::{DEFAULT_THRESHOLD, Dataset, config_for_query, rank_dataset};

use super::rerank::{parse_coordinates, rerank};
use crate::destinations::{Destination, coordinate_key, filter_records};

const TERM_FIELD: usize = 0;
const STATE_FIELD: usize = 1;
const COORDINATE_FIELD: usize = 2;

/// Relative weight of each indexed field, in percent of a term match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
	pub term: u16,
	pub state: u16,
	pub coordinates: u16,
}

impl Default for FieldWeights {
	fn default() -> Self {
		Self {
			term: 100,
			state: 60,
			coordinates: 100,
		}
	}
}

/// Knobs controlling how loose the fuzzy matching is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTuning {
	/// Share of query characters that may be typos, `0.0..=1.0`.
	///
	/// Higher values tolerate more typos at the cost of more false positives.
	pub threshold: f32,
	/// Weighted scores below this are dropped.
	pub min_score: u16,
	pub weights: FieldWeights,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			threshold: DEFAULT_THRESHOLD,
			min_score: 0,
			weights: FieldWeights::default(),
		}
	}
}

/// Fuzzy-searchable index over the destination list.
#[derive(Debug, Clone, Default)]
pub struct DestinationIndex {
	tuning: SearchTuning,
	weights: [u16; 3],
	records: Vec<Destination>,
	coordinate_keys: Vec<Option<String>>,
}

impl DestinationIndex {
	pub fn new(tuning: SearchTuning) -> Self {
		let FieldWeights {
			term,
			state,
			coordinates,
		} = tuning.weights;
		Self {
			tuning,
			weights: [term, state, coordinates],
			records: Vec::new(),
			coordinate_keys: Vec::new(),
		}
	}

	/// Replace the indexed records.
	pub fn init(&mut self, records: Vec<Destination>) {
		self.coordinate_keys = records.iter().map(Destination::coordinate_key).collect();
		self.records = records;
		debug!("indexed {} destinations", self.records.len());
	}

	/// Replace the indexed records from an untyped JSON payload.
	///
	/// Entries without a string `term` are filtered out. A payload that is not
	/// an array leaves the current index untouched and returns `false`.
	pub fn init_from_value(&mut self, payload: Value) -> bool {
		match payload {
			Value::Array(items) => {
				self.init(filter_records(items));
				true
			}
			_ => {
				trace!("ignoring init payload that is not an array");
				false
			}
		}
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn tuning(&self) -> SearchTuning {
		self.tuning
	}

	/// Ranked, capped suggestions for `query`.
	///
	/// Empty or whitespace-only queries return nothing without touching the
	/// fuzzy engine.
	pub fn search(&self, query: &str) -> Vec<Destination> {
		if query.trim().is_empty() {
			return Vec::new();
		}
		rerank(self.search_raw(query), query)
	}

	/// Every fuzzy hit for `query`, best first, ties in dataset order.
	pub fn search_raw(&self, query: &str) -> Vec<Destination> {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return Vec::new();
		}

		let needle = match parse_coordinates(trimmed) {
			Some((lat, lng)) => coordinate_key(lat, lng),
			None => trimmed.to_owned(),
		};
		let config = config_for_query(&needle, self.tuning.threshold);
		rank_dataset(self, &needle, &config, self.tuning.min_score)
			.into_iter()
			.filter_map(|hit| self.records.get(hit.index).cloned())
			.collect()
	}
}

impl Dataset for DestinationIndex {
	fn len(&self) -> usize {
		self.records.len()
	}

	fn field_weights(&self) -> &[u16] {
		&self.weights
	}

	fn key_for(&self, index: usize, field: usize) -> Option<&str> {
		match field {
			TERM_FIELD => self.records.get(index).map(|record| record.term.as_str()),
			STATE_FIELD => self.records.get(index)?.state.as_deref(),
			COORDINATE_FIELD => self.coordinate_keys.get(index)?.as_deref(),
			_ => None,
		}
	}
}
