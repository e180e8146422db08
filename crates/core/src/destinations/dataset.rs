use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use super::record::{Destination, fold_term};

/// Errors raised while loading the static destination dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read destination dataset {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("destination dataset is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("destination dataset must be a JSON array of records")]
	NotAnArray,
}

/// The full destination list, loaded once per session and never mutated.
#[derive(Debug, Clone, Default)]
pub struct DestinationSet {
	records: Vec<Destination>,
	by_term: HashMap<String, usize>,
}

impl DestinationSet {
	pub fn new(records: Vec<Destination>) -> Self {
		let mut by_term = HashMap::with_capacity(records.len());
		for (index, record) in records.iter().enumerate() {
			by_term.entry(fold_term(&record.term)).or_insert(index);
		}
		Self { records, by_term }
	}

	/// Load a dataset from disk. Paths ending in `.gz` are decompressed.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let reader = BufReader::new(file);
		let set = if path.extension().is_some_and(|ext| ext == "gz") {
			Self::from_reader(GzDecoder::new(reader))?
		} else {
			Self::from_reader(reader)?
		};
		debug!(
			"loaded {} destinations from {}",
			set.len(),
			path.display()
		);
		Ok(set)
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
		let value: Value = serde_json::from_reader(reader)?;
		Self::from_value(value)
	}

	pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(value)
	}

	pub fn from_value(value: Value) -> Result<Self, DatasetError> {
		match value {
			Value::Array(items) => Ok(Self::new(filter_records(items))),
			_ => Err(DatasetError::NotAnArray),
		}
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[Destination] {
		&self.records
	}

	pub fn iter(&self) -> impl Iterator<Item = &Destination> {
		self.records.iter()
	}

	/// First record whose term case-insensitively equals `text`.
	pub fn find_by_term(&self, text: &str) -> Option<&Destination> {
		self.by_term
			.get(&fold_term(text))
			.and_then(|&index| self.records.get(index))
	}

	pub fn get_by_uid(&self, uid: &str) -> Option<&Destination> {
		self.records.iter().find(|record| record.uid == uid)
	}

	/// Owned copy of the records, used to seed a search worker.
	pub fn to_vec(&self) -> Vec<Destination> {
		self.records.clone()
	}
}

/// Keep only entries with a string `term` that deserialize into a [`Destination`].
pub fn filter_records(items: Vec<Value>) -> Vec<Destination> {
	let total = items.len();
	let mut records = Vec::with_capacity(total);
	for item in items {
		if !item.get("term").is_some_and(Value::is_string) {
			debug!("skipping destination without a string term");
			continue;
		}
		match serde_json::from_value::<Destination>(item) {
			Ok(record) => records.push(record),
			Err(err) => debug!("skipping malformed destination: {err}"),
		}
	}
	if records.len() < total {
		warn!(
			"filtered {} of {} destination entries",
			total - records.len(),
			total
		);
	}
	records
}
