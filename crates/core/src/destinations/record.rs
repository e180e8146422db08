use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Category of a searchable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DestinationKind {
	#[default]
	City,
	Hotel,
	Region,
	Airport,
	/// Any category the dataset uses that is not modelled explicitly.
	Other,
}

impl DestinationKind {
	/// Map a dataset label onto a kind; unknown labels become [`DestinationKind::Other`].
	pub fn from_label(label: &str) -> Self {
		match label.trim().to_ascii_lowercase().as_str() {
			"city" => Self::City,
			"hotel" => Self::Hotel,
			"region" => Self::Region,
			"airport" => Self::Airport,
			_ => Self::Other,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::City => "city",
			Self::Hotel => "hotel",
			Self::Region => "region",
			Self::Airport => "airport",
			Self::Other => "other",
		}
	}
}

impl fmt::Display for DestinationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for DestinationKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for DestinationKind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match Option::<Value>::deserialize(deserializer)? {
			None | Some(Value::Null) => Self::default(),
			Some(Value::String(label)) => Self::from_label(&label),
			Some(_) => Self::Other,
		})
	}
}

/// One entry of the static destination dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
	#[serde(rename = "uniqueId", alias = "uid")]
	pub uid: String,
	/// Display name, and the primary search key.
	pub term: String,
	#[serde(rename = "type", default)]
	pub kind: DestinationKind,
	#[serde(
		rename = "latitude",
		alias = "lat",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub lat: Option<f64>,
	#[serde(
		rename = "longitude",
		alias = "lng",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub lng: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
}

impl Destination {
	pub fn new(uid: impl Into<String>, term: impl Into<String>) -> Self {
		Self {
			uid: uid.into(),
			term: term.into(),
			kind: DestinationKind::default(),
			lat: None,
			lng: None,
			state: None,
		}
	}

	#[must_use]
	pub fn with_kind(mut self, kind: DestinationKind) -> Self {
		self.kind = kind;
		self
	}

	#[must_use]
	pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
		self.lat = Some(lat);
		self.lng = Some(lng);
		self
	}

	#[must_use]
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());
		self
	}

	/// Both coordinates, when the record carries them.
	pub fn coordinates(&self) -> Option<(f64, f64)> {
		Some((self.lat?, self.lng?))
	}

	/// Coordinates rendered as the `lat,lng` text the index matches against.
	pub fn coordinate_key(&self) -> Option<String> {
		self.coordinates().map(|(lat, lng)| coordinate_key(lat, lng))
	}

	/// Case-insensitive comparison of the display term against user input.
	pub fn is_term(&self, text: &str) -> bool {
		fold_term(&self.term) == fold_term(text)
	}
}

/// Normalize a term for case-insensitive comparison.
pub fn fold_term(text: &str) -> String {
	text.trim().to_lowercase()
}

pub(crate) fn coordinate_key(lat: f64, lng: f64) -> String {
	format!("{lat},{lng}")
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn deserializes_short_field_names() {
		let value = json!({
			"uid": "RsBU",
			"term": "Singapore, Singapore",
			"type": "city",
			"lat": 1.2800945,
			"lng": 103.8509491,
		});
		let destination: Destination = serde_json::from_value(value).expect("destination");
		assert_eq!(destination.uid, "RsBU");
		assert_eq!(destination.kind, DestinationKind::City);
		assert_eq!(destination.coordinates(), Some((1.2800945, 103.8509491)));
		assert_eq!(destination.state, None);
	}

	#[test]
	fn unknown_kind_maps_to_other() {
		let value = json!({"uniqueId": "x", "term": "Somewhere", "type": "landmark"});
		let destination: Destination = serde_json::from_value(value).expect("destination");
		assert_eq!(destination.kind, DestinationKind::Other);
	}

	#[test]
	fn missing_kind_defaults_to_city() {
		let value = json!({"uniqueId": "x", "term": "Somewhere"});
		let destination: Destination = serde_json::from_value(value).expect("destination");
		assert_eq!(destination.kind, DestinationKind::City);
	}

	#[test]
	fn null_or_non_string_kind_keeps_the_record() {
		let value = json!({"uniqueId": "x", "term": "Somewhere", "type": null});
		let destination: Destination = serde_json::from_value(value).expect("destination");
		assert_eq!(destination.kind, DestinationKind::City);

		let value = json!({"uniqueId": "y", "term": "Elsewhere", "type": 3});
		let destination: Destination = serde_json::from_value(value).expect("destination");
		assert_eq!(destination.kind, DestinationKind::Other);
		assert_eq!(destination.term, "Elsewhere");
	}

	#[test]
	fn serializes_long_field_names() {
		let destination = Destination::new("A6Dz", "Rome, Italy").with_state("Lazio");
		let value = serde_json::to_value(&destination).expect("json");
		assert_eq!(value["uniqueId"], "A6Dz");
		assert_eq!(value["type"], "city");
		assert_eq!(value["state"], "Lazio");
		assert!(value.get("latitude").is_none());
	}

	#[test]
	fn term_comparison_ignores_case_and_padding() {
		let destination = Destination::new("1", "Singapore");
		assert!(destination.is_term("  sINGAPORE "));
		assert!(!destination.is_term("Singapor"));
	}

	#[test]
	fn coordinate_key_requires_both_components() {
		let mut destination = Destination::new("1", "Somewhere").with_coordinates(1.5, 103.25);
		assert_eq!(destination.coordinate_key().as_deref(), Some("1.5,103.25"));
		destination.lng = None;
		assert_eq!(destination.coordinate_key(), None);
	}
}
