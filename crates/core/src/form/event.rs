use std::iter;

use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Hand-off payload emitted when a trip search is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEvent {
	pub destination_id: String,
	pub destination_label: String,
	pub check_in: NaiveDate,
	pub check_out: NaiveDate,
	pub rooms: u32,
	pub guests_per_room: u32,
}

impl SearchEvent {
	/// Guests per room, one entry per room, joined by `|` (`2|2`).
	pub fn guests_param(&self) -> String {
		iter::repeat_n(self.guests_per_room.to_string(), self.rooms as usize)
			.collect::<Vec<_>>()
			.join("|")
	}

	/// Query string for the hotel listing page.
	pub fn query_string(&self) -> String {
		format!(
			"destination_id={}&checkin={}&checkout={}&guests={}&rooms={}",
			urlencoding::encode(&self.destination_id),
			self.check_in.format(DATE_FORMAT),
			self.check_out.format(DATE_FORMAT),
			urlencoding::encode(&self.guests_param()),
			self.rooms,
		)
	}

	pub fn nights(&self) -> i64 {
		(self.check_out - self.check_in).num_days()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn event(rooms: u32, guests_per_room: u32) -> SearchEvent {
		SearchEvent {
			destination_id: "RsBU".into(),
			destination_label: "Singapore, Singapore".into(),
			check_in: NaiveDate::from_ymd_opt(2026, 11, 2).expect("date"),
			check_out: NaiveDate::from_ymd_opt(2026, 11, 4).expect("date"),
			rooms,
			guests_per_room,
		}
	}

	#[test]
	fn guests_param_repeats_per_room() {
		assert_eq!(event(2, 2).guests_param(), "2|2");
		assert_eq!(event(1, 3).guests_param(), "3");
	}

	#[test]
	fn query_string_carries_literal_dates() {
		assert_eq!(
			event(2, 2).query_string(),
			"destination_id=RsBU&checkin=2026-11-02&checkout=2026-11-04&guests=2%7C2&rooms=2"
		);
	}

	#[test]
	fn query_string_escapes_destination_id() {
		let event = SearchEvent {
			destination_id: "a b&c".into(),
			..event(1, 2)
		};
		assert!(
			event
				.query_string()
				.starts_with("destination_id=a%20b%26c&checkin=")
		);
	}

	#[test]
	fn serializes_camel_case_with_iso_dates() {
		let value = serde_json::to_value(event(1, 2)).expect("json");
		assert_eq!(value["destinationId"], "RsBU");
		assert_eq!(value["checkIn"], "2026-11-02");
		assert_eq!(value["guestsPerRoom"], 2);
		assert_eq!(event(1, 2).nights(), 2);
	}
}
