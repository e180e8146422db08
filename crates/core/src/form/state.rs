use chrono::NaiveDate;

/// Initial values a caller may supply when mounting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
	pub destination_text: String,
	pub check_in: Option<NaiveDate>,
	pub check_out: Option<NaiveDate>,
	pub rooms: u32,
	pub guests_per_room: u32,
}

impl Default for FormDefaults {
	fn default() -> Self {
		Self {
			destination_text: String::new(),
			check_in: None,
			check_out: None,
			rooms: 1,
			guests_per_room: 2,
		}
	}
}

/// Field values of the trip-search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripForm {
	pub destination_text: String,
	/// Set only while `destination_text` matches the selected record's term.
	pub selected_uid: Option<String>,
	pub check_in: Option<NaiveDate>,
	pub check_out: Option<NaiveDate>,
	pub rooms: u32,
	pub guests_per_room: u32,
}

impl TripForm {
	pub fn from_defaults(defaults: &FormDefaults) -> Self {
		Self {
			destination_text: defaults.destination_text.clone(),
			selected_uid: None,
			check_in: defaults.check_in,
			check_out: defaults.check_out,
			rooms: defaults.rooms,
			guests_per_room: defaults.guests_per_room,
		}
	}

	pub fn total_guests(&self) -> u32 {
		self.rooms.saturating_mul(self.guests_per_room)
	}
}

/// Parse a `YYYY-MM-DD` date field; anything else reads as unset.
pub fn parse_date_field(text: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn total_guests_is_rooms_times_guests() {
		let form = TripForm {
			rooms: 3,
			guests_per_room: 2,
			..TripForm::from_defaults(&FormDefaults::default())
		};
		assert_eq!(form.total_guests(), 6);
	}

	#[test]
	fn date_fields_accept_iso_dates_only() {
		assert_eq!(
			parse_date_field(" 2026-11-02 "),
			NaiveDate::from_ymd_opt(2026, 11, 2)
		);
		assert_eq!(parse_date_field("02/11/2026"), None);
		assert_eq!(parse_date_field(""), None);
	}
}
