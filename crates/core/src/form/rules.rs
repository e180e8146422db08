use chrono::{Days, Local, NaiveDate};

pub const MIN_ROOMS: u32 = 1;
pub const MAX_ROOMS: u32 = 5;
pub const MIN_GUESTS_PER_ROOM: u32 = 1;
pub const MAX_GUESTS_PER_ROOM: u32 = 4;
pub const MAX_TOTAL_GUESTS: u32 = 10;

/// Bounds the trip form is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
	/// Earliest acceptable check-in date.
	pub min_check_in: NaiveDate,
	pub max_rooms: u32,
	pub max_guests_per_room: u32,
	pub max_total_guests: u32,
}

impl FormRules {
	/// Rules whose minimum check-in is `offset_days` after `today`.
	pub fn starting(today: NaiveDate, offset_days: u32) -> Self {
		let min_check_in = today
			.checked_add_days(Days::new(u64::from(offset_days)))
			.unwrap_or(NaiveDate::MAX);
		Self {
			min_check_in,
			max_rooms: MAX_ROOMS,
			max_guests_per_room: MAX_GUESTS_PER_ROOM,
			max_total_guests: MAX_TOTAL_GUESTS,
		}
	}

	/// Rules anchored on the local calendar date.
	pub fn from_today(offset_days: u32) -> Self {
		Self::starting(Local::now().date_naive(), offset_days)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_moves_minimum_check_in_forward() {
		let today = NaiveDate::from_ymd_opt(2026, 12, 30).expect("date");
		let rules = FormRules::starting(today, 3);
		assert_eq!(
			rules.min_check_in,
			NaiveDate::from_ymd_opt(2027, 1, 2).expect("date")
		);
		assert_eq!(rules.max_total_guests, MAX_TOTAL_GUESTS);
	}
}
