use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single inline validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
	#[error("Please choose a destination from the list")]
	DestinationNotSelected,
	#[error("Please select a check-in date")]
	CheckInRequired,
	#[error("Check-in date must be on or after {min}")]
	CheckInTooEarly { min: NaiveDate },
	#[error("Please select a check-out date")]
	CheckOutRequired,
	#[error("Check-out date must be after check-in date")]
	CheckOutNotAfterCheckIn,
	#[error("Each room must have at least 1 guest")]
	RoomWithoutGuests,
	#[error("Total guests cannot exceed {max}")]
	TooManyGuests { max: u32 },
	#[error("Each room can have at most {max} guests")]
	TooManyGuestsPerRoom { max: u32 },
}

impl Serialize for FieldError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// The form's fields, as addressed by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Destination,
	CheckIn,
	CheckOut,
	/// Rooms and guests per room share one message slot.
	Guests,
}

/// Current error per field; `None` means the field is valid or unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub destination: Option<FieldError>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub check_in: Option<FieldError>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub check_out: Option<FieldError>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guests: Option<FieldError>,
}

impl FieldErrors {
	pub fn get(&self, field: Field) -> Option<FieldError> {
		match field {
			Field::Destination => self.destination,
			Field::CheckIn => self.check_in,
			Field::CheckOut => self.check_out,
			Field::Guests => self.guests,
		}
	}

	pub fn set(&mut self, field: Field, error: Option<FieldError>) {
		let slot = match field {
			Field::Destination => &mut self.destination,
			Field::CheckIn => &mut self.check_in,
			Field::CheckOut => &mut self.check_out,
			Field::Guests => &mut self.guests,
		};
		*slot = error;
	}

	pub fn is_empty(&self) -> bool {
		self.iter().next().is_none()
	}

	/// Errors in form order.
	pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
		[
			(Field::Destination, self.destination),
			(Field::CheckIn, self.check_in),
			(Field::CheckOut, self.check_out),
			(Field::Guests, self.guests),
		]
		.into_iter()
		.filter_map(|(field, error)| error.map(|error| (field, error)))
	}
}

impl fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (_, error) in self.iter() {
			if !first {
				f.write_str("; ")?;
			}
			write!(f, "{error}")?;
			first = false;
		}
		Ok(())
	}
}

/// Why a submit did not produce a navigation event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
	#[error("trip search is invalid: {0}")]
	Invalid(FieldErrors),
	#[error("trip search has already been submitted")]
	AlreadyNavigating,
}
