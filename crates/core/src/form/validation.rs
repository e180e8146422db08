use super::errors::{Field, FieldError, FieldErrors};
use super::rules::FormRules;
use super::state::TripForm;
use crate::destinations::{Destination, DestinationSet};

/// The record the destination field currently refers to.
///
/// A committed selection wins while the text still names it; otherwise the
/// text must case-insensitively equal some loaded term.
pub fn resolve_destination<'a>(
	form: &TripForm,
	destinations: &'a DestinationSet,
) -> Option<&'a Destination> {
	if let Some(uid) = form.selected_uid.as_deref()
		&& let Some(record) = destinations.get_by_uid(uid)
		&& record.is_term(&form.destination_text)
	{
		return Some(record);
	}
	destinations.find_by_term(&form.destination_text)
}

pub fn check_field(
	field: Field,
	form: &TripForm,
	rules: &FormRules,
	destinations: &DestinationSet,
) -> Option<FieldError> {
	match field {
		Field::Destination => check_destination(form, destinations),
		Field::CheckIn => check_in(form, rules),
		Field::CheckOut => check_out(form),
		Field::Guests => check_guests(form, rules),
	}
}

/// Run every check; all failures are reported together.
pub fn validate(form: &TripForm, rules: &FormRules, destinations: &DestinationSet) -> FieldErrors {
	let mut errors = FieldErrors::default();
	for field in [
		Field::Destination,
		Field::CheckIn,
		Field::CheckOut,
		Field::Guests,
	] {
		errors.set(field, check_field(field, form, rules, destinations));
	}
	errors
}

fn check_destination(form: &TripForm, destinations: &DestinationSet) -> Option<FieldError> {
	resolve_destination(form, destinations)
		.is_none()
		.then_some(FieldError::DestinationNotSelected)
}

fn check_in(form: &TripForm, rules: &FormRules) -> Option<FieldError> {
	match form.check_in {
		None => Some(FieldError::CheckInRequired),
		Some(date) if date < rules.min_check_in => Some(FieldError::CheckInTooEarly {
			min: rules.min_check_in,
		}),
		Some(_) => None,
	}
}

fn check_out(form: &TripForm) -> Option<FieldError> {
	match (form.check_in, form.check_out) {
		(_, None) => Some(FieldError::CheckOutRequired),
		(Some(check_in), Some(check_out)) if check_out <= check_in => {
			Some(FieldError::CheckOutNotAfterCheckIn)
		}
		_ => None,
	}
}

fn check_guests(form: &TripForm, rules: &FormRules) -> Option<FieldError> {
	let total = form.total_guests();
	if total < form.rooms {
		Some(FieldError::RoomWithoutGuests)
	} else if total > rules.max_total_guests {
		Some(FieldError::TooManyGuests {
			max: rules.max_total_guests,
		})
	} else if form.guests_per_room > rules.max_guests_per_room {
		Some(FieldError::TooManyGuestsPerRoom {
			max: rules.max_guests_per_room,
		})
	} else {
		None
	}
}
