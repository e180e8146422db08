use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::errors::{Field, FieldErrors, SubmitError};
use super::event::SearchEvent;
use super::rules::{FormRules, MIN_GUESTS_PER_ROOM, MIN_ROOMS};
use super::state::{FormDefaults, TripForm, parse_date_field};
use super::validation::{check_field, resolve_destination, validate};
use crate::destinations::{Destination, DestinationSet};

/// Submission state of the trip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
	/// No submit attempted yet.
	#[default]
	Idle,
	SubmittedInvalid,
	/// Passed validation; immediately followed by [`FormPhase::Navigating`].
	SubmittedValid,
	Navigating,
}

pub struct FormController {
	form: TripForm,
	defaults: FormDefaults,
	errors: FieldErrors,
	phase: FormPhase,
	rules: FormRules,
	destinations: Arc<DestinationSet>,
}

impl FormController {
	pub fn new(destinations: Arc<DestinationSet>, rules: FormRules, defaults: FormDefaults) -> Self {
		let mut form = TripForm::from_defaults(&defaults);
		form.rooms = form.rooms.clamp(MIN_ROOMS, rules.max_rooms);
		Self {
			form,
			defaults,
			errors: FieldErrors::default(),
			phase: FormPhase::Idle,
			rules,
			destinations,
		}
	}

	pub fn form(&self) -> &TripForm {
		&self.form
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	pub fn phase(&self) -> FormPhase {
		self.phase
	}

	pub fn rules(&self) -> &FormRules {
		&self.rules
	}

	pub fn destinations(&self) -> &Arc<DestinationSet> {
		&self.destinations
	}

	/// Swap the loaded dataset, dropping a selection it no longer contains.
	pub fn set_destinations(&mut self, destinations: Arc<DestinationSet>) {
		self.destinations = destinations;
		if self.committed_term().is_none() {
			self.form.selected_uid = None;
		}
		self.revalidate(Field::Destination);
	}

	/// Term of the committed selection while the text still names it.
	pub fn committed_term(&self) -> Option<&str> {
		let uid = self.form.selected_uid.as_deref()?;
		self.destinations
			.get_by_uid(uid)
			.filter(|record| record.is_term(&self.form.destination_text))
			.map(|record| record.term.as_str())
	}

	pub fn set_destination_text(&mut self, text: impl Into<String>) {
		self.form.destination_text = text.into();
		if self.committed_term().is_none() {
			self.form.selected_uid = None;
		}
		self.revalidate(Field::Destination);
	}

	/// Commit a suggestion: the text becomes its term.
	pub fn select_destination(&mut self, destination: &Destination) {
		self.form.destination_text = destination.term.clone();
		self.form.selected_uid = Some(destination.uid.clone());
		self.revalidate(Field::Destination);
	}

	pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
		self.form.check_in = date;
		self.revalidate(Field::CheckIn);
	}

	pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
		self.form.check_out = date;
		self.revalidate(Field::CheckOut);
	}

	/// Set check-in from `YYYY-MM-DD` text; unparsable text clears the field.
	pub fn set_check_in_str(&mut self, text: &str) {
		self.set_check_in(parse_date_field(text));
	}

	pub fn set_check_out_str(&mut self, text: &str) {
		self.set_check_out(parse_date_field(text));
	}

	/// Clamped to the allowed room range.
	pub fn set_rooms(&mut self, rooms: u32) {
		self.form.rooms = rooms.clamp(MIN_ROOMS, self.rules.max_rooms);
		self.revalidate(Field::Guests);
	}

	/// Stored as given so that validation can report out-of-range values.
	pub fn set_guests_per_room(&mut self, guests_per_room: u32) {
		self.form.guests_per_room = guests_per_room;
		self.revalidate(Field::Guests);
	}

	pub fn increment_rooms(&mut self) -> bool {
		let rooms = self.form.rooms.saturating_add(1);
		rooms <= self.rules.max_rooms && self.step_guests(rooms, self.form.guests_per_room)
	}

	pub fn decrement_rooms(&mut self) -> bool {
		let rooms = self.form.rooms.saturating_sub(1);
		rooms >= MIN_ROOMS && self.step_guests(rooms, self.form.guests_per_room)
	}

	pub fn increment_guests(&mut self) -> bool {
		let guests = self.form.guests_per_room.saturating_add(1);
		guests <= self.rules.max_guests_per_room && self.step_guests(self.form.rooms, guests)
	}

	pub fn decrement_guests(&mut self) -> bool {
		let guests = self.form.guests_per_room.saturating_sub(1);
		guests >= MIN_GUESTS_PER_ROOM && self.step_guests(self.form.rooms, guests)
	}

	fn step_guests(&mut self, rooms: u32, guests_per_room: u32) -> bool {
		let total = rooms.saturating_mul(guests_per_room);
		if total < rooms || total > self.rules.max_total_guests {
			return false;
		}
		self.form.rooms = rooms;
		self.form.guests_per_room = guests_per_room;
		self.revalidate(Field::Guests);
		true
	}

	/// Validate everything and, when clean, emit the navigation event.
	pub fn submit(&mut self) -> Result<SearchEvent, SubmitError> {
		if self.phase == FormPhase::Navigating {
			return Err(SubmitError::AlreadyNavigating);
		}

		self.errors = validate(&self.form, &self.rules, &self.destinations);
		if !self.errors.is_empty() {
			debug!("trip search rejected: {}", self.errors);
			self.phase = FormPhase::SubmittedInvalid;
			return Err(SubmitError::Invalid(self.errors.clone()));
		}

		self.phase = FormPhase::SubmittedValid;
		let event = self.build_event().ok_or_else(|| {
			SubmitError::Invalid(validate(&self.form, &self.rules, &self.destinations))
		})?;
		self.phase = FormPhase::Navigating;
		debug!("navigating to {}", event.query_string());
		Ok(event)
	}

	fn build_event(&self) -> Option<SearchEvent> {
		let destination = resolve_destination(&self.form, &self.destinations)?;
		Some(SearchEvent {
			destination_id: destination.uid.clone(),
			destination_label: destination.term.clone(),
			check_in: self.form.check_in?,
			check_out: self.form.check_out?,
			rooms: self.form.rooms,
			guests_per_room: self.form.guests_per_room,
		})
	}

	/// Back to a fresh form seeded from the defaults.
	pub fn reset(&mut self) {
		self.form = TripForm::from_defaults(&self.defaults);
		self.form.rooms = self.form.rooms.clamp(MIN_ROOMS, self.rules.max_rooms);
		self.errors = FieldErrors::default();
		self.phase = FormPhase::Idle;
	}

	fn revalidate(&mut self, field: Field) {
		if self.phase != FormPhase::SubmittedInvalid {
			return;
		}
		let error = check_field(field, &self.form, &self.rules, &self.destinations);
		self.errors.set(field, error);
	}
}
