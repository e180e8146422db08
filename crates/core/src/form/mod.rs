//! Trip-search form: field state, validation, and the submit state machine.
//!
//! Validation runs in full on submit and reports every failing field at
//! once. After a failed submit each edit re-checks just the edited field,
//! and the form stays in [`FormPhase::SubmittedInvalid`] until the next
//! submit. A successful submit yields a [`SearchEvent`] for the caller to
//! navigate with.

mod controller;
mod errors;
mod event;
mod rules;
mod state;
mod validation;

pub use controller::{FormController, FormPhase};
pub use errors::{Field, FieldError, FieldErrors, SubmitError};
pub use event::SearchEvent;
pub use rules::{
	FormRules, MAX_GUESTS_PER_ROOM, MAX_ROOMS, MAX_TOTAL_GUESTS, MIN_GUESTS_PER_ROOM, MIN_ROOMS,
};
pub use state::{FormDefaults, TripForm, parse_date_field};
pub use validation::{resolve_destination, validate};
