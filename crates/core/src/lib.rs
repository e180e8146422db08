//! Core crate for destination autocomplete and trip-search forms.
//!
//! The root module re-exports the types an embedder needs to mount a
//! [`TripSearchSession`] or to drive the pieces on their own: the
//! [`DestinationIndex`], the [`SearchWorker`] actor that owns it, the
//! [`QueryDebouncer`] and the [`FormController`].

pub mod app_dirs;
pub mod debounce;
pub mod destinations;
pub mod form;
pub mod search;
pub mod session;

pub use crate::debounce::{DEFAULT_DEBOUNCE, QueryDebouncer};
pub use crate::destinations::{
	DatasetError, Destination, DestinationKind, DestinationSet, filter_records, fold_term,
};
pub use crate::form::{
	FieldError, FieldErrors, FormController, FormDefaults, FormPhase, FormRules, SearchEvent,
	SubmitError, TripForm,
};
pub use crate::search::{
	DestinationIndex, FieldWeights, MAX_SUGGESTIONS, SearchReply, SearchResult, SearchRuntime,
	SearchTuning, SearchWorker, StalePolicy, WorkerCommand, WorkerMessage, parse_coordinates,
	rerank,
};
pub use crate::session::{SessionSettings, TripSearchSession};
