//! Destination autocomplete: the fuzzy index, the re-ranker, and the
//! background worker that owns the index.

mod commands;
mod index;
mod rerank;
mod runtime;
mod worker;

pub use commands::{SearchReply, SearchResult, WorkerCommand, WorkerMessage};
pub use index::{DestinationIndex, FieldWeights, SearchTuning};
pub use rerank::{COORDINATE_EPSILON, MAX_SUGGESTIONS, parse_coordinates, rerank};
pub use runtime::{SearchRuntime, StalePolicy};
pub use worker::SearchWorker;
