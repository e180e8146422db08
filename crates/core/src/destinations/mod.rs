//! The static destination dataset: record types and loading.

mod dataset;
mod record;

pub use dataset::{DatasetError, DestinationSet, filter_records};
pub use record::{Destination, DestinationKind, fold_term};
pub(crate) use record::coordinate_key;
