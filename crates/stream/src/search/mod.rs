//! Fielded fuzzy matching over in-memory datasets.

mod matcher;

pub use matcher::{
	DEFAULT_THRESHOLD, Dataset, MATCH_CHUNK_SIZE, RankedMatch, config_for_query, rank_dataset,
	typo_budget,
};
