use std::cmp::Ordering as CmpOrdering;

use frizbee::{Config, match_list};

/// Default similarity threshold: the share of query characters that may be typos.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Number of haystacks handed to Frizbee per call.
pub const MATCH_CHUNK_SIZE: usize = 512;

/// Number of typos tolerated for `query` under `threshold`.
///
/// The budget scales with the query length and never reaches the full length,
/// so a single character must always match exactly.
pub fn typo_budget(query: &str, threshold: f32) -> u16 {
	let length = query.chars().count();
	if length <= 1 {
		return 0;
	}

	let threshold = if threshold.is_finite() {
		threshold.clamp(0.0, 1.0)
	} else {
		DEFAULT_THRESHOLD
	};
	let scaled = (length as f32 * threshold).round() as usize;
	let capped = scaled.min(length - 1);
	u16::try_from(capped).unwrap_or(u16::MAX)
}

/// Builds fuzzy matching options for the provided query and similarity threshold.
pub fn config_for_query(query: &str, threshold: f32) -> Config {
	let mut config = Config {
		prefilter: true,
		..Config::default()
	};
	config.max_typos = Some(typo_budget(query, threshold));
	config.sort = false;
	config
}

/// Represents a collection of records that can be searched field by field.
pub trait Dataset {
	/// Total number of records in the dataset.
	fn len(&self) -> usize;

	/// Returns true if the dataset contains no records.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Relative weight of each searchable field, in percent.
	///
	/// The length of the slice is the number of fields.
	fn field_weights(&self) -> &[u16];

	/// Return the searchable text of `field` for the record at `index`, if the
	/// record has one.
	fn key_for(&self, index: usize, field: usize) -> Option<&str>;
}

impl<T> Dataset for &T
where
	T: Dataset + ?Sized,
{
	fn len(&self) -> usize {
		<T as Dataset>::len(*self)
	}

	fn field_weights(&self) -> &[u16] {
		<T as Dataset>::field_weights(*self)
	}

	fn key_for(&self, index: usize, field: usize) -> Option<&str> {
		<T as Dataset>::key_for(*self, index, field)
	}
}

/// A scored record position within a [`Dataset`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RankedMatch {
	pub index: usize,
	pub score: u16,
}

impl Ord for RankedMatch {
	/// Best first: higher score, then earlier position.
	fn cmp(&self, other: &Self) -> CmpOrdering {
		other
			.score
			.cmp(&self.score)
			.then_with(|| self.index.cmp(&other.index))
	}
}

impl PartialOrd for RankedMatch {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

/// Score every record of `dataset` against `needle`.
///
/// A record's score is the best weighted score over its fields. Records that
/// do not match, or score below `min_score`, are dropped. The result is ordered
/// by descending score with ties kept in dataset order.
pub fn rank_dataset<D>(dataset: D, needle: &str, config: &Config, min_score: u16) -> Vec<RankedMatch>
where
	D: Dataset,
{
	let total = dataset.len();
	if total == 0 || needle.is_empty() {
		return Vec::new();
	}

	let mut best = vec![0u16; total];
	let mut haystacks: Vec<&str> = Vec::with_capacity(MATCH_CHUNK_SIZE);
	let mut owners: Vec<usize> = Vec::with_capacity(MATCH_CHUNK_SIZE);

	for (field, &weight) in dataset.field_weights().iter().enumerate() {
		if weight == 0 {
			continue;
		}
		let mut offset = 0;
		while offset < total {
			let end = (offset + MATCH_CHUNK_SIZE).min(total);
			haystacks.clear();
			owners.clear();
			for index in offset..end {
				if let Some(key) = dataset.key_for(index, field)
					&& !key.is_empty()
				{
					haystacks.push(key);
					owners.push(index);
				}
			}

			if !haystacks.is_empty() {
				for entry in match_list(needle, &haystacks, config) {
					if entry.score == 0 {
						continue;
					}
					let Some(&index) = owners.get(entry.index as usize) else {
						continue;
					};
					let weighted = weighted_score(entry.score, weight);
					if weighted > best[index] {
						best[index] = weighted;
					}
				}
			}

			offset = end;
		}
	}

	let mut ranked: Vec<RankedMatch> = best
		.into_iter()
		.enumerate()
		.filter(|&(_, score)| score > 0 && score >= min_score)
		.map(|(index, score)| RankedMatch { index, score })
		.collect();
	ranked.sort_unstable();
	ranked
}

fn weighted_score(score: u16, weight: u16) -> u16 {
	let scaled = u32::from(score) * u32::from(weight) / 100;
	u16::try_from(scaled).unwrap_or(u16::MAX).max(1)
}
