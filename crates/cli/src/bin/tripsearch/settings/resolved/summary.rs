use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Dataset: {}", config.dataset.display());
	println!("  Debounce: {} ms", config.debounce.as_millis());
	println!("  Similarity threshold: {}", config.tuning.threshold);
	println!("  Minimum score: {}", config.tuning.min_score);
	println!(
		"  Minimum check-in: {}",
		offset_to_words(config.min_check_in_offset_days)
	);
}

fn offset_to_words(days: u32) -> String {
	match days {
		0 => "today".to_string(),
		1 => "tomorrow".to_string(),
		days => format!("{days} days from today"),
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use tripsearch_core::SearchTuning;

	use super::*;

	#[test]
	fn offset_to_words_matches_expectations() {
		assert_eq!(offset_to_words(0), "today");
		assert_eq!(offset_to_words(1), "tomorrow");
		assert_eq!(offset_to_words(3), "3 days from today");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			dataset: PathBuf::from("destinations.json"),
			debounce: Duration::from_millis(100),
			tuning: SearchTuning::default(),
			min_check_in_offset_days: 2,
		};

		print_summary(&config);
	}
}
