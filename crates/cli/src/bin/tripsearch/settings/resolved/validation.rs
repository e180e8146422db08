use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let threshold = config.tuning.threshold;
	if !(0.0..=1.0).contains(&threshold) {
		return Err(ConfigError::invalid(
			"search.threshold",
			threshold.to_string(),
			sources.source_for_threshold(),
			"must be between 0.0 and 1.0",
		));
	}

	if config.debounce.is_zero() {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			"0",
			sources.source_for_debounce(),
			"must be greater than zero",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use tripsearch_core::SearchTuning;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			dataset: PathBuf::from("destinations.json"),
			debounce: Duration::from_millis(100),
			tuning: SearchTuning::default(),
			min_check_in_offset_days: 0,
		}
	}

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_debounce() {
		let config = ResolvedConfig {
			debounce: Duration::ZERO,
			..config()
		};
		let sources = ConfigSources {
			search_debounce_ms: Some(SettingSource::Environment(
				"TRIPSEARCH__SEARCH__DEBOUNCE_MS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "search.debounce_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_negative_threshold() {
		let mut config = config();
		config.tuning.threshold = -0.25;
		let sources = ConfigSources {
			search_threshold: Some(SettingSource::CliFlag("--threshold")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.threshold");
		assert!(err.to_string().contains("value: -0.25"));
		assert!(err.to_string().contains("CLI flag"));
	}
}
