use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;
use tripsearch_core::{DEFAULT_DEBOUNCE, SearchTuning};

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dataset: DatasetSection,
	search: SearchSection,
	form: FormSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DatasetSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	debounce_ms: Option<u64>,
	threshold: Option<f32>,
	min_score: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FormSection {
	min_check_in_offset_days: Option<u32>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = &cli.dataset {
			self.dataset.path = Some(path.clone());
		}
		if let Some(threshold) = cli.threshold {
			self.search.threshold = Some(threshold);
		}
		if let Some(min_score) = cli.min_score {
			self.search.min_score = Some(min_score);
		}
		if let Some(debounce_ms) = cli.debounce_ms {
			self.search.debounce_ms = Some(debounce_ms);
		}
		if let Some(offset) = cli.min_check_in_offset {
			self.form.min_check_in_offset_days = Some(offset);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_threshold: detect_source(
				cli.threshold.is_some(),
				self.search.threshold.is_some(),
				"TRIPSEARCH__SEARCH__THRESHOLD",
				"--threshold",
				"search.threshold",
			),
			search_debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"TRIPSEARCH__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
		};

		let dataset = self.dataset.path.ok_or_else(|| {
			ConfigError::invalid(
				"dataset.path",
				"(unset)",
				SettingSource::ConfigKey("dataset.path"),
				"set it in a config file, TRIPSEARCH__DATASET__PATH or --dataset",
			)
		})?;

		let defaults = SearchTuning::default();
		let tuning = SearchTuning {
			threshold: self.search.threshold.unwrap_or(defaults.threshold),
			min_score: self.search.min_score.unwrap_or(defaults.min_score),
			..defaults
		};
		let debounce = self
			.search
			.debounce_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_DEBOUNCE);

		let config = ResolvedConfig {
			dataset,
			debounce,
			tuning,
			min_check_in_offset_days: self.form.min_check_in_offset_days.unwrap_or(0),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
