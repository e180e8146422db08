use std::path::PathBuf;
use std::time::Duration;

use tripsearch_core::{FormRules, SearchTuning, SessionSettings, StalePolicy};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) dataset: PathBuf,
	pub(crate) debounce: Duration,
	pub(crate) tuning: SearchTuning,
	pub(crate) min_check_in_offset_days: u32,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub(crate) fn session_settings(&self) -> SessionSettings {
		SessionSettings {
			debounce: self.debounce,
			tuning: self.tuning,
			stale_policy: StalePolicy::DiscardSuperseded,
		}
	}

	/// Form rules anchored on today's local date.
	pub(crate) fn form_rules(&self) -> FormRules {
		FormRules::from_today(self.min_check_in_offset_days)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
