use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_threshold: Option<SettingSource>,
	pub(crate) search_debounce_ms: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_threshold(&self) -> SettingSource {
		self.search_threshold
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.threshold"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.search_debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}
}
