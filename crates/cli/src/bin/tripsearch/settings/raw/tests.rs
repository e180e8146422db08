use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["tripsearch", "suggest", "sing"]);
	cli.dataset = Some(PathBuf::from("/tmp/destinations.json"));
	cli.threshold = Some(0.5);
	cli.min_score = Some(12);
	cli.debounce_ms = Some(250);
	cli.min_check_in_offset = Some(3);

	let mut config = RawConfig::default();
	config.search.threshold = Some(0.1);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.dataset.path, cli.dataset);
	assert_eq!(config.search.threshold, Some(0.5));
	assert_eq!(config.search.min_score, Some(12));
	assert_eq!(config.search.debounce_ms, Some(250));
	assert_eq!(config.form.min_check_in_offset_days, Some(3));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["tripsearch", "--dataset", "places.json", "worker"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.dataset, PathBuf::from("places.json"));
	assert_eq!(resolved.debounce, Duration::from_millis(100));
	assert_eq!(resolved.tuning.threshold, 0.3);
	assert_eq!(resolved.min_check_in_offset_days, 0);
}

#[test]
fn missing_dataset_is_reported() {
	let cli = CliArgs::parse_from(["tripsearch", "worker"]);
	let err = RawConfig::default().resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("dataset.path"));
}

#[test]
fn out_of_range_threshold_names_the_flag() {
	let cli = CliArgs::parse_from([
		"tripsearch",
		"--dataset",
		"places.json",
		"--threshold",
		"1.5",
		"worker",
	]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("search.threshold"));
	assert!(message.contains("--threshold"));
}
