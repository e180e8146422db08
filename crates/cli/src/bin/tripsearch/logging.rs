use log::LevelFilter;

/// Environment variable holding `env_logger` style filter directives.
const LOG_ENV: &str = "TRIPSEARCH_LOG";

/// Install the stderr logger. `--verbose` wins over the environment.
pub(crate) fn initialize(verbose: bool) {
	let mut builder = pretty_env_logger::formatted_builder();
	builder.filter_level(LevelFilter::Warn);
	builder.parse_env(LOG_ENV);
	if verbose {
		builder.filter_level(LevelFilter::Debug);
	}
	// Already set when tests install their own logger.
	builder.try_init().ok();
}
