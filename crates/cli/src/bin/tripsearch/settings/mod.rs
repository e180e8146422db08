//! Configuration loading and resolution.
//!
//! Values are layered lowest to highest: default config files, `--config`
//! files, `TRIPSEARCH__SECTION__KEY` environment variables, then CLI flags.
//! [`load`] returns the validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
