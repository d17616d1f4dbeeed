#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Configuration and logging for sites using [`pager`] and [`csrf`], and a small facade over both.

use std::sync::Arc;

pub mod config;
pub mod logging;

pub use config::Config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("initializing logging: {0}")]
	Logging(#[from] tracing_subscriber::util::TryInitError),
	#[error("CSRF protection: {0}")]
	Csrf(#[from] csrf::Error),
	#[error("{0}")]
	BaseUri(#[from] pager::ParseBaseError),
}

/// Loads the configuration and installs logging.
pub fn init() -> Result<Site, Error> {
	let config = config::config()?;
	logging::init(config.log_level)?;
	Ok(Site::new(config))
}

/// The configuration shared by every request.
#[derive(Debug, Clone)]
pub struct Site {
	config: Arc<Config>,
}

impl Site {
	pub fn new(config: Config) -> Self {
		Self {
			config: Arc::new(config),
		}
	}

	#[inline]
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Restores or creates the CSRF hash for this request.
	pub fn csrf(&self, context: &mut csrf::Context<'_>) -> Result<csrf::Csrf, Error> {
		Ok(csrf::Csrf::new(self.config.security.clone(), context)?)
	}

	/// Verifies the request and hands back the protection so that the next token can be emitted.
	pub fn protect(&self, context: &mut csrf::Context<'_>) -> Result<csrf::Csrf, Error> {
		let mut csrf = self.csrf(context)?;
		csrf.verify(context)?;
		Ok(csrf)
	}

	/// Links for `total` items under `base`, for the page the client asked for.
	pub fn pagination(
		&self,
		base: &str,
		query: pager::Query,
		total: pager::PageNum,
	) -> Result<pager::Pagination, Error> {
		Ok(self.config.pager.paginate(base, query, total)?)
	}
}
