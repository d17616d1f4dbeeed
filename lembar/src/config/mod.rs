use figment::providers::{Env, Format as _, Toml};
use figment::Figment;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
	#[serde(default = "default_log_level")]
	pub log_level: LogLevel,
	#[serde(default)]
	pub security: csrf::Config,
	#[serde(default)]
	pub pager: pager::Config,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: default_log_level(),
			security: csrf::Config::default(),
			pager: pager::Config::default(),
		}
	}
}

/// Log levels for the workspace's own crates and for everything else.
///
/// Written either as a single level (`log_level = "debug"`) or split (`log_level = { internal = "trace" }`), where a missing half keeps its default.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "RawLogLevel")]
pub struct LogLevel {
	pub internal: LevelFilter,
	pub external: LevelFilter,
}

impl Default for LogLevel {
	fn default() -> Self {
		default_log_level()
	}
}

const fn default_log_level() -> LogLevel {
	LogLevel {
		internal: LevelFilter::INFO,
		external: LevelFilter::WARN,
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogLevel {
	Both(String),
	Split {
		internal: Option<String>,
		external: Option<String>,
	},
}

#[derive(Debug, thiserror::Error)]
#[error("invalid log level {level:?}, expected one of off, error, warn, info, debug, trace")]
pub struct InvalidLogLevel {
	level: String,
}

fn parse_level(level: String) -> Result<LevelFilter, InvalidLogLevel> {
	level.parse().map_err(|_| InvalidLogLevel { level })
}

impl TryFrom<RawLogLevel> for LogLevel {
	type Error = InvalidLogLevel;

	fn try_from(raw: RawLogLevel) -> Result<Self, Self::Error> {
		let defaults = default_log_level();
		Ok(match raw {
			RawLogLevel::Both(level) => {
				let level = parse_level(level)?;
				Self {
					internal: level,
					external: level,
				}
			}
			RawLogLevel::Split { internal, external } => Self {
				internal: internal.map_or(Ok(defaults.internal), parse_level)?,
				external: external.map_or(Ok(defaults.external), parse_level)?,
			},
		})
	}
}

/// `lembar.toml`, overridden by `LEMBAR_`-prefixed environment variables. Nested keys are separated by `__`, as in `LEMBAR_SECURITY__RANDOMIZE`.
pub fn figment() -> Figment {
	Figment::new()
		.merge(Toml::file("lembar.toml"))
		.merge(Env::prefixed("LEMBAR_").split("__"))
}

pub fn config() -> Result<Config, figment::Error> {
	figment().extract()
}
