use tracing::Metadata;
use tracing_subscriber::util::TryInitError;

use crate::config::LogLevel;

static INTERNAL_CRATES: &[&str] = &["lembar", "pager", "csrf"];

fn is_internal(metadata: &Metadata<'_>) -> bool {
	metadata
		.module_path()
		.and_then(|path| path.split("::").next())
		.map_or(false, |krate| INTERNAL_CRATES.contains(&krate))
}

/// Installs the global subscriber, logging to stderr. Fails if one was already installed.
pub fn init(log_level: LogLevel) -> Result<(), TryInitError> {
	use tracing_subscriber::filter::FilterFn;
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let filter = FilterFn::new(move |metadata| {
		let required_level = if is_internal(metadata) {
			log_level.internal
		} else {
			log_level.external
		};
		// a level at or below the filter is enabled
		metadata.level() <= &required_level
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr);

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.try_init()
}
