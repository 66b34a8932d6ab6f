//! Logging setup for applications embedding the client.
//!
//! The library itself only emits `tracing` events: request URLs at `debug`, every
//! detected failure at `error`. Applications that do not install their own
//! subscriber can call [`setup_logging`], which honours `RUST_LOG` and otherwise
//! shows this crate's events from `info` upwards.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "escan_client=info";

type SetupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs a global subscriber writing to stdout
pub fn setup_logging() -> Result<(), SetupError> {
	setup_logging_with_writer(std::io::stdout, DEFAULT_FILTER)
}

/// Installs a global subscriber writing to `writer`
///
/// `default_filter` is an `EnvFilter` directive string used when `RUST_LOG` is absent
/// or unparsable.
pub fn setup_logging_with_writer<W>(writer: W, default_filter: &str) -> Result<(), SetupError>
where
	W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(default_filter))?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(false)
						.compact(),
				),
		)
		.try_init()?;
	Ok(())
}
