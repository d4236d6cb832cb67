use tracing_subscriber::EnvFilter;

/// Overrides the log filter, in `EnvFilter` syntax.
///
/// `RUST_LOG` is left to the wrapped command.
pub const LOG_FILTER_VAR: &str = "XENVFLAGS_LOG";

/// Install the stderr subscriber.
///
/// Debug mode logs everything from xenvflags; otherwise only warnings and
/// errors unless `XENVFLAGS_LOG` says otherwise.
pub fn init(debug: bool) {
	let env_filter = if debug {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.with_target(false)
		.try_init();
}
