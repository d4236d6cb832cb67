//! Behaviour switches read from the environment.

/// Set to `true` to log diagnostics to stderr.
pub const DEBUG_VAR: &str = "XENVFLAGS_DEBUG";

/// Set to `true` to print the version and exit.
pub const VERSION_VAR: &str = "XENVFLAGS_VERSION";

/// Overrides the location of the user config file.
pub const CONFIG_VAR: &str = "XENVFLAGS_CONFIG";

/// The value that turns a switch on. Anything else leaves it off.
const ENABLED: &str = "true";

/// Build version, overridable at compile time with `XENVFLAGS_BUILD_VERSION`.
pub fn version() -> &'static str {
	option_env!("XENVFLAGS_BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Check if an environment variable is set to exactly `true`.
fn is_enabled(var_name: &str) -> bool {
	std::env::var(var_name).is_ok_and(|value| value == ENABLED)
}

pub fn is_debug() -> bool {
	is_enabled(DEBUG_VAR)
}

pub fn is_version_requested() -> bool {
	is_enabled(VERSION_VAR)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_is_enabled() {
		// SAFETY: These env var operations are safe in serialized test context
		unsafe {
			std::env::remove_var("TEST_XENVFLAGS_FLAG");
			assert!(!is_enabled("TEST_XENVFLAGS_FLAG"));

			std::env::set_var("TEST_XENVFLAGS_FLAG", "");
			assert!(!is_enabled("TEST_XENVFLAGS_FLAG"));

			// Only the exact value counts
			std::env::set_var("TEST_XENVFLAGS_FLAG", "1");
			assert!(!is_enabled("TEST_XENVFLAGS_FLAG"));

			std::env::set_var("TEST_XENVFLAGS_FLAG", "TRUE");
			assert!(!is_enabled("TEST_XENVFLAGS_FLAG"));

			std::env::set_var("TEST_XENVFLAGS_FLAG", "true");
			assert!(is_enabled("TEST_XENVFLAGS_FLAG"));

			std::env::remove_var("TEST_XENVFLAGS_FLAG");
		}
	}

	#[test]
	fn test_version_not_empty() {
		assert!(!version().is_empty());
	}
}
