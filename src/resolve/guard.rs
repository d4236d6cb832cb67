use std::env;
use std::ffi::{OsStr, OsString};

/// Name of the search-path environment variable.
pub const PATH_VAR: &str = "PATH";

/// Scoped override of the process `PATH`.
///
/// The previous value (or its absence) is put back when the guard is
/// dropped, which also happens while unwinding.
#[derive(Debug)]
pub struct PathGuard {
	previous: Option<OsString>,
}

impl PathGuard {
	/// Install `value` as the process `PATH` until the guard is dropped.
	pub fn install(value: &OsStr) -> Self {
		let previous = env::var_os(PATH_VAR);
		// SAFETY: xenvflags is single-threaded; nothing reads the environment
		// concurrently while the guard is alive.
		unsafe { env::set_var(PATH_VAR, value) };
		PathGuard { previous }
	}
}

impl Drop for PathGuard {
	fn drop(&mut self) {
		// SAFETY: see `PathGuard::install`.
		unsafe {
			match self.previous.take() {
				Some(previous) => env::set_var(PATH_VAR, previous),
				None => env::remove_var(PATH_VAR),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_guard_restores_previous_value() {
		let original = env::var_os(PATH_VAR);

		{
			let _guard = PathGuard::install(OsStr::new("/guarded/bin"));
			assert_eq!(env::var_os(PATH_VAR), Some(OsString::from("/guarded/bin")));
		}

		assert_eq!(env::var_os(PATH_VAR), original);
	}

	#[test]
	#[serial]
	fn test_guard_restores_unset_path() {
		let original = env::var_os(PATH_VAR);
		// SAFETY: serialized test, no other thread touches PATH
		unsafe { env::remove_var(PATH_VAR) };

		{
			let _guard = PathGuard::install(OsStr::new("/guarded/bin"));
			assert!(env::var_os(PATH_VAR).is_some());
		}
		assert!(env::var_os(PATH_VAR).is_none());

		if let Some(original) = original {
			unsafe { env::set_var(PATH_VAR, original) };
		}
	}

	#[test]
	#[serial]
	fn test_guard_restores_on_panic() {
		let original = env::var_os(PATH_VAR);

		let result = std::panic::catch_unwind(|| {
			let _guard = PathGuard::install(OsStr::new("/panicking/bin"));
			panic!("lookup blew up");
		});

		assert!(result.is_err());
		assert_eq!(env::var_os(PATH_VAR), original);
	}
}
