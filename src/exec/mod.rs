//! Command execution for xenvflags.
//!
//! This module handles:
//! - Locating the shim's own symlink
//! - Finding the real executable behind it
//! - Executing the real command with proper stdio handling
//! - Exit code propagation

use crate::error::{Result, XenvflagsError};
use crate::resolve::{PATH_VAR, look_path};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Resolve how this process was invoked (`argv[0]`) to a full path.
///
/// Uses the inherited `PATH`, not a filtered one. A name containing a path
/// separator is taken relative to the working directory.
pub fn locate_self(invoked_as: &OsStr) -> Result<PathBuf> {
	which::which(invoked_as).map_err(|source| XenvflagsError::SelfLocationFailed {
		invoked_as: invoked_as.to_string_lossy().to_string(),
		source,
	})
}

/// Return an error unless `path` itself is a symbolic link.
pub fn ensure_symlink(path: &Path) -> Result<()> {
	let metadata = std::fs::symlink_metadata(path).map_err(|source| {
		XenvflagsError::InspectFailed {
			path: path.to_path_buf(),
			source,
		}
	})?;

	if !metadata.file_type().is_symlink() {
		return Err(XenvflagsError::NotASymlink {
			path: path.to_path_buf(),
		});
	}

	Ok(())
}

/// Find the `real` command with the same name as the given symlink.
///
/// For example, with `$HOME/bin/shfmt` a symlink to xenvflags and the real
/// shfmt in `/usr/local/bin`, this returns `/usr/local/bin/shfmt` for a
/// `PATH` of `$HOME/bin:/usr/local/bin`.
pub fn find_real_executable(symlink: &Path, search_path: &OsStr) -> Result<PathBuf> {
	let command = symlink
		.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.ok_or_else(|| XenvflagsError::CommandNotFound {
			command: symlink.to_string_lossy().to_string(),
		})?;
	let excluded_dir = symlink.parent().unwrap_or_else(|| Path::new(""));

	look_path(&command, excluded_dir, search_path)
}

/// The inherited search path, empty when `PATH` is unset.
pub fn inherited_search_path() -> OsString {
	std::env::var_os(PATH_VAR).unwrap_or_default()
}

/// Build the final argument list: extra arguments first, then the caller's.
pub fn build_args(extra_args: &[String], original_args: &[OsString]) -> Vec<OsString> {
	extra_args
		.iter()
		.map(OsString::from)
		.chain(original_args.iter().cloned())
		.collect()
}

/// Run `binary` with `args` and wait for it.
///
/// The child shares this process's stdin, stdout and stderr, so interactive
/// and piped use both behave as if the real command were called directly.
pub fn execute_command(binary: &Path, args: &[OsString]) -> Result<ExitStatus> {
	Command::new(binary)
		.args(args)
		.status()
		.map_err(|source| spawn_error(binary, source))
}

/// A binary that vanished between lookup and spawn reads as not found.
fn spawn_error(binary: &Path, source: std::io::Error) -> XenvflagsError {
	let command = binary.to_string_lossy().to_string();
	match source.kind() {
		std::io::ErrorKind::NotFound => XenvflagsError::CommandNotFound { command },
		_ => XenvflagsError::CommandFailed { command, source },
	}
}

/// The exit code to propagate for a finished child.
///
/// A child killed by a signal has no exit code and is reported as an error.
pub fn exit_code_of(binary: &Path, status: ExitStatus) -> Result<i32> {
	if let Some(code) = status.code() {
		return Ok(code);
	}

	Err(XenvflagsError::CommandTerminated {
		command: binary.to_string_lossy().to_string(),
		detail: termination_detail(status),
	})
}

#[cfg(unix)]
fn termination_detail(status: ExitStatus) -> String {
	use std::os::unix::process::ExitStatusExt;

	match status.signal() {
		Some(signal) => format!("killed by signal {signal}"),
		None => status.to_string(),
	}
}

#[cfg(not(unix))]
fn termination_detail(status: ExitStatus) -> String {
	status.to_string()
}
