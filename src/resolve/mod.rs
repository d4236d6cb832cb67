//! Real-executable lookup for xenvflags.
//!
//! This module handles:
//! - Removing the shim's own directory from the search path
//! - Looking up a command on the remaining directories, first match wins
//! - Scoped substitution of the process `PATH` during the lookup

pub mod clean;
pub mod guard;

pub use clean::clean_path;
pub use guard::{PATH_VAR, PathGuard};

use crate::error::{Result, XenvflagsError};
use std::borrow::Cow;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

#[cfg(windows)]
const LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const LIST_SEPARATOR: &str = ":";

/// Expand a leading `~` component to the home directory.
///
/// `which` searches `~/bin` as `$HOME/bin`, so exclusion has to compare the
/// same directory. `~user` forms are left alone, as `which` does.
fn expand_tilde(entry: &Path) -> Cow<'_, Path> {
	let mut components = entry.components();
	if components.next() != Some(Component::Normal(OsStr::new("~"))) {
		return Cow::Borrowed(entry);
	}

	match dirs::home_dir() {
		Some(mut home) => {
			home.extend(components);
			Cow::Owned(home)
		}
		None => Cow::Borrowed(entry),
	}
}

/// A directory removed from the search path before lookup.
///
/// Entries are compared lexically after `~` expansion and [`clean_path`].
/// When both sides exist on disk they are also compared with symlinks
/// resolved.
#[derive(Debug)]
struct ExcludedDir {
	lexical: PathBuf,
	resolved: Option<PathBuf>,
}

impl ExcludedDir {
	/// `None` for an empty directory, which excludes nothing.
	fn new(dir: &Path) -> Option<Self> {
		if dir.as_os_str().is_empty() {
			return None;
		}

		let lexical = clean_path(&expand_tilde(dir));
		let resolved = std::fs::canonicalize(&lexical).ok();
		Some(ExcludedDir { lexical, resolved })
	}

	fn matches(&self, entry: &Path) -> bool {
		let cleaned = clean_path(&expand_tilde(entry));
		if cleaned == self.lexical {
			return true;
		}

		match (&self.resolved, std::fs::canonicalize(&cleaned)) {
			(Some(resolved), Ok(candidate)) => *resolved == candidate,
			_ => false,
		}
	}
}

/// Build the effective search path: `search_path` minus every entry equal to
/// `excluded_dir`, in the original order.
pub fn filter_search_path(excluded_dir: &Path, search_path: &OsStr) -> OsString {
	let excluded = ExcludedDir::new(excluded_dir);

	let mut effective = OsString::new();
	let mut first = true;
	for dir in env::split_paths(search_path) {
		if excluded.as_ref().is_some_and(|excluded| excluded.matches(&dir)) {
			continue;
		}
		if !first {
			effective.push(LIST_SEPARATOR);
		}
		effective.push(dir.as_os_str());
		first = false;
	}

	effective
}

/// Look up `command` on `search_path`, skipping `excluded_dir`.
///
/// Example: with `search_path` `/home/me/bin:/usr/local/bin`, `prog` present
/// in both and `excluded_dir` `/home/me/bin/`, this returns
/// `/usr/local/bin/prog`.
///
/// The process `PATH` holds the effective search path for the duration of the
/// lookup and is restored before returning.
pub fn look_path(command: &str, excluded_dir: &Path, search_path: &OsStr) -> Result<PathBuf> {
	let effective = filter_search_path(excluded_dir, search_path);
	if effective.is_empty() {
		return Err(XenvflagsError::CommandNotFound {
			command: command.to_string(),
		});
	}

	let _guard = PathGuard::install(&effective);
	which::which(command).map_err(|source| match source {
		which::Error::CannotFindBinaryPath => XenvflagsError::CommandNotFound {
			command: command.to_string(),
		},
		source => XenvflagsError::LookupFailed {
			command: command.to_string(),
			source,
		},
	})
}
