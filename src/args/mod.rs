//! Extra-argument retrieval for xenvflags.
//!
//! This module handles:
//! - Naming the `<COMMAND>_EXTRA_ARGS` environment variable
//! - Falling back to the user config file
//! - Shell-style tokenization of the argument string

use crate::config::LoadedConfig;
use crate::error::{Result, XenvflagsError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the uppercased command name.
pub const ENV_SUFFIX: &str = "_EXTRA_ARGS";

/// Where the extra arguments came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsSource {
	/// An environment variable, by name.
	EnvVar(String),
	/// The user config file.
	Config(PathBuf),
	/// Nothing configured.
	None,
}

impl fmt::Display for ArgsSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ArgsSource::EnvVar(name) => write!(f, "environment variable {name}"),
			ArgsSource::Config(path) => write!(f, "config file {}", path.display()),
			ArgsSource::None => f.write_str("no source"),
		}
	}
}

/// Tokenized extra arguments and their origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraArgs {
	pub args: Vec<String>,
	pub source: ArgsSource,
}

impl ExtraArgs {
	fn empty() -> Self {
		ExtraArgs {
			args: Vec::new(),
			source: ArgsSource::None,
		}
	}
}

/// The command name used for argument lookup: the executable's file name
/// without the platform executable suffix.
pub fn command_name(executable: &Path) -> String {
	let mut name = executable
		.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.unwrap_or_default();

	let suffix = std::env::consts::EXE_SUFFIX;
	if suffix.is_empty() || name.len() <= suffix.len() {
		return name;
	}

	let split = name.len() - suffix.len();
	if name
		.get(split..)
		.is_some_and(|ext| ext.eq_ignore_ascii_case(suffix))
	{
		name.truncate(split);
	}
	name
}

/// `shfmt` -> `SHFMT_EXTRA_ARGS`.
pub fn env_var_name(command: &str) -> String {
	format!("{}{}", command.to_uppercase(), ENV_SUFFIX)
}

/// Shell-exportable variant of [`env_var_name`], only when it differs.
///
/// `clang-format` -> `CLANG_FORMAT_EXTRA_ARGS`.
pub fn sanitized_env_var_name(command: &str) -> Option<String> {
	let upper = command.to_uppercase();
	let sanitized: String = upper
		.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() || c == '_' {
				c
			} else {
				'_'
			}
		})
		.collect();

	(sanitized != upper).then(|| format!("{}{}", sanitized, ENV_SUFFIX))
}

/// Split an argument string with shell quoting rules.
pub fn tokenize(value: &str, source: &ArgsSource) -> Result<Vec<String>> {
	shell_words::split(value).map_err(|err| XenvflagsError::MalformedExtraArgs {
		source_name: source.to_string(),
		source: err,
	})
}

/// Extra arguments from the environment, if any variable for `command` is set.
///
/// A set but empty variable counts and yields no arguments. A value that is
/// not valid UTF-8 is rejected rather than passed on altered.
pub fn extra_args_from_env(command: &str) -> Result<Option<ExtraArgs>> {
	let candidates = std::iter::once(env_var_name(command)).chain(sanitized_env_var_name(command));

	for name in candidates {
		if let Some(value) = std::env::var_os(&name) {
			let source = ArgsSource::EnvVar(name);
			let value = value
				.into_string()
				.map_err(|_| XenvflagsError::NonUtf8ExtraArgs {
					source_name: source.to_string(),
				})?;
			let args = tokenize(&value, &source)?;
			return Ok(Some(ExtraArgs { args, source }));
		}
	}

	Ok(None)
}

/// Resolve the extra arguments for `command`.
///
/// Environment variables win; `load_config` is only called when none is set.
pub fn resolve_extra_args<F>(command: &str, load_config: F) -> Result<ExtraArgs>
where
	F: FnOnce() -> Result<Option<LoadedConfig>>,
{
	if let Some(extra) = extra_args_from_env(command)? {
		return Ok(extra);
	}

	let Some(loaded) = load_config()? else {
		return Ok(ExtraArgs::empty());
	};

	match loaded.config.extra_args_for(command) {
		Some(value) => {
			let source = ArgsSource::Config(loaded.path.clone());
			let args = tokenize(value, &source)?;
			Ok(ExtraArgs { args, source })
		}
		None => Ok(ExtraArgs::empty()),
	}
}
