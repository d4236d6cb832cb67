use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration from a `.xenvflags.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Per-command settings, keyed by the command's file name.
	#[serde(default)]
	pub commands: BTreeMap<String, CommandConfig>,
}

/// Settings for one wrapped command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CommandConfig {
	/// Shell-quoted arguments used when no `<COMMAND>_EXTRA_ARGS` variable is set.
	pub extra_args: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl Config {
	/// Validate that every command key is a bare file name.
	pub fn validate(&self) -> Result<(), crate::error::XenvflagsError> {
		for name in self.commands.keys() {
			if name.is_empty() || name.contains(['/', '\\']) {
				return Err(crate::error::XenvflagsError::InvalidCommandName { name: name.clone() });
			}
		}
		Ok(())
	}

	/// The configured extra-argument string for `command`, if any.
	pub fn extra_args_for(&self, command: &str) -> Option<&str> {
		self.commands
			.get(command)
			.and_then(|entry| entry.extra_args.as_deref())
	}
}
