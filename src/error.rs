use std::path::PathBuf;

/// Library-level structured errors for xenvflags.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum XenvflagsError {
	#[error("Failed to locate own executable: {invoked_as}")]
	SelfLocationFailed {
		invoked_as: String,
		#[source]
		source: which::Error,
	},

	#[error("Failed to inspect {path}")]
	InspectFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{path} is not a symlink")]
	NotASymlink { path: PathBuf },

	#[error("Command not found: {command}")]
	CommandNotFound { command: String },

	#[error("Failed to look up command: {command}")]
	LookupFailed {
		command: String,
		#[source]
		source: which::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid command name in config: {name:?}")]
	InvalidCommandName { name: String },

	#[error("Malformed extra arguments in {source_name}")]
	MalformedExtraArgs {
		source_name: String,
		#[source]
		source: shell_words::ParseError,
	},

	#[error("Extra arguments in {source_name} are not valid UTF-8")]
	NonUtf8ExtraArgs { source_name: String },

	#[error("Command execution failed: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Command terminated without an exit code: {command} ({detail})")]
	CommandTerminated { command: String, detail: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using XenvflagsError.
pub type Result<T> = std::result::Result<T, XenvflagsError>;
