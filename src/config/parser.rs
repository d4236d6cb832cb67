use crate::config::types::{Config, LoadedConfig};
use crate::error::{Result, XenvflagsError};
use std::io;
use std::path::Path;

/// Read and parse the config file at `path`.
///
/// A file that does not exist is `Ok(None)`; any other read failure is an
/// error.
pub fn read_config_file(path: &Path) -> Result<Option<LoadedConfig>> {
	let content = match std::fs::read_to_string(path) {
		Ok(content) => content,
		Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(source) => {
			return Err(XenvflagsError::ConfigReadError {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	let config = parse_config_str(&content, path)?;
	Ok(Some(LoadedConfig {
		config,
		path: path.to_path_buf(),
	}))
}

/// Parse and validate config text. `path` only labels errors.
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config = toml::from_str::<Config>(content).map_err(|source| {
		XenvflagsError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		}
	})?;
	config.validate()?;
	Ok(config)
}
