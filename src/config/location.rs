use crate::config::parser::read_config_file;
use crate::config::types::LoadedConfig;
use crate::error::{Result, XenvflagsError};
use crate::flags::CONFIG_VAR;
use std::path::PathBuf;

/// File name of the user config inside the home directory.
const CONFIG_FILE_NAME: &str = ".xenvflags.toml";

/// Get the path to the user's config file.
///
/// `XENVFLAGS_CONFIG` wins when set and non-empty, otherwise `~/.xenvflags.toml`.
pub fn user_config_path() -> Result<PathBuf> {
	if let Some(path) = std::env::var_os(CONFIG_VAR).filter(|path| !path.is_empty()) {
		return Ok(PathBuf::from(path));
	}

	let home_dir = dirs::home_dir().ok_or(XenvflagsError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

/// Load the user config if it exists.
///
/// A missing file, or no home directory to look in, is not an error.
pub fn load_user_config() -> Result<Option<LoadedConfig>> {
	let path = match user_config_path() {
		Ok(path) => path,
		Err(XenvflagsError::HomeDirectoryNotFound) => return Ok(None),
		Err(e) => return Err(e),
	};

	read_config_file(&path)
}
