//! Configuration loading and parsing for xenvflags.
//!
//! This module handles:
//! - TOML config file parsing
//! - User config file discovery

pub mod location;
pub mod parser;
pub mod types;

pub use location::{load_user_config, user_config_path};
pub use parser::{parse_config_str, read_config_file};
pub use types::{CommandConfig, Config, LoadedConfig};
