//! xenvflags - inject extra arguments into commands from environment variables.
//!
//! xenvflags is installed behind a symlink named after a real command. When
//! invoked, it finds the real command further down `PATH`, prepends the
//! arguments from `<COMMAND>_EXTRA_ARGS`, and runs it with the caller's
//! stdio and exit code.
//!
//! This library provides:
//! - Real-executable lookup that skips the symlink's own directory
//! - Extra-argument retrieval from the environment or the user config file
//! - Command execution with exit code propagation
//!
//! # Example
//!
//! ```no_run
//! use std::ffi::OsStr;
//! use std::path::Path;
//! use xenvflags::resolve::look_path;
//!
//! let real = look_path(
//!     "shfmt",
//!     Path::new("/home/me/bin"),
//!     OsStr::new("/home/me/bin:/usr/local/bin"),
//! )
//! .unwrap();
//! assert_eq!(real, Path::new("/usr/local/bin/shfmt"));
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod exec;
pub mod flags;
pub mod logging;
pub mod resolve;

pub use error::{Result, XenvflagsError};
