use anyhow::{Context, Result};
use std::ffi::OsString;
use tracing::debug;

use xenvflags::args::{command_name, resolve_extra_args};
use xenvflags::config::load_user_config;
use xenvflags::exec::{
	build_args, ensure_symlink, execute_command, exit_code_of, find_real_executable,
	inherited_search_path, locate_self,
};
use xenvflags::{flags, logging};

const USAGE: &str = "\
xenvflags should not be called directly, but via a symlink.

For example, shfmt is installed in /usr/local/bin/shfmt.
Setup: ln -s path/to/real/xenvflags $HOME/bin/shfmt

Make sure that $HOME/bin is placed before /usr/local/bin in PATH. Calling shfmt
will automatically apply extra arguments from the SHFMT_EXTRA_ARGS environment
variable.

SHFMT_EXTRA_ARGS='-i 2' shfmt --> shfmt -i 2
";

/// Exit code when invoked directly instead of through a symlink.
const USAGE_EXIT: i32 = 1;

/// Exit code for internal failures, distinct from the usage rejection.
const FATAL_EXIT: i32 = 126;

// `process::exit` keeps the child's full code; `ExitCode` only carries a u8.
fn main() {
	if flags::is_version_requested() {
		println!("{}", flags::version());
		return;
	}

	logging::init(flags::is_debug());

	let code = run().unwrap_or_else(|e| {
		eprintln!("xenvflags: error: {e:?}");
		FATAL_EXIT
	});
	std::process::exit(code);
}

fn run() -> Result<i32> {
	let mut argv = std::env::args_os();
	let invoked_as = argv.next().context("Missing program name in arguments")?;
	let original_args: Vec<OsString> = argv.collect();

	let symlink = locate_self(&invoked_as).context("Failed to locate own executable")?;

	if let Err(e) = ensure_symlink(&symlink) {
		debug!("{e}");
		eprint!("{USAGE}");
		return Ok(USAGE_EXIT);
	}

	let executable = find_real_executable(&symlink, &inherited_search_path())
		.context("Failed to find real executable")?;

	let command = command_name(&executable);
	let extra = resolve_extra_args(&command, load_user_config)
		.with_context(|| format!("Failed to load extra arguments for {command}"))?;

	debug!("version: {}", flags::version());
	debug!("executable: {}", executable.display());
	debug!("original arguments: {:?}", original_args);
	debug!("extra arguments from {}: {:?}", extra.source, extra.args);

	let final_args = build_args(&extra.args, &original_args);
	let status = execute_command(&executable, &final_args)
		.with_context(|| format!("Failed to execute: {}", executable.display()))?;

	Ok(exit_code_of(&executable, status)?)
}
