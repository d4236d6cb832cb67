use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// - Repeated and trailing separators are collapsed
/// - `.` components are dropped
/// - `..` removes the preceding normal component; at the root it is dropped,
///   and leading `..` on a relative path is kept
/// - An empty result becomes `.`
pub fn clean_path(path: &Path) -> PathBuf {
	let mut parts: Vec<Component> = Vec::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => match parts.last() {
				Some(Component::Normal(_)) => {
					parts.pop();
				}
				Some(Component::RootDir) => {}
				_ => parts.push(component),
			},
			_ => parts.push(component),
		}
	}

	if parts.is_empty() {
		return PathBuf::from(".");
	}

	parts.iter().collect()
}
