//! The rename data model (spec §3): `ResaveFile`, `RenameMap`.

use std::collections::{HashMap, HashSet};

/// One entry in the user's rename list: an old path, a new path, and
/// whether the old path should be deleted once the batch finishes.
///
/// Paths are game-root-relative, forward-slash separated. Immutable once a
/// batch starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResaveFile {
	/// The asset's current path.
	pub old_path: String,
	/// The asset's path after renaming.
	pub new_path: String,
	/// Whether to delete `old_path` after a successful resave.
	pub delete_old: bool,
}

impl ResaveFile {
	/// Build a new rename entry.
	pub fn new(old_path: impl Into<String>, new_path: impl Into<String>, delete_old: bool) -> Self {
		Self {
			old_path: old_path.into(),
			new_path: new_path.into(),
			delete_old,
		}
	}
}

/// The authoritative set of path substitutions for a batch: every
/// `OldPath → NewPath` pair from the rename list, total on its key set (spec
/// §3: "no missing entries queried").
#[derive(Clone, Debug, Default)]
pub struct RenameMap {
	entries: HashMap<String, String>,
}

impl RenameMap {
	/// Build a rename map from a rename list.
	pub fn from_resave_files(files: &[ResaveFile]) -> Self {
		let entries = files
			.iter()
			.map(|f| (f.old_path.clone(), f.new_path.clone()))
			.collect();
		Self { entries }
	}

	/// Look up the new path for an old path, if this map renames it.
	pub fn get(&self, old_path: &str) -> Option<&str> {
		self.entries.get(old_path).map(String::as_str)
	}

	/// Whether this map has any entries at all.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of rename entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Every old path this map renames, as a target set for
	/// [`crate::scan`]'s "does this file reference any of these paths"
	/// query (spec §4.7).
	pub fn old_paths(&self) -> HashSet<String> {
		self.entries.keys().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_and_miss() {
		let files = vec![ResaveFile::new("Content/Old.tex", "Content/New.tex", false)];
		let map = RenameMap::from_resave_files(&files);
		assert_eq!(map.get("Content/Old.tex"), Some("Content/New.tex"));
		assert_eq!(map.get("Content/Other.tex"), None);
	}

	#[test]
	fn empty_map() {
		let map = RenameMap::from_resave_files(&[]);
		assert!(map.is_empty());
		assert_eq!(map.len(), 0);
	}
}
