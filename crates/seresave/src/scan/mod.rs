//! Read-only reference discovery: answers whether a file references any
//! path in a given target set, without rewriting anything (spec §4.7).
//! Used by the batch driver to decide whether an auxiliary file needs its
//! references rewritten at all.

pub mod binary_meta;
pub mod lua;
pub mod nfo;
pub mod text_meta;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
pub use crate::resave::{sniff, Format};

/// Answers whether a stream contains at least one reference to any path in
/// `targets`.
pub trait Scanner {
	/// Return `true` on the first path found in `input` that belongs to
	/// `targets`, scanning only as far as needed to decide.
	fn references_any(&self, input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool>;
}

/// Build the scanner for a recognized format. `Format::Plain` has no
/// reference format to mine, so it has no scanner.
pub fn scanner_for(format: Format) -> Option<Box<dyn Scanner>> {
	match format {
		Format::BinaryMeta => Some(Box::new(binary_meta::BinaryMetaScanner)),
		Format::TextMeta => Some(Box::new(text_meta::TextMetaScanner)),
		Format::Nfo => Some(Box::new(nfo::NfoScanner)),
		Format::Lua => Some(Box::new(lua::LuaScanner::new())),
		Format::Plain => None,
	}
}

/// Convenience: sniff `path`/`first_8` and scan `input` if a scanner
/// exists; `Format::Plain` (no scanner) never references anything.
pub fn references_any(path: &Path, first_8: &[u8], input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool> {
	match scanner_for(sniff(path, first_8)) {
		Some(scanner) => scanner.references_any(input, targets),
		None => Ok(false),
	}
}
