//! Lua script reference discovery: the path argument of every recognized
//! call (spec §4.7), mirroring [`crate::resave::lua`] without the rewriting.

use std::collections::HashSet;
use std::io::Read;

use regex::Regex;

use super::Scanner;
use crate::error::Result;
use crate::resave::UTF8_BOM;

/// Checks the path argument of every `LoadResource`/`dofile` call against
/// the target set.
pub struct LuaScanner {
	call: Regex,
}

impl LuaScanner {
	/// Compile the call-site pattern once.
	pub fn new() -> Self {
		Self {
			call: Regex::new(r#"(?:LoadResource|dofile)\s*\(\s*["']?([^"')]+)["']?\s*\)"#).expect("valid regex"),
		}
	}
}

impl Default for LuaScanner {
	fn default() -> Self {
		Self::new()
	}
}

impl Scanner for LuaScanner {
	fn references_any(&self, input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool> {
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;
		let text = String::from_utf8_lossy(if bytes.starts_with(&UTF8_BOM) { &bytes[3..] } else { &bytes[..] });
		Ok(self.call.captures_iter(&text).any(|caps| targets.contains(&caps[1])))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn finds_targeted_call_path() {
		let mut targets = HashSet::new();
		targets.insert("Scripts/Old.lua".to_string());

		let mut input = Cursor::new(b"LoadResource(\"Scripts/Old.lua\")\n".to_vec());
		assert!(LuaScanner::new().references_any(&mut input, &targets).unwrap());
	}
}
