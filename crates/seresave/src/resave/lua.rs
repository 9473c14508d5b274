//! `.lua` scripts: rewrites resource-loading calls whose path argument hits
//! the rename map (spec §4.6).

use std::io::{Read, Write};

use regex::{Captures, Regex};

use super::{Resaver, UTF8_BOM};
use crate::error::Result;
use crate::rename::RenameMap;

/// Rewrites `LoadResource(...)`/`dofile(...)` path arguments that hit the
/// rename map; leaves everything else (including unmatched calls) untouched.
pub struct LuaResaver {
	call: Regex,
}

impl LuaResaver {
	/// Compile the call-site pattern once.
	pub fn new() -> Self {
		Self {
			call: Regex::new(r#"(?P<function>LoadResource|dofile)\s*\(\s*["']?(?P<path>[^"')]+)["']?\s*\)"#)
				.expect("valid regex"),
		}
	}
}

impl Default for LuaResaver {
	fn default() -> Self {
		Self::new()
	}
}

impl Resaver for LuaResaver {
	fn resave(
		&self,
		input: &mut dyn Read,
		output: &mut dyn Write,
		renames: &RenameMap,
		_new_asset_fn: Option<&str>,
	) -> Result<()> {
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;
		let has_bom = bytes.starts_with(&UTF8_BOM);
		if has_bom {
			output.write_all(&UTF8_BOM)?;
		}
		let text = String::from_utf8_lossy(if has_bom { &bytes[3..] } else { &bytes[..] });

		let mut out_lines = Vec::with_capacity(text.lines().count());
		for line in text.lines() {
			let mut any_hit = false;
			let rewritten = self.call.replace_all(line, |caps: &Captures| {
				let function = &caps["function"];
				let path = &caps["path"];
				match renames.get(path) {
					Some(new_path) => {
						any_hit = true;
						format!("{function}(\"{new_path}\")")
					}
					None => caps[0].to_string(),
				}
			});
			out_lines.push(if any_hit { rewritten.into_owned() } else { line.to_string() });
		}

		write!(output, "{}", out_lines.join("\n"))?;
		if !out_lines.is_empty() {
			writeln!(output)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rename::ResaveFile;
	use std::io::Cursor;

	#[test]
	fn rewrites_load_resource_call() {
		let files = vec![ResaveFile::new("Scripts/Old.lua", "Scripts/New.lua", false)];
		let renames = RenameMap::from_resave_files(&files);
		let mut input = Cursor::new(b"LoadResource(\"Scripts/Old.lua\")\n".to_vec());
		let mut output = Vec::new();
		LuaResaver::new().resave(&mut input, &mut output, &renames, None).unwrap();
		assert_eq!(
			String::from_utf8(output).unwrap(),
			"LoadResource(\"Scripts/New.lua\")\n"
		);
	}

	#[test]
	fn leaves_unmatched_call_untouched() {
		let renames = RenameMap::default();
		let mut input = Cursor::new(b"dofile(\"Unrelated.lua\")\n".to_vec());
		let mut output = Vec::new();
		LuaResaver::new().resave(&mut input, &mut output, &renames, None).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), "dofile(\"Unrelated.lua\")\n");
	}
}
