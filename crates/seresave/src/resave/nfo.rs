//! UTF-8-BOM, `LEVEL`-keyed world info files: a handful of `KEY= "path"`
//! lines pointing at auxiliary assets (spec §4.6).

use std::io::{Read, Write};

use regex::Regex;

use super::{Resaver, UTF8_BOM};
use crate::error::Result;
use crate::rename::RenameMap;

const KEYS: [&str; 4] = ["LOADING_SCREEN", "THUMBNAIL", "INTRO_CUTSCENE_WORLD", "NETRICSA"];

/// Rewrites the quoted path on any `KEYS` line that hits the rename map.
pub struct NfoResaver;

impl Resaver for NfoResaver {
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
		let quoted = Regex::new(r#""([^"]*)""#).expect("valid regex");

		let mut out_lines = Vec::new();
		for line in text.lines() {
			let rewritten = line.split_once('=').and_then(|(key, value)| {
				if !KEYS.contains(&key.trim()) {
					return None;
				}
				quoted.captures(value).and_then(|caps| {
					renames.get(&caps[1]).map(|new_path| {
						line.replacen(&format!("\"{}\"", &caps[1]), &format!("\"{new_path}\""), 1)
					})
				})
			});
			out_lines.push(rewritten.unwrap_or_else(|| line.to_string()));
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
	fn rewrites_keyed_path() {
		let files = vec![ResaveFile::new("Textures/Old.tex", "Textures/New.tex", false)];
		let renames = RenameMap::from_resave_files(&files);
		let mut input = Cursor::new(b"THUMBNAIL= \"Textures/Old.tex\"\n".to_vec());
		let mut output = Vec::new();
		NfoResaver.resave(&mut input, &mut output, &renames, None).unwrap();
		assert_eq!(
			String::from_utf8(output).unwrap(),
			"THUMBNAIL= \"Textures/New.tex\"\n"
		);
	}

	#[test]
	fn preserves_bom() {
		let mut bytes = UTF8_BOM.to_vec();
		bytes.extend_from_slice(b"LEVEL= \"Foo.wld\"\n");
		let mut input = Cursor::new(bytes);
		let mut output = Vec::new();
		NfoResaver
			.resave(&mut input, &mut output, &RenameMap::default(), None)
			.unwrap();
		assert!(output.starts_with(&UTF8_BOM));
	}
}
