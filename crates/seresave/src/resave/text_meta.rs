//! `MetaText`-tagged plain-text meta: line-oriented `key= value;` pairs,
//! some of whose values are `@"path"` literals (spec §4.6).

use std::io::{Read, Write};

use regex::Regex;

use super::Resaver;
use crate::error::Result;
use crate::rename::RenameMap;

const ASSET_FN_KEY: &str = "rf_strAssetFN";
const ASSET_UID_KEY: &str = "rf_ulAssetUID";

/// Rewrites `@"path"`/`@'path'` literals that hit the rename map, and (when
/// this asset is itself being renamed) its own filename/UID fields.
pub struct TextMetaResaver;

impl Resaver for TextMetaResaver {
	fn resave(
		&self,
		input: &mut dyn Read,
		output: &mut dyn Write,
		renames: &RenameMap,
		new_asset_fn: Option<&str>,
	) -> Result<()> {
		let mut text = String::new();
		input.read_to_string(&mut text)?;
		let path_literal = Regex::new(r#"@(["'])([^"']*)\1"#).expect("valid regex");

		let mut out_lines = Vec::new();
		for line in text.lines() {
			let self_rewrite = new_asset_fn.and_then(|new_fn| {
				if line.contains(ASSET_FN_KEY) {
					Some(format!("{ASSET_FN_KEY}= @\"{new_fn}\";"))
				} else if line.contains(ASSET_UID_KEY) {
					Some(format!("{ASSET_UID_KEY}= {};", rand::random::<u32>()))
				} else {
					None
				}
			});

			let rewritten = self_rewrite.or_else(|| {
				path_literal.captures(line).and_then(|caps| {
					let old_path = &caps[2];
					renames.get(old_path).map(|new_path| {
						let quote = &caps[1];
						line.replacen(
							&format!("{quote}{old_path}{quote}"),
							&format!("{quote}{new_path}{quote}"),
							1,
						)
					})
				})
			});

			out_lines.push(rewritten.unwrap_or_else(|| line.to_string()));
		}

		write!(output, "{}", out_lines.join("\n"))?;
		if !text.is_empty() {
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
	fn rewrites_path_literal() {
		let files = vec![ResaveFile::new("Textures/Old.tex", "Textures/New.tex", false)];
		let renames = RenameMap::from_resave_files(&files);
		let mut input = Cursor::new(b"rf_strFile= @\"Textures/Old.tex\";\n".to_vec());
		let mut output = Vec::new();
		TextMetaResaver.resave(&mut input, &mut output, &renames, None).unwrap();
		assert_eq!(
			String::from_utf8(output).unwrap(),
			"rf_strFile= @\"Textures/New.tex\";\n"
		);
	}

	#[test]
	fn self_rename_rewrites_asset_fn() {
		let renames = RenameMap::default();
		let mut input = Cursor::new(b"rf_strAssetFN= @\"Old.tex\";\n".to_vec());
		let mut output = Vec::new();
		TextMetaResaver
			.resave(&mut input, &mut output, &renames, Some("New.tex"))
			.unwrap();
		assert_eq!(
			String::from_utf8(output).unwrap(),
			"rf_strAssetFN= @\"New.tex\";\n"
		);
	}

	#[test]
	fn leaves_unmatched_lines_untouched() {
		let renames = RenameMap::default();
		let mut input = Cursor::new(b"rf_iSomething= 4;\n".to_vec());
		let mut output = Vec::new();
		TextMetaResaver.resave(&mut input, &mut output, &renames, None).unwrap();
		assert_eq!(String::from_utf8(output).unwrap(), "rf_iSomething= 4;\n");
	}
}
