//! Text meta reference discovery: the `@"path"`/`@'path'` literals on each
//! line (spec §4.7), mirroring [`crate::resave::text_meta`] without the
//! rewriting.

use std::collections::HashSet;
use std::io::Read;

use regex::Regex;

use super::Scanner;
use crate::error::Result;

/// Checks every `@"path"` literal found in the file against the target set.
pub struct TextMetaScanner;

impl Scanner for TextMetaScanner {
	fn references_any(&self, input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool> {
		let mut text = String::new();
		input.read_to_string(&mut text)?;
		let path_literal = Regex::new(r#"@(["'])([^"']*)\1"#).expect("valid regex");
		Ok(path_literal.captures_iter(&text).any(|caps| targets.contains(&caps[2])))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn finds_targeted_path_literal() {
		let mut targets = HashSet::new();
		targets.insert("Textures/Old.tex".to_string());

		let mut input = Cursor::new(b"rf_strFile= @\"Textures/Old.tex\";\n".to_vec());
		assert!(TextMetaScanner.references_any(&mut input, &targets).unwrap());
	}

	#[test]
	fn misses_untargeted_path_literal() {
		let mut targets = HashSet::new();
		targets.insert("Textures/Other.tex".to_string());

		let mut input = Cursor::new(b"rf_strFile= @\"Textures/Old.tex\";\n".to_vec());
		assert!(!TextMetaScanner.references_any(&mut input, &targets).unwrap());
	}
}
