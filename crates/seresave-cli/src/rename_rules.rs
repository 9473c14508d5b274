use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use seresave::ResaveFile;

/// Parse a rename-rules file: one `old\tnew` pair per line, blank lines and
/// `#`-prefixed comments ignored (spec's "rename-rule dialog" stand-in).
pub fn parse(path: &Path, delete_old: bool) -> Result<Vec<ResaveFile>> {
	let text = fs::read_to_string(path).into_diagnostic()?;
	let mut files = Vec::new();
	for (line_no, line) in text.lines().enumerate() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		let (old, new) = line.split_once('\t').ok_or_else(|| {
			miette::miette!("rename rules line {}: expected `old\\tnew`, got {line:?}", line_no + 1)
		})?;
		files.push(ResaveFile::new(old, new, delete_old));
	}
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_tab_separated_pairs() {
		let path = std::env::temp_dir().join(format!(
			"seresave-rename-rules-test-{:?}",
			std::thread::current().id()
		));
		fs::write(&path, b"Old.tex\tNew.tex\n# a comment\n\nOld2.tex\tNew2.tex\n").unwrap();

		let parsed = parse(&path, false).unwrap();
		assert_eq!(parsed.len(), 2);
		assert_eq!(parsed[0].old_path, "Old.tex");
		assert_eq!(parsed[1].new_path, "New2.tex");

		fs::remove_file(&path).ok();
	}

	#[test]
	fn rejects_malformed_line() {
		let path = std::env::temp_dir().join(format!(
			"seresave-rename-rules-bad-test-{:?}",
			std::thread::current().id()
		));
		fs::write(&path, b"NotATabSeparatedLine\n").unwrap();

		assert!(parse(&path, false).is_err());

		fs::remove_file(&path).ok();
	}
}
