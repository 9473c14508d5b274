//! World info reference discovery: the quoted path on each recognized key
//! line (spec §4.7), mirroring [`crate::resave::nfo`] without the rewriting.

use std::collections::HashSet;
use std::io::Read;

use regex::Regex;

use super::Scanner;
use crate::error::Result;
use crate::resave::UTF8_BOM;

const KEYS: [&str; 4] = ["LOADING_SCREEN", "THUMBNAIL", "INTRO_CUTSCENE_WORLD", "NETRICSA"];

/// Checks the quoted path on every recognized key line against the target set.
pub struct NfoScanner;

impl Scanner for NfoScanner {
	fn references_any(&self, input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool> {
		let mut bytes = Vec::new();
		input.read_to_end(&mut bytes)?;
		let text = String::from_utf8_lossy(if bytes.starts_with(&UTF8_BOM) { &bytes[3..] } else { &bytes[..] });
		let quoted = Regex::new(r#""([^"]*)""#).expect("valid regex");

		for line in text.lines() {
			if let Some((key, value)) = line.split_once('=') {
				if KEYS.contains(&key.trim()) {
					if let Some(caps) = quoted.captures(value) {
						if targets.contains(&caps[1]) {
							return Ok(true);
						}
					}
				}
			}
		}
		Ok(false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn finds_targeted_keyed_path() {
		let mut targets = HashSet::new();
		targets.insert("Textures/Old.tex".to_string());

		let mut input = Cursor::new(b"THUMBNAIL= \"Textures/Old.tex\"\n".to_vec());
		assert!(NfoScanner.references_any(&mut input, &targets).unwrap());
	}
}
