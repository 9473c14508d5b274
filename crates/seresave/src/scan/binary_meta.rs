//! Binary meta reference discovery: reads only far enough to enumerate
//! `EXTERNAL_FILES` (spec §4.7) — the type graph and object instances are
//! never touched, since nothing past `EXTERNAL_FILES` is needed to answer
//! "what does this file refer to".

use std::collections::HashSet;
use std::io::Read;

use super::Scanner;
use crate::error::Result;
use crate::meta::{self, MetaReader};

/// Reads the `EXTERNAL_FILES` path list, stopping at the first hit.
pub struct BinaryMetaScanner;

impl Scanner for BinaryMetaScanner {
	fn references_any(&self, input: &mut dyn Read, targets: &HashSet<String>) -> Result<bool> {
		let mut reader = MetaReader::new(input)?;
		let version = reader.version();

		if version > 9 {
			reader.begin_block(meta::MESSAGES)?;
			reader.read_string()?;
		}

		reader.begin_block(meta::INFO)?;
		reader.skip(if version > 7 { 20 } else { 16 })?;

		let count = reader.begin_list(meta::EXTERNAL_FILES)?;
		for _ in 0..count.max(0) {
			reader.skip(8)?;
			let path = reader.read_string()?;
			if targets.contains(&path) {
				return Ok(true);
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
	fn reads_external_file_paths() {
		let mut buf = Vec::new();
		buf.extend_from_slice(&meta::MAGIC.to_le_bytes());
		buf.extend_from_slice(&meta::COOKIE_LITTLE.to_le_bytes());
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(b"INFO");
		buf.extend_from_slice(&[0u8; 16]);
		buf.extend_from_slice(b"RFIL");
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(&[0u8; 8]);
		buf.extend_from_slice(&7i32.to_le_bytes());
		buf.extend_from_slice(b"Foo.tex");

		let mut targets = HashSet::new();
		targets.insert("Foo.tex".to_string());

		let mut input = Cursor::new(buf);
		assert!(BinaryMetaScanner.references_any(&mut input, &targets).unwrap());
	}

	#[test]
	fn finds_no_reference_when_path_not_targeted() {
		let mut buf = Vec::new();
		buf.extend_from_slice(&meta::MAGIC.to_le_bytes());
		buf.extend_from_slice(&meta::COOKIE_LITTLE.to_le_bytes());
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(b"INFO");
		buf.extend_from_slice(&[0u8; 16]);
		buf.extend_from_slice(b"RFIL");
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(&[0u8; 8]);
		buf.extend_from_slice(&7i32.to_le_bytes());
		buf.extend_from_slice(b"Foo.tex");

		let mut targets = HashSet::new();
		targets.insert("Bar.tex".to_string());

		let mut input = Cursor::new(buf);
		assert!(!BinaryMetaScanner.references_any(&mut input, &targets).unwrap());
	}
}
