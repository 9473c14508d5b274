//! Byte-for-byte passthrough for assets with no recognized reference format.

use std::io::{self, Read, Write};

use super::Resaver;
use crate::error::Result;
use crate::rename::RenameMap;

/// Copies its input to its output unchanged.
pub struct PlainCopy;

impl Resaver for PlainCopy {
	fn resave(
		&self,
		input: &mut dyn Read,
		output: &mut dyn Write,
		_renames: &RenameMap,
		_new_asset_fn: Option<&str>,
	) -> Result<()> {
		io::copy(input, output)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn copies_unchanged() {
		let mut input = Cursor::new(b"anything at all".to_vec());
		let mut output = Vec::new();
		PlainCopy
			.resave(&mut input, &mut output, &RenameMap::default(), None)
			.unwrap();
		assert_eq!(output, b"anything at all");
	}
}
