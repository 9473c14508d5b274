//! Info-stream strip: the `INFSTRM1` wrapper (spec §4.3, §6).
//!
//! This is the thinnest wrapper in the factory chain: it prepends one
//! length-prefixed string ahead of the inner payload and otherwise passes
//! bytes through untouched.

use std::io::{Read, Write};

use tracing::trace;

use crate::{
	bytes::{write_len_prefixed_string, Endian},
	error::{ErrorKind, Result},
};

/// `INFSTRM1` magic, 8 ASCII bytes.
pub const MAGIC: &[u8; 8] = b"INFSTRM1";

/// Consume the `INFSTRM1` magic and its single length-prefixed string,
/// advancing `reader` to the start of the inner payload.
///
/// Returns the stripped string, which callers typically discard (spec
/// §4.3 only requires advancing past it).
pub fn strip(reader: &mut impl Read) -> Result<String> {
	let mut magic_buf = [0u8; 8];
	reader.read_exact(&mut magic_buf)?;
	if &magic_buf != MAGIC {
		return Err(ErrorKind::MalformedHeader.into());
	}
	let info = crate::bytes::read_len_prefixed_string(reader, Endian::Little)?;
	trace!(%info, "stripped info stream wrapper");
	Ok(info)
}

/// Write an `INFSTRM1` wrapper around whatever is written next.
///
/// `info` is the single string carried by the wrapper; this crate always
/// writes an empty one, matching the signed/wrecked writers' convention of
/// filling optional fields with their empty/zero value.
pub fn write_wrapper(writer: &mut impl Write, info: &str) -> Result<()> {
	writer.write_all(MAGIC)?;
	write_len_prefixed_string(writer, Endian::Little, info)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn strip_roundtrip() {
		let mut buf = Vec::new();
		write_wrapper(&mut buf, "hello").unwrap();
		buf.extend_from_slice(b"payload");

		let mut cur = Cursor::new(buf);
		let info = strip(&mut cur).unwrap();
		assert_eq!(info, "hello");

		let mut rest = Vec::new();
		cur.read_to_end(&mut rest).unwrap();
		assert_eq!(rest, b"payload");
	}

	#[test]
	fn wrong_magic_is_malformed() {
		let mut cur = Cursor::new(b"NOTREALLY".to_vec());
		assert!(strip(&mut cur).is_err());
	}
}
