//! Byte-stream utilities shared by every codec in this crate.
//!
//! These are the primitives the signed stream, wrecked stream, info strip,
//! and (in `seresave`) the binary meta parser are all built from: peeking a
//! fixed-size magic without consuming it, asserting a fixed value, and
//! reading/writing the length-prefixed strings used throughout the format.

use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::{Error, ErrorKind, Result};

/// Byte order used by a length/int32 read or write.
///
/// The signed and wrecked stream headers are always little-endian; the
/// binary meta parser (in `seresave`) is the only format-level reader that
/// flips this based on an in-file cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
	/// Least-significant byte first.
	Little,
	/// Most-significant byte first.
	Big,
}

impl Endian {
	/// Decode a 4-byte buffer into an `i32` according to this endianness.
	pub fn i32(self, bytes: [u8; 4]) -> i32 {
		match self {
			Endian::Little => i32::from_le_bytes(bytes),
			Endian::Big => i32::from_be_bytes(bytes),
		}
	}

	/// Decode a 4-byte buffer into a `u32` according to this endianness.
	pub fn u32(self, bytes: [u8; 4]) -> u32 {
		match self {
			Endian::Little => u32::from_le_bytes(bytes),
			Endian::Big => u32::from_be_bytes(bytes),
		}
	}

	/// Encode an `i32` into bytes according to this endianness.
	pub fn i32_bytes(self, value: i32) -> [u8; 4] {
		match self {
			Endian::Little => value.to_le_bytes(),
			Endian::Big => value.to_be_bytes(),
		}
	}

	/// Encode a `u32` into bytes according to this endianness.
	pub fn u32_bytes(self, value: u32) -> [u8; 4] {
		match self {
			Endian::Little => value.to_le_bytes(),
			Endian::Big => value.to_be_bytes(),
		}
	}
}

/// Peek at the next `N` bytes of a seekable reader without consuming them.
///
/// Used by the stream factory to sniff magic numbers. If fewer than `N`
/// bytes remain, returns `Ok(None)` and leaves the cursor untouched.
pub fn peek<const N: usize>(reader: &mut (impl Read + Seek)) -> Result<Option<[u8; N]>> {
	let start = reader.stream_position()?;
	let mut buf = [0u8; N];
	let result = match reader.read_exact(&mut buf) {
		Ok(()) => Ok(Some(buf)),
		Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
		Err(e) => Err(Error::from(e)),
	};
	reader.seek(SeekFrom::Start(start))?;
	result
}

/// Read a fixed-size magic and assert it matches `expected`.
pub fn assert_magic<const N: usize>(reader: &mut impl Read, expected: [u8; N]) -> Result<()> {
	let mut buf = [0u8; N];
	reader.read_exact(&mut buf)?;
	if buf != expected {
		return Err(ErrorKind::MalformedHeader.into());
	}
	Ok(())
}

/// Read a little-endian `i32`.
pub fn read_i32le(reader: &mut impl Read) -> Result<i32> {
	let mut buf = [0u8; 4];
	reader.read_exact(&mut buf)?;
	Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian `u32`.
pub fn read_u32le(reader: &mut impl Read) -> Result<u32> {
	let mut buf = [0u8; 4];
	reader.read_exact(&mut buf)?;
	Ok(u32::from_le_bytes(buf))
}

/// Write a little-endian `i32`.
pub fn write_i32le(writer: &mut impl Write, value: i32) -> Result<()> {
	writer.write_all(&value.to_le_bytes())?;
	Ok(())
}

/// Write a little-endian `u32`.
pub fn write_u32le(writer: &mut impl Write, value: u32) -> Result<()> {
	writer.write_all(&value.to_le_bytes())?;
	Ok(())
}

/// Read an int32 byte-length-prefixed UTF-8 string.
///
/// A length less than 1 denotes an empty string (spec: "length < 1 denotes
/// empty"), matching every text/binary format in this crate.
pub fn read_len_prefixed_string(reader: &mut impl Read, endian: Endian) -> Result<String> {
	let mut len_buf = [0u8; 4];
	reader.read_exact(&mut len_buf)?;
	let len = endian.i32(len_buf);
	if len < 1 {
		return Ok(String::new());
	}
	let mut buf = vec![0u8; len as usize];
	reader.read_exact(&mut buf)?;
	String::from_utf8(buf).map_err(|e| Error::with_message(ErrorKind::MalformedHeader, e.to_string()))
}

/// Write an int32 byte-length-prefixed UTF-8 string, in the given endianness.
pub fn write_len_prefixed_string(writer: &mut impl Write, endian: Endian, value: &str) -> Result<()> {
	let bytes = value.as_bytes();
	let len = bytes.len() as i32;
	writer.write_all(&endian.i32_bytes(len))?;
	writer.write_all(bytes)?;
	Ok(())
}

/// Skip `n` bytes by copying them to a sink (works for non-seekable readers too).
pub fn skip(reader: &mut impl Read, n: usize) -> Result<()> {
	let mut remaining = n;
	let mut buf = [0u8; 4096];
	while remaining > 0 {
		let take = remaining.min(buf.len());
		reader.read_exact(&mut buf[..take])?;
		remaining -= take;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn peek_does_not_consume() {
		let mut cur = Cursor::new(vec![1, 2, 3, 4, 5]);
		let peeked: Option<[u8; 3]> = peek(&mut cur).unwrap();
		assert_eq!(peeked, Some([1, 2, 3]));
		assert_eq!(cur.position(), 0);
	}

	#[test]
	fn peek_short_stream_is_none() {
		let mut cur = Cursor::new(vec![1, 2]);
		let peeked: Option<[u8; 8]> = peek(&mut cur).unwrap();
		assert_eq!(peeked, None);
		assert_eq!(cur.position(), 0);
	}

	#[test]
	fn len_prefixed_string_roundtrip() {
		let mut buf = Vec::new();
		write_len_prefixed_string(&mut buf, Endian::Little, "Content/Foo.tex").unwrap();
		let mut cur = Cursor::new(buf);
		let s = read_len_prefixed_string(&mut cur, Endian::Little).unwrap();
		assert_eq!(s, "Content/Foo.tex");
	}

	#[test]
	fn negative_length_is_empty_string() {
		let mut buf = Vec::new();
		buf.extend_from_slice(&(-1i32).to_le_bytes());
		let mut cur = Cursor::new(buf);
		let s = read_len_prefixed_string(&mut cur, Endian::Little).unwrap();
		assert_eq!(s, "");
	}

	#[test]
	fn big_endian_length_prefix() {
		let mut buf = Vec::new();
		write_len_prefixed_string(&mut buf, Endian::Big, "ab").unwrap();
		assert_eq!(&buf[..4], &[0, 0, 0, 2]);
		let mut cur = Cursor::new(buf);
		let s = read_len_prefixed_string(&mut cur, Endian::Big).unwrap();
		assert_eq!(s, "ab");
	}
}
