//! Positional reader over an unwrapped binary meta payload (spec §4.4).

use std::io::Read;

use sesstream::bytes::Endian;
use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};

use super::{BlockMagic, COOKIE_BIG, COOKIE_LITTLE, MAGIC};

/// Reads the binary meta header and exposes the block/list/string/skip
/// primitives every block in the format is built from.
///
/// All int32 reads respect the endianness cookie read from the header;
/// 4-byte block magics are always read as literal bytes.
pub struct MetaReader<R: Read> {
	inner: R,
	endian: Endian,
	version: i32,
	annotation: String,
}

impl<R: Read> MetaReader<R> {
	/// Read the `CTSESMETA` header: magic, endianness cookie, version, and
	/// (version > 1) an ignored annotation string.
	pub fn new(mut inner: R) -> Result<Self> {
		let mut magic_buf = [0u8; 8];
		inner.read_exact(&mut magic_buf)?;
		if u64::from_le_bytes(magic_buf) != MAGIC {
			return Err(ErrorKind::MalformedHeader.into());
		}

		let mut cookie_buf = [0u8; 4];
		inner.read_exact(&mut cookie_buf)?;
		let cookie_raw = u32::from_le_bytes(cookie_buf);
		let endian = if cookie_raw == COOKIE_LITTLE {
			Endian::Little
		} else if cookie_raw == COOKIE_BIG {
			Endian::Big
		} else {
			return Err(ErrorKind::UnexpectedEndiannessCookie.into());
		};

		let mut version_buf = [0u8; 4];
		inner.read_exact(&mut version_buf)?;
		let version = endian.i32(version_buf);

		let annotation = if version > 1 {
			read_len_prefixed_string(&mut inner, endian)?
		} else {
			String::new()
		};

		debug!(version, ?endian, "read binary meta header");

		Ok(Self {
			inner,
			endian,
			version,
			annotation,
		})
	}

	/// File format version declared in the header.
	pub fn version(&self) -> i32 {
		self.version
	}

	/// Endianness the header declared; every subsequent int32 read in this
	/// stream flips on this.
	pub fn endian(&self) -> Endian {
		self.endian
	}

	/// The (normally unused) annotation string present when `version > 1`.
	pub fn annotation(&self) -> &str {
		&self.annotation
	}

	/// Assert that the next 4 bytes are the given block magic.
	pub fn begin_block(&mut self, magic: BlockMagic) -> Result<()> {
		let mut buf = [0u8; 4];
		self.inner.read_exact(&mut buf)?;
		if buf != magic {
			return Err(ErrorKind::MalformedHeader.into());
		}
		trace!(magic = %String::from_utf8_lossy(&magic), "entered block");
		Ok(())
	}

	/// Assert a block magic, then read the list length that follows it.
	pub fn begin_list(&mut self, magic: BlockMagic) -> Result<i32> {
		self.begin_block(magic)?;
		self.read_i32()
	}

	/// Read an endian-aware `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		let mut buf = [0u8; 4];
		self.inner.read_exact(&mut buf)?;
		Ok(self.endian.i32(buf))
	}

	/// Read an endian-aware `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		let mut buf = [0u8; 4];
		self.inner.read_exact(&mut buf)?;
		Ok(self.endian.u32(buf))
	}

	/// Read an int32 byte-length-prefixed UTF-8 string (length < 1 ⇒ empty).
	pub fn read_string(&mut self) -> Result<String> {
		read_len_prefixed_string(&mut self.inner, self.endian)
	}

	/// Advance `n` bytes without interpreting them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let mut remaining = n;
		let mut buf = [0u8; 4096];
		while remaining > 0 {
			let take = remaining.min(buf.len());
			self.inner.read_exact(&mut buf[..take])?;
			remaining -= take;
		}
		Ok(())
	}

	/// Access to the underlying reader, for blocks that read fixed byte
	/// spans directly (e.g. texture blobs).
	pub fn inner_mut(&mut self) -> &mut R {
		&mut self.inner
	}
}

fn read_len_prefixed_string(reader: &mut impl Read, endian: Endian) -> Result<String> {
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

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn header_bytes(version: i32, endian: Endian) -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(&MAGIC.to_le_bytes());
		let cookie = match endian {
			Endian::Little => COOKIE_LITTLE,
			Endian::Big => COOKIE_BIG,
		};
		buf.extend_from_slice(&cookie.to_le_bytes());
		buf.extend_from_slice(&endian.i32_bytes(version));
		buf
	}

	#[test]
	fn reads_little_endian_header() {
		let buf = header_bytes(10, Endian::Little);
		let reader = MetaReader::new(Cursor::new(buf)).unwrap();
		assert_eq!(reader.version(), 10);
		assert_eq!(reader.endian(), Endian::Little);
	}

	#[test]
	fn reads_big_endian_header() {
		let buf = header_bytes(10, Endian::Big);
		let reader = MetaReader::new(Cursor::new(buf)).unwrap();
		assert_eq!(reader.version(), 10);
		assert_eq!(reader.endian(), Endian::Big);
	}

	#[test]
	fn version_above_one_reads_annotation() {
		let mut buf = header_bytes(2, Endian::Little);
		buf.extend_from_slice(&4i32.to_le_bytes());
		buf.extend_from_slice(b"note");
		let reader = MetaReader::new(Cursor::new(buf)).unwrap();
		assert_eq!(reader.annotation(), "note");
	}

	#[test]
	fn block_and_list() {
		let mut buf = header_bytes(1, Endian::Little);
		buf.extend_from_slice(b"RFIL");
		buf.extend_from_slice(&3i32.to_le_bytes());
		let mut reader = MetaReader::new(Cursor::new(buf)).unwrap();
		assert_eq!(reader.begin_list(super::super::EXTERNAL_FILES).unwrap(), 3);
	}

	#[test]
	fn wrong_magic_is_malformed() {
		let reader = MetaReader::new(Cursor::new(b"NOTMETA!".to_vec()));
		assert!(reader.is_err());
	}
}
