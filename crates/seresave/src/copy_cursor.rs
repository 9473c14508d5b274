//! Streaming two-cursor copier (spec §4.6, Design Notes §9 "Streaming
//! rewrite"): tees everything read from a non-seekable input into a side
//! buffer, so a resaver can later flush it verbatim or splice a replacement
//! for the most recently read span, without buffering the whole file.

use std::io::{self, Read, Write};

/// Wraps a `Read` and records every byte it yields.
pub struct CopyCursor<'r> {
	inner: &'r mut dyn Read,
	pending: Vec<u8>,
}

impl<'r> CopyCursor<'r> {
	/// Wrap `inner`, starting with an empty pending buffer.
	pub fn new(inner: &'r mut dyn Read) -> Self {
		Self {
			inner,
			pending: Vec::new(),
		}
	}

	/// Write everything read since the last flush/replace to `out`, then
	/// clear the buffer. Used when a span turned out not to need rewriting.
	pub fn flush_through(&mut self, out: &mut dyn Write) -> io::Result<()> {
		out.write_all(&self.pending)?;
		self.pending.clear();
		Ok(())
	}

	/// Write everything buffered except the last `old_len` bytes (the field
	/// about to be replaced), then `new_bytes` in its place, then clear the
	/// buffer. `lastFlushPos` effectively advances by `old_len`, matching
	/// the on-disk cursor regardless of `new_bytes`'s length (spec §4.6).
	pub fn replace_last(&mut self, out: &mut dyn Write, old_len: usize, new_bytes: &[u8]) -> io::Result<()> {
		let split = self.pending.len().saturating_sub(old_len);
		out.write_all(&self.pending[..split])?;
		out.write_all(new_bytes)?;
		self.pending.clear();
		Ok(())
	}
}

impl Read for CopyCursor<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let n = self.inner.read(buf)?;
		self.pending.extend_from_slice(&buf[..n]);
		Ok(n)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn flush_through_passes_bytes_unchanged() {
		let mut src = Cursor::new(b"hello world".to_vec());
		let mut out = Vec::new();
		{
			let mut cursor = CopyCursor::new(&mut src);
			let mut buf = [0u8; 5];
			cursor.read_exact(&mut buf).unwrap();
			assert_eq!(&buf, b"hello");
			cursor.flush_through(&mut out).unwrap();
		}
		assert_eq!(out, b"hello");
	}

	#[test]
	fn replace_last_splices_in_new_bytes() {
		let mut src = Cursor::new(b"AAAABBBB".to_vec());
		let mut out = Vec::new();
		{
			let mut cursor = CopyCursor::new(&mut src);
			let mut buf = [0u8; 8];
			cursor.read_exact(&mut buf).unwrap();
			cursor.replace_last(&mut out, 4, b"ZZ").unwrap();
		}
		assert_eq!(out, b"AAAAZZ");
	}
}
