//! Signed stream codec: the `SIG2` block-oriented wrapper (spec §4.1, §6).
//!
//! A [`SignedReader`] and [`SignedWriter`] are each single-direction: the
//! reader never writes, the writer never seeks. Digest/signature
//! verification on read is optional and this implementation doesn't do it
//! (spec Non-goals: "No signature verification on read").

use std::io::{Read, Seek, SeekFrom, Write};

use tracing::{debug, trace};

use crate::{
	bytes::{read_i32le, write_i32le, Endian},
	error::{Error, ErrorKind, Result},
	signer::{HashMethod, PssSigner},
};

/// `SIG2` magic, little-endian `u32`.
pub const MAGIC: u32 = 0x5349_4732;

/// Latest signed-stream header version this crate understands.
pub const LATEST_VERSION: i32 = 5;

/// Fixed key identifier string the writer embeds (spec §6).
pub const WRITE_KEY_IDENTIFIER: &str = "Signkey.EditorSignature";

/// Fixed block size used when writing (spec §4.1 write contract).
pub const WRITE_BLOCK_SIZE: i32 = 0x10000;

/// Fixed signature size used when writing.
pub const WRITE_SIGNATURE_SIZE: i32 = 0x100;

/// Nonce XOR mix constant applied to the block index before each
/// per-block signature (spec §4.1: `nonce XOR (curBlock + 0x0B1B)`).
const BLOCK_NONCE_MIX: i32 = 0x0B1B;

fn clamp(value: i32, max: i32) -> i32 {
	value.clamp(0, max)
}

#[derive(Clone, Debug)]
struct Header {
	version: i32,
	block_size: i32,
	hash_method_tag: i32,
	digest_size: i32,
	nonce: i32,
	signature_size: i32,
}

fn read_header(reader: &mut impl Read) -> Result<Header> {
	let mut magic_buf = [0u8; 4];
	reader.read_exact(&mut magic_buf)?;
	if u32::from_le_bytes(magic_buf) != MAGIC {
		return Err(ErrorKind::MalformedHeader.into());
	}

	let version = read_i32le(reader)?;
	if !(1..=LATEST_VERSION).contains(&version) {
		return Err(ErrorKind::MalformedHeader.into());
	}
	let block_size = clamp(read_i32le(reader)?, 0x80000);
	let hash_method_tag = read_i32le(reader)?;
	let digest_size = clamp(read_i32le(reader)?, 0x1000);
	let nonce = read_i32le(reader)?;

	if version > 1 {
		let _extra = read_i32le(reader)?;
	}
	if version > 2 {
		let _extra = read_i32le(reader)?;
	}
	if version > 4 {
		let _reserved = crate::bytes::read_len_prefixed_string(reader, Endian::Little)?;
	}

	let signature_size = read_i32le(reader)?;
	if signature_size > 0 {
		let _key_identifier = crate::bytes::read_len_prefixed_string(reader, Endian::Little)?;
	}

	// header signature material: signatureSize + digestSize bytes, unverified.
	let reserved = (signature_size + digest_size).max(0) as usize;
	crate::bytes::skip(reader, reserved)?;

	debug!(version, block_size, hash_method_tag, digest_size, signature_size, "read signed stream header");

	Ok(Header {
		version,
		block_size,
		hash_method_tag,
		digest_size,
		nonce,
		signature_size,
	})
}

/// Read-only view over a `SIG2`-wrapped stream.
pub struct SignedReader<R: Read + Seek> {
	inner: R,
	header: Header,
	data_start: u64,
	stride: u64,
	block_count: u64,
	logical_length: u64,
	pos: u64,
	buffer: Vec<u8>,
	loaded_block: Option<u64>,
}

impl<R: Read + Seek> SignedReader<R> {
	/// Open a signed stream for reading. `inner` must be positioned at the
	/// start of the `SIG2` magic.
	pub fn new(mut inner: R) -> Result<Self> {
		let header = read_header(&mut inner)?;
		let data_start = inner.stream_position()?;

		let base_len = {
			let cur = inner.stream_position()?;
			let end = inner.seek(SeekFrom::End(0))?;
			inner.seek(SeekFrom::Start(cur))?;
			end
		};

		let stride = header.block_size as u64 + header.digest_size as u64 + header.signature_size as u64;
		let data_region = base_len.saturating_sub(data_start);
		let block_count = if stride == 0 {
			0
		} else {
			data_region.div_ceil(stride)
		};
		let trailer_total = (header.digest_size as u64 + header.signature_size as u64) * block_count;
		let logical_length = data_region.saturating_sub(trailer_total);

		debug!(data_start, base_len, stride, block_count, logical_length, "signed stream opened for read");

		Ok(Self {
			inner,
			header,
			data_start,
			stride,
			block_count,
			logical_length,
			pos: 0,
			buffer: Vec::new(),
			loaded_block: None,
		})
	}

	/// Hash method declared by the header, if recognized.
	pub fn hash_method(&self) -> Option<HashMethod> {
		HashMethod::from_header_tag(self.header.hash_method_tag)
	}

	/// Logical (payload-only) length of the stream.
	pub fn len(&self) -> u64 {
		self.logical_length
	}

	/// Whether the stream is empty.
	pub fn is_empty(&self) -> bool {
		self.logical_length == 0
	}

	fn payload_len_of_block(&self, block_index: u64) -> usize {
		if self.header.block_size == 0 {
			return 0;
		}
		let block_size = self.header.block_size as u64;
		if block_index + 1 < self.block_count {
			block_size as usize
		} else {
			let consumed_before = block_index * block_size;
			self.logical_length.saturating_sub(consumed_before) as usize
		}
	}

	fn load_block(&mut self, block_index: u64) -> Result<()> {
		if self.loaded_block == Some(block_index) {
			return Ok(());
		}
		if block_index >= self.block_count {
			self.buffer.clear();
			self.loaded_block = Some(block_index);
			return Ok(());
		}

		let payload_len = self.payload_len_of_block(block_index);
		let offset = self.data_start + self.stride * block_index;
		self.inner.seek(SeekFrom::Start(offset))?;

		let mut buf = vec![0u8; payload_len];
		self.inner.read_exact(&mut buf).map_err(|e| {
			if e.kind() == std::io::ErrorKind::UnexpectedEof {
				Error::from(ErrorKind::Truncated)
			} else {
				Error::from(e)
			}
		})?;
		trace!(block_index, payload_len, "loaded signed stream block");

		self.buffer = buf;
		self.loaded_block = Some(block_index);
		Ok(())
	}
}

impl<R: Read + Seek> Read for SignedReader<R> {
	fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
		if self.pos >= self.logical_length || out.is_empty() {
			return Ok(0);
		}

		let block_size = self.header.block_size.max(1) as u64;
		let block_index = self.pos / block_size;
		let in_block_offset = (self.pos % block_size) as usize;

		self.load_block(block_index)
			.map_err(|e| std::io::Error::other(e.to_string()))?;

		if in_block_offset >= self.buffer.len() {
			return Ok(0);
		}

		let available = self.buffer.len() - in_block_offset;
		let take = available.min(out.len());
		out[..take].copy_from_slice(&self.buffer[in_block_offset..in_block_offset + take]);
		self.pos += take as u64;
		Ok(take)
	}
}

impl<R: Read + Seek> Seek for SignedReader<R> {
	fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
		let new_pos = match pos {
			SeekFrom::Start(p) => p as i64,
			SeekFrom::End(p) => self.logical_length as i64 + p,
			SeekFrom::Current(p) => self.pos as i64 + p,
		};
		if new_pos < 0 {
			return Err(std::io::Error::other("seek to negative position"));
		}
		self.pos = new_pos as u64;
		Ok(self.pos)
	}
}

/// Write-only `SIG2` stream wrapper.
pub struct SignedWriter<W: Write> {
	inner: Option<W>,
	signer: PssSigner,
	nonce: i32,
	buffer: Vec<u8>,
	cur_block: i32,
}

impl<W: Write> SignedWriter<W> {
	/// Start a new signed stream, writing the header immediately.
	///
	/// `version` is the profile's signed-stream version (spec §3: 4 or 5);
	/// all other header fields are fixed per the write contract.
	pub fn new(mut inner: W, version: i32, key_der: &[u8]) -> Result<Self> {
		let signer = PssSigner::from_pkcs1_der(key_der)?;
		let nonce: i32 = rand::random();

		let mut header_bytes = Vec::new();
		header_bytes.extend_from_slice(&MAGIC.to_le_bytes());
		header_bytes.extend_from_slice(&version.to_le_bytes());
		header_bytes.extend_from_slice(&WRITE_BLOCK_SIZE.to_le_bytes());
		header_bytes.extend_from_slice(&HashMethod::Sha1.header_tag().to_le_bytes());
		header_bytes.extend_from_slice(&0i32.to_le_bytes()); // digestSize = 0
		header_bytes.extend_from_slice(&nonce.to_le_bytes());
		if version > 1 {
			header_bytes.extend_from_slice(&0i32.to_le_bytes());
		}
		if version > 2 {
			header_bytes.extend_from_slice(&0i32.to_le_bytes());
		}
		if version > 4 {
			crate::bytes::write_len_prefixed_string(&mut header_bytes, Endian::Little, "")?;
		}
		header_bytes.extend_from_slice(&WRITE_SIGNATURE_SIZE.to_le_bytes());

		let header_signature = signer.sign(HashMethod::Sha1, &header_bytes);
		debug_assert_eq!(header_signature.len(), WRITE_SIGNATURE_SIZE as usize);

		inner.write_all(&header_bytes)?;
		crate::bytes::write_len_prefixed_string(&mut inner, Endian::Little, WRITE_KEY_IDENTIFIER)?;
		inner.write_all(&header_signature)?;

		debug!(version, nonce, "wrote signed stream header");

		Ok(Self {
			inner: Some(inner),
			signer,
			nonce,
			buffer: Vec::with_capacity(WRITE_BLOCK_SIZE as usize),
			cur_block: 0,
		})
	}

	fn flush_block(&mut self) -> Result<()> {
		if self.buffer.is_empty() {
			return Ok(());
		}
		let Some(inner) = self.inner.as_mut() else {
			return Ok(());
		};

		let mix = self.nonce ^ (self.cur_block.wrapping_add(BLOCK_NONCE_MIX));
		let mut signing_input = Vec::with_capacity(4 + self.buffer.len());
		signing_input.extend_from_slice(&mix.to_le_bytes());
		signing_input.extend_from_slice(&self.buffer);

		let signature = self.signer.sign(HashMethod::Sha1, &signing_input);

		inner.write_all(&self.buffer)?;
		inner.write_all(&signature)?;
		trace!(block = self.cur_block, len = self.buffer.len(), "flushed signed stream block");

		self.buffer.clear();
		self.cur_block += 1;
		Ok(())
	}

	/// Flush any remaining buffered bytes as a final (possibly short) block
	/// and return the inner writer.
	pub fn finish(mut self) -> Result<W> {
		self.flush_block()?;
		Ok(self.inner.take().expect("inner writer taken twice"))
	}
}

impl<W: Write> Write for SignedWriter<W> {
	fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
		let mut written = 0;
		let mut data = data;
		while !data.is_empty() {
			let space = WRITE_BLOCK_SIZE as usize - self.buffer.len();
			let take = space.min(data.len());
			self.buffer.extend_from_slice(&data[..take]);
			data = &data[take..];
			written += take;
			if self.buffer.len() == WRITE_BLOCK_SIZE as usize {
				self.flush_block()
					.map_err(|e| std::io::Error::other(e.to_string()))?;
			}
		}
		Ok(written)
	}

	fn flush(&mut self) -> std::io::Result<()> {
		match self.inner.as_mut() {
			Some(inner) => inner.flush(),
			None => Ok(()),
		}
	}
}

impl<W: Write> Drop for SignedWriter<W> {
	fn drop(&mut self) {
		if self.inner.is_some() {
			let _ = self.flush_block();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::keys::SSHD_EDITOR_KEY_DER;
	use std::io::Cursor;

	#[test]
	fn write_then_read_roundtrip() {
		let payload = vec![7u8; (WRITE_BLOCK_SIZE as usize) * 2 + 123];

		let mut out = Vec::new();
		{
			let writer = SignedWriter::new(&mut out, 4, &SSHD_EDITOR_KEY_DER).unwrap();
			let mut writer = writer;
			writer.write_all(&payload).unwrap();
			writer.finish().unwrap();
		}

		let mut cur = Cursor::new(out);
		let mut reader = SignedReader::new(&mut cur).unwrap();
		assert_eq!(reader.len(), payload.len() as u64);

		let mut read_back = Vec::new();
		reader.read_to_end(&mut read_back).unwrap();
		assert_eq!(read_back, payload);
	}

	#[test]
	fn seek_within_block() {
		let payload: Vec<u8> = (0..300u32).map(|n| (n % 251) as u8).collect();
		let mut out = Vec::new();
		{
			let mut writer = SignedWriter::new(&mut out, 4, &SSHD_EDITOR_KEY_DER).unwrap();
			writer.write_all(&payload).unwrap();
			writer.finish().unwrap();
		}

		let mut cur = Cursor::new(out);
		let mut reader = SignedReader::new(&mut cur).unwrap();
		reader.seek(SeekFrom::Start(100)).unwrap();
		let mut buf = [0u8; 50];
		reader.read_exact(&mut buf).unwrap();
		assert_eq!(&buf[..], &payload[100..150]);
	}
}
