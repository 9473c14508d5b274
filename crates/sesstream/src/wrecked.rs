//! Wrecked stream codec: the `WRKSTRM1` wrapper whose block sizes come from
//! an obfuscated PRNG (spec §4.2, §6).

use std::io::{Read, Seek, SeekFrom, Write};

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};

/// Wrecked-stream magic, little-endian `u32`.
pub const MAGIC: u32 = 0x6C72_0D60;

/// Multiplier used by the second PRNG register.
const NUM2_MULTIPLIER: u32 = 1_220_703_125;

/// Base block-size offset baked into both the generator and the pack/unpack
/// functions (spec §4.2).
const BLOCK_SIZE_OFFSET: u32 = 5_242_880;

/// Multiplier used when packing/unpacking the between-block size.
const PACK_MULTIPLIER: u32 = 1512;

/// Two-register linear-congruential-style generator that derives each
/// block's size (spec §4.2).
#[derive(Clone, Copy, Debug)]
pub struct BlockSizeGenerator {
	num1: u32,
	num2: u32,
}

impl Default for BlockSizeGenerator {
	fn default() -> Self {
		Self {
			num1: 0x1234_5678,
			num2: 0x8765_4321,
		}
	}
}

impl BlockSizeGenerator {
	/// New generator with the fixed initial register values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Advance both registers one tick and return the mixed value
	/// `NUM1 XOR NUM2` that is both written to disk and fed into the block
	/// size formula.
	pub fn tick(&mut self) -> u32 {
		self.num1 = (self.num1 >> 1) | (((self.num1 ^ (self.num1.wrapping_mul(8))) & 0xFFFF_FFF8) << 28);
		self.num2 = self.num2.wrapping_mul(NUM2_MULTIPLIER);
		self.num1 ^ self.num2
	}

	/// Advance and produce the next block size, along with the raw tick mix
	/// value that's persisted alongside it.
	pub fn next_block_size(&mut self) -> (u32, i32) {
		let mixed = self.tick();
		(mixed, block_size_from_mix(mixed))
	}
}

/// Derive a block size from a PRNG mix value.
///
/// Spec §4.2: "truncated to int32... implementations must perform the
/// arithmetic in IEEE-754 `float` before truncation" — every intermediate
/// value here is `f32`, not `f64`.
fn block_size_from_mix(mixed: u32) -> i32 {
	let normalized = mixed as f32 * 2.3283064e-10_f32;
	let scaled = normalized * 1_048_576.0_f32 + 1_048_576.0_f32;
	(scaled + 5_242_880.0_f32) as i32
}

/// Pack a block size for on-disk storage between blocks.
///
/// `pack(size) = rotate_left(1512 * size + 662700032, 4)`, which — since
/// `662700032 ≡ -(1512 * 5242880) (mod 2^32)` — is equivalent to rotating
/// `1512 * (size - 5242880)`. We compute it this way directly; see
/// [`unpack`] for the inverse.
pub fn pack(size: u32) -> u32 {
	let delta = size.wrapping_sub(BLOCK_SIZE_OFFSET).wrapping_mul(PACK_MULTIPLIER);
	delta.rotate_left(4)
}

/// Unpack a block size stored between blocks.
///
/// Inverts [`pack`] exactly: undoing the rotation recovers
/// `1512 * (size - 5242880)`, which divides evenly back to `size -
/// 5242880` for every value the generator produces.
pub fn unpack(packed: u32) -> u32 {
	let delta = packed.rotate_right(4);
	(delta / PACK_MULTIPLIER).wrapping_add(BLOCK_SIZE_OFFSET)
}

#[derive(Clone, Copy, Debug)]
struct BlockSpan {
	offset: u64,
	size: u64,
}

/// Read-only view over a `WRKSTRM1`-wrapped stream.
pub struct WreckedReader<R: Read + Seek> {
	inner: R,
	blocks: Vec<BlockSpan>,
	logical_length: u64,
	pos: u64,
	buffer: Vec<u8>,
	loaded_block: Option<usize>,
}

impl<R: Read + Seek> WreckedReader<R> {
	/// Open a wrecked stream for reading. `inner` must be positioned at the
	/// start of the `WRKSTRM1` magic.
	pub fn new(mut inner: R) -> Result<Self> {
		let mut magic_buf = [0u8; 4];
		inner.read_exact(&mut magic_buf)?;
		if u32::from_le_bytes(magic_buf) != MAGIC {
			return Err(ErrorKind::MalformedHeader.into());
		}

		let total_len = {
			let cur = inner.stream_position()?;
			let end = inner.seek(SeekFrom::End(0))?;
			inner.seek(SeekFrom::Start(cur))?;
			end
		};

		let mut blocks = Vec::new();
		let mut logical_length = 0u64;
		loop {
			let pos = inner.stream_position()?;
			if total_len.saturating_sub(pos) < 8 {
				break;
			}

			let mut tick_buf = [0u8; 4];
			inner.read_exact(&mut tick_buf)?;
			let mut size_buf = [0u8; 4];
			inner.read_exact(&mut size_buf)?;
			let packed = u32::from_le_bytes(size_buf);
			let declared_size = unpack(packed) as u64;

			let payload_start = inner.stream_position()?;
			let remaining = total_len.saturating_sub(payload_start);
			let actual_size = declared_size.min(remaining);

			trace!(payload_start, declared_size, actual_size, "indexed wrecked stream block");
			blocks.push(BlockSpan {
				offset: payload_start,
				size: actual_size,
			});
			logical_length += actual_size;

			inner.seek(SeekFrom::Start(payload_start + actual_size))?;
			if actual_size == remaining {
				break;
			}
		}

		debug!(blocks = blocks.len(), logical_length, "indexed wrecked stream");

		Ok(Self {
			inner,
			blocks,
			logical_length,
			pos: 0,
			buffer: Vec::new(),
			loaded_block: None,
		})
	}

	/// Logical length of the decoded stream.
	pub fn len(&self) -> u64 {
		self.logical_length
	}

	/// Whether the stream is empty.
	pub fn is_empty(&self) -> bool {
		self.logical_length == 0
	}

	fn locate(&self, pos: u64) -> Option<(usize, u64)> {
		let mut base = 0u64;
		for (index, block) in self.blocks.iter().enumerate() {
			if pos < base + block.size {
				return Some((index, pos - base));
			}
			base += block.size;
		}
		None
	}

	fn load_block(&mut self, index: usize) -> Result<()> {
		if self.loaded_block == Some(index) {
			return Ok(());
		}
		let block = self.blocks[index];
		self.inner.seek(SeekFrom::Start(block.offset))?;
		let mut buf = vec![0u8; block.size as usize];
		self.inner.read_exact(&mut buf).map_err(|e| {
			if e.kind() == std::io::ErrorKind::UnexpectedEof {
				Error::from(ErrorKind::Truncated)
			} else {
				Error::from(e)
			}
		})?;
		self.buffer = buf;
		self.loaded_block = Some(index);
		Ok(())
	}
}

impl<R: Read + Seek> Read for WreckedReader<R> {
	fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
		if self.pos >= self.logical_length || out.is_empty() {
			return Ok(0);
		}
		let Some((index, in_block_offset)) = self.locate(self.pos) else {
			return Ok(0);
		};
		self.load_block(index)
			.map_err(|e| std::io::Error::other(e.to_string()))?;

		let in_block_offset = in_block_offset as usize;
		let available = self.buffer.len() - in_block_offset;
		let take = available.min(out.len());
		out[..take].copy_from_slice(&self.buffer[in_block_offset..in_block_offset + take]);
		self.pos += take as u64;
		Ok(take)
	}
}

impl<R: Read + Seek> Seek for WreckedReader<R> {
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

/// Write-only `WRKSTRM1` stream wrapper.
pub struct WreckedWriter<W: Write> {
	inner: Option<W>,
	generator: BlockSizeGenerator,
	buffer: Vec<u8>,
	target: usize,
}

impl<W: Write> WreckedWriter<W> {
	/// Start a new wrecked stream, writing the magic immediately.
	pub fn new(mut inner: W) -> Result<Self> {
		inner.write_all(&MAGIC.to_le_bytes())?;
		let mut generator = BlockSizeGenerator::new();
		let target = Self::start_block(&mut inner, &mut generator)?;
		Ok(Self {
			inner: Some(inner),
			generator,
			buffer: Vec::new(),
			target,
		})
	}

	fn start_block(inner: &mut W, generator: &mut BlockSizeGenerator) -> Result<usize> {
		let (tick, size) = generator.next_block_size();
		inner.write_all(&tick.to_le_bytes())?;
		inner.write_all(&pack(size as u32).to_le_bytes())?;
		trace!(tick, size, "opened wrecked stream block");
		Ok(size.max(0) as usize)
	}

	fn flush_full_block(&mut self) -> Result<()> {
		let Some(inner) = self.inner.as_mut() else {
			return Ok(());
		};
		inner.write_all(&self.buffer)?;
		self.buffer.clear();
		self.target = Self::start_block(inner, &mut self.generator)?;
		Ok(())
	}

	/// Flush the final (possibly short) block and return the inner writer.
	pub fn finish(mut self) -> Result<W> {
		if let Some(inner) = self.inner.as_mut() {
			inner.write_all(&self.buffer)?;
			self.buffer.clear();
		}
		Ok(self.inner.take().expect("inner writer taken twice"))
	}
}

impl<W: Write> Write for WreckedWriter<W> {
	fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
		let mut written = 0;
		let mut data = data;
		while !data.is_empty() {
			let space = self.target.saturating_sub(self.buffer.len());
			let take = space.min(data.len());
			self.buffer.extend_from_slice(&data[..take]);
			data = &data[take..];
			written += take;
			if self.buffer.len() >= self.target {
				self.flush_full_block()
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

impl<W: Write> Drop for WreckedWriter<W> {
	fn drop(&mut self) {
		if let Some(inner) = self.inner.as_mut() {
			let _ = inner.write_all(&self.buffer);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn unpack_inverts_pack_for_generated_sizes() {
		let mut gen = BlockSizeGenerator::new();
		for _ in 0..64 {
			let (_, size) = gen.next_block_size();
			let size = size as u32;
			assert_eq!(unpack(pack(size)), size);
		}
	}

	#[test]
	fn write_then_read_roundtrip() {
		let payload: Vec<u8> = (0..200_000u32).map(|n| (n % 251) as u8).collect();

		let mut out = Vec::new();
		{
			let mut writer = WreckedWriter::new(&mut out).unwrap();
			writer.write_all(&payload).unwrap();
			writer.finish().unwrap();
		}

		let mut cur = Cursor::new(out);
		let mut reader = WreckedReader::new(&mut cur).unwrap();
		assert_eq!(reader.len(), payload.len() as u64);

		let mut read_back = Vec::new();
		reader.read_to_end(&mut read_back).unwrap();
		assert_eq!(read_back, payload);
	}

	#[test]
	fn seek_across_blocks() {
		let payload: Vec<u8> = (0..500_000u32).map(|n| (n % 256) as u8).collect();
		let mut out = Vec::new();
		{
			let mut writer = WreckedWriter::new(&mut out).unwrap();
			writer.write_all(&payload).unwrap();
			writer.finish().unwrap();
		}

		let mut cur = Cursor::new(out);
		let mut reader = WreckedReader::new(&mut cur).unwrap();
		assert!(reader.blocks.len() >= 1);

		reader.seek(SeekFrom::Start(400_000)).unwrap();
		let mut buf = [0u8; 100];
		reader.read_exact(&mut buf).unwrap();
		assert_eq!(&buf[..], &payload[400_000..400_100]);
	}
}
