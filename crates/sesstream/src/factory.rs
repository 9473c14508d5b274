//! Stream factory: sniffs the wrapper chain at the head of a file and
//! builds the matching stack of codecs (spec §4.3).

use std::io::{Read, Seek, Write};

use tracing::{debug, trace};

use crate::{
	bytes::peek,
	error::Result,
	info, signed, wrecked,
	profile::{effective_wrapping, Profile},
};

/// Outer selector tag the factory looks for before delegating into the
/// signed stream's own `SIG2` header.
pub const SIGNED_FACTORY_TAG: &[u8; 8] = b"SIGSTRM1";

/// Outer selector tag the factory looks for before delegating into the
/// wrecked stream's own magic.
pub const WRECKED_FACTORY_TAG: &[u8; 8] = b"WRKSTRM1";

/// Convenience trait-object bound for a boxed, seekable byte stream.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Open a file for reading, peeling off any combination of `SIGSTRM1`,
/// `WRKSTRM1`, and `INFSTRM1` wrappers until an unrecognized magic (or EOF)
/// is reached, exposing the inner payload.
pub fn open_for_read<'r, R: Read + Seek + 'r>(inner: R) -> Result<Box<dyn ReadSeek + 'r>> {
	let mut current: Box<dyn ReadSeek + 'r> = Box::new(inner);

	loop {
		let Some(head) = peek::<8>(&mut current)? else {
			break;
		};

		if &head == SIGNED_FACTORY_TAG {
			let mut tag = [0u8; 8];
			current.read_exact(&mut tag)?;
			trace!("peeled signed stream wrapper");
			current = Box::new(signed::SignedReader::new(current)?);
		} else if &head == WRECKED_FACTORY_TAG {
			let mut tag = [0u8; 8];
			current.read_exact(&mut tag)?;
			trace!("peeled wrecked stream wrapper");
			current = Box::new(wrecked::WreckedReader::new(current)?);
		} else if &head == info::MAGIC {
			info::strip(&mut current)?;
			trace!("peeled info stream wrapper");
			// `InfoStrip` is not seekable on its own once the string has
			// been consumed from a non-rewindable position; since it never
			// changes the byte content, we keep using the same seekable
			// stream, now positioned just past the wrapper.
		} else {
			break;
		}
	}

	Ok(current)
}

/// The four wrapper combinations [`open_for_write`] can produce, named
/// plainly instead of boxed as `dyn Write`: the combination is always
/// statically known from `profile` + `extension` at the call site, so there
/// is no need to pay for dynamic dispatch (or demand `W: 'static`) on the
/// write side the way the sniffing read side does.
pub enum WriteChain<W: Write> {
	/// No wrapper at all.
	Plain(W),
	/// Signed only.
	Signed(signed::SignedWriter<W>),
	/// Wrecked only.
	Wrecked(wrecked::WreckedWriter<W>),
	/// Signed, then wrecked around the signed writer.
	SignedThenWrecked(wrecked::WreckedWriter<signed::SignedWriter<W>>),
}

impl<W: Write> Write for WriteChain<W> {
	fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
		match self {
			WriteChain::Plain(w) => w.write(data),
			WriteChain::Signed(w) => w.write(data),
			WriteChain::Wrecked(w) => w.write(data),
			WriteChain::SignedThenWrecked(w) => w.write(data),
		}
	}

	fn flush(&mut self) -> std::io::Result<()> {
		match self {
			WriteChain::Plain(w) => w.flush(),
			WriteChain::Signed(w) => w.flush(),
			WriteChain::Wrecked(w) => w.flush(),
			WriteChain::SignedThenWrecked(w) => w.flush(),
		}
	}
}

/// Open a destination stream for writing, wrapping it according to
/// `profile` and the asset's `extension` (spec §3's `.wav`/`.ogg`/`.wld`
/// rules, applied via [`effective_wrapping`]).
pub fn open_for_write<W: Write>(
	profile: Profile,
	extension: &str,
	mut inner: W,
) -> Result<WriteChain<W>> {
	let wrapping = effective_wrapping(profile, extension);
	debug!(?profile, extension, ?wrapping, "opening stream for write");

	Ok(match (wrapping.sign, wrapping.wreck) {
		(false, false) => WriteChain::Plain(inner),
		(true, false) => {
			let spec = profile
				.signed_stream_spec()
				.expect("effective_wrapping.sign implies a signed stream spec");
			inner.write_all(SIGNED_FACTORY_TAG)?;
			WriteChain::Signed(signed::SignedWriter::new(inner, spec.version, spec.key_der)?)
		}
		(false, true) => {
			inner.write_all(WRECKED_FACTORY_TAG)?;
			WriteChain::Wrecked(wrecked::WreckedWriter::new(inner)?)
		}
		(true, true) => {
			let spec = profile
				.signed_stream_spec()
				.expect("effective_wrapping.sign implies a signed stream spec");
			inner.write_all(SIGNED_FACTORY_TAG)?;
			let signed = signed::SignedWriter::new(inner, spec.version, spec.key_der)?;
			let mut signed = signed;
			signed.write_all(WRECKED_FACTORY_TAG)?;
			WriteChain::SignedThenWrecked(wrecked::WreckedWriter::new(signed)?)
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Cursor, Read as _, Write as _};

	#[test]
	fn plain_payload_has_no_wrapper() {
		let payload = b"just some asset bytes".to_vec();
		let cur = Cursor::new(payload.clone());
		let mut stream = open_for_read(cur).unwrap();
		let mut out = Vec::new();
		stream.read_to_end(&mut out).unwrap();
		assert_eq!(out, payload);
	}

	#[test]
	fn signed_and_wrecked_roundtrip() {
		let payload: Vec<u8> = (0..300_000u32).map(|n| (n % 253) as u8).collect();

		let mut raw = Vec::new();
		{
			let mut w = open_for_write(Profile::Ss3, "wld", &mut raw).unwrap();
			w.write_all(&payload).unwrap();
		}

		let cur = Cursor::new(raw);
		let mut stream = open_for_read(cur).unwrap();
		let mut out = Vec::new();
		stream.read_to_end(&mut out).unwrap();
		assert_eq!(out, payload);
	}

	#[test]
	fn wav_under_ss3_bypasses_signing() {
		let payload = b"riff wave data".to_vec();
		let mut raw = Vec::new();
		{
			let mut w = open_for_write(Profile::Ss3, "wav", &mut raw).unwrap();
			w.write_all(&payload).unwrap();
		}
		// no wrapper at all: bytes pass straight through
		assert_eq!(raw, payload);
	}
}
