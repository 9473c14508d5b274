//! Deterministic RSA-PSS signer used by the signed stream's header and
//! per-block signatures.
//!
//! The editor keys shipped with each [`crate::profile::Profile`] are DER-encoded
//! PKCS#1 `RSAPrivateKey` byte strings; they aren't secrets in the usual
//! sense, they're build-time inputs required for the resulting files to
//! load in the shipped game (see spec §9).

use rsa::{
	pkcs1::DecodeRsaPrivateKey,
	pss::{BlindedSigningKey, Signature},
	signature::{RandomizedSigner, SignatureEncoding},
	RsaPrivateKey,
};
use sha1::Sha1;
use sha2::Sha256;

use crate::error::Result;

/// Salt length used for every PSS signature this crate produces.
///
/// Spec §4.1: "a deterministic PSS signer with an 11-byte salt".
pub const SALT_LEN: usize = 11;

/// The PSS trailer byte. Standard per RFC 8017; the `rsa` crate applies it
/// internally, this constant exists purely for documentation/tests.
pub const TRAILER_BYTE: u8 = 0xBC;

/// Digest algorithm selector, matching the signed-stream header's
/// `hashMethod` tag (spec §4.1: `4` ⇒ SHA-1, `6` ⇒ SHA-256).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashMethod {
	/// Tag `4`.
	Sha1,
	/// Tag `6`.
	Sha256,
}

impl HashMethod {
	/// The on-disk header tag for this hash method.
	pub const fn header_tag(self) -> i32 {
		match self {
			HashMethod::Sha1 => 4,
			HashMethod::Sha256 => 6,
		}
	}

	/// Recover a hash method from its header tag.
	pub fn from_header_tag(tag: i32) -> Option<Self> {
		match tag {
			4 => Some(Self::Sha1),
			6 => Some(Self::Sha256),
			_ => None,
		}
	}

	/// Raw digest size in bytes for this hash method.
	pub const fn digest_len(self) -> usize {
		match self {
			HashMethod::Sha1 => 20,
			HashMethod::Sha256 => 32,
		}
	}
}

/// Wraps an RSA private key and signs arbitrary byte strings with PSS.
pub struct PssSigner {
	key: RsaPrivateKey,
}

impl PssSigner {
	/// Load a signer from a DER-encoded PKCS#1 `RSAPrivateKey`.
	pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
		let key = RsaPrivateKey::from_pkcs1_der(der)?;
		Ok(Self { key })
	}

	/// Modulus size in bytes; this is the length of every signature this
	/// key produces.
	pub fn signature_len(&self) -> usize {
		self.key.size()
	}

	/// Sign `data` under the given hash method, with an 11-byte salt and the
	/// standard `0xBC` PSS trailer.
	pub fn sign(&self, hash_method: HashMethod, data: &[u8]) -> Vec<u8> {
		let mut rng = rand::thread_rng();
		let signature: Signature = match hash_method {
			HashMethod::Sha1 => {
				let signing_key = BlindedSigningKey::<Sha1>::new_with_salt_len(self.key.clone(), SALT_LEN);
				signing_key.sign_with_rng(&mut rng, data)
			}
			HashMethod::Sha256 => {
				let signing_key =
					BlindedSigningKey::<Sha256>::new_with_salt_len(self.key.clone(), SALT_LEN);
				signing_key.sign_with_rng(&mut rng, data)
			}
		};
		signature.to_bytes().to_vec()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::keys::SSHD_EDITOR_KEY_DER;

	#[test]
	fn signs_with_expected_length() {
		let signer = PssSigner::from_pkcs1_der(&SSHD_EDITOR_KEY_DER).unwrap();
		let sig = signer.sign(HashMethod::Sha1, b"hello world");
		assert_eq!(sig.len(), signer.signature_len());
	}

	#[test]
	fn hash_method_header_tags() {
		assert_eq!(HashMethod::Sha1.header_tag(), 4);
		assert_eq!(HashMethod::Sha256.header_tag(), 6);
		assert_eq!(HashMethod::from_header_tag(4), Some(HashMethod::Sha1));
		assert_eq!(HashMethod::from_header_tag(6), Some(HashMethod::Sha256));
		assert_eq!(HashMethod::from_header_tag(9), None);
	}
}
