//! Game profiles: the combination of stream wrappers a given Serious Engine
//! title expects (spec §3 `StreamProfile`, §6 "Game profiles").

pub mod keys;

use crate::signer::HashMethod;

/// A signed-stream spec: version and embedded key, carried by the profiles
/// that sign (spec §3).
#[derive(Clone, Copy, Debug)]
pub struct SignedStreamSpec {
	/// Signed-stream header version (spec §4.1: `1..=5`).
	pub version: i32,
	/// DER-encoded PKCS#1 `RSAPrivateKey` bytes for this profile.
	pub key_der: &'static [u8],
	/// Digest algorithm used when writing (spec §4.1 write contract: SHA-1).
	pub hash_method: HashMethod,
}

/// One of the five recognized game profiles (spec §3, §6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Profile {
	/// Serious Sam 2: unsigned, no wrecker.
	Ss2,
	/// Serious Sam HD: signed v4, no wrecker.
	Sshd,
	/// Serious Sam 3: signed v5, wrecker.
	Ss3,
	/// Fusion engine: signed v5, wrecker.
	Fusion,
	/// Serious Sam 4: signed v5, wrecker.
	Ss4,
}

impl Profile {
	/// All recognized profiles, in the order presented to callers as
	/// selectable presets (spec §6).
	pub const ALL: [Profile; 5] = [
		Profile::Ss2,
		Profile::Sshd,
		Profile::Ss3,
		Profile::Fusion,
		Profile::Ss4,
	];

	/// The signed-stream spec for this profile, or `None` if unsigned.
	pub fn signed_stream_spec(self) -> Option<SignedStreamSpec> {
		match self {
			Profile::Ss2 => None,
			Profile::Sshd => Some(SignedStreamSpec {
				version: 4,
				key_der: &keys::SSHD_EDITOR_KEY_DER,
				hash_method: HashMethod::Sha1,
			}),
			Profile::Ss3 => Some(SignedStreamSpec {
				version: 5,
				key_der: &keys::SS3_EDITOR_KEY_DER,
				hash_method: HashMethod::Sha1,
			}),
			Profile::Fusion => Some(SignedStreamSpec {
				version: 5,
				key_der: &keys::FUSION_EDITOR_KEY_DER,
				hash_method: HashMethod::Sha1,
			}),
			Profile::Ss4 => Some(SignedStreamSpec {
				version: 5,
				key_der: &keys::SS4_EDITOR_KEY_DER,
				hash_method: HashMethod::Sha1,
			}),
		}
	}

	/// Whether this profile wraps `.wld` files in a wrecked stream (spec §3).
	pub fn use_wrecker(self) -> bool {
		matches!(self, Profile::Ss3 | Profile::Fusion | Profile::Ss4)
	}

	/// Parse a profile from its lowercase preset name, as exposed to the CLI.
	pub fn from_name(name: &str) -> Option<Self> {
		match name.to_ascii_lowercase().as_str() {
			"ss2" => Some(Profile::Ss2),
			"sshd" => Some(Profile::Sshd),
			"ss3" => Some(Profile::Ss3),
			"fusion" => Some(Profile::Fusion),
			"ss4" => Some(Profile::Ss4),
			_ => None,
		}
	}

	/// The preset name this profile is selected by.
	pub const fn name(self) -> &'static str {
		match self {
			Profile::Ss2 => "ss2",
			Profile::Sshd => "sshd",
			Profile::Ss3 => "ss3",
			Profile::Fusion => "fusion",
			Profile::Ss4 => "ss4",
		}
	}
}

/// Whether an asset extension bypasses signing/wrecking regardless of
/// profile (spec §3: "files with extensions `.wav`, `.ogg` bypass
/// signing; only `.wld` gets a wrecker wrapper").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveWrapping {
	/// Whether to apply the signed-stream wrapper for this file.
	pub sign: bool,
	/// Whether to apply the wrecked-stream wrapper for this file.
	pub wreck: bool,
}

/// Compute the effective wrapping for a profile + file extension pair.
pub fn effective_wrapping(profile: Profile, extension: &str) -> EffectiveWrapping {
	let ext = extension.trim_start_matches('.').to_ascii_lowercase();
	let bypass_signing = matches!(ext.as_str(), "wav" | "ogg");
	let is_wld = ext == "wld";

	EffectiveWrapping {
		sign: profile.signed_stream_spec().is_some() && !bypass_signing,
		wreck: profile.use_wrecker() && is_wld,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ss2_never_wraps() {
		let w = effective_wrapping(Profile::Ss2, "wld");
		assert!(!w.sign);
		assert!(!w.wreck);
	}

	#[test]
	fn ss3_wraps_wld_but_not_audio() {
		assert_eq!(
			effective_wrapping(Profile::Ss3, "wld"),
			EffectiveWrapping {
				sign: true,
				wreck: true
			}
		);
		assert_eq!(
			effective_wrapping(Profile::Ss3, "wav"),
			EffectiveWrapping {
				sign: false,
				wreck: false
			}
		);
		assert_eq!(
			effective_wrapping(Profile::Ss3, "tex"),
			EffectiveWrapping {
				sign: true,
				wreck: false
			}
		);
	}

	#[test]
	fn profile_name_roundtrip() {
		for profile in Profile::ALL {
			assert_eq!(Profile::from_name(profile.name()), Some(profile));
		}
	}
}
