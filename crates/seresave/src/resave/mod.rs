//! Per-format resavers: the copying stream editors that rewrite one asset's
//! references to renamed paths, and (optionally) its own identity (spec
//! §4.6).

pub mod binary_meta;
pub mod lua;
pub mod nfo;
pub mod plain;
pub mod text_meta;

use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::rename::RenameMap;

/// One recognized asset content format, identified by [`sniff`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	/// `CTSESMETA`-tagged binary reflection meta.
	BinaryMeta,
	/// `MetaText`-tagged plain-text meta.
	TextMeta,
	/// UTF-8-BOM, `LEVEL`-keyed world info file.
	Nfo,
	/// `.lua` script.
	Lua,
	/// Anything else: copied through byte-for-byte.
	Plain,
}

const TEXT_META_MAGIC: &[u8; 8] = b"MetaText";
pub(crate) const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const NFO_MAGIC: &[u8; 5] = b"LEVEL";

/// Recognize a format from its first 8 bytes and, for `.lua`, its path
/// extension (spec §4.6's dispatch table).
pub fn sniff(path: &Path, first_8: &[u8]) -> Format {
	if first_8.len() >= 8 {
		let mut magic = [0u8; 8];
		magic.copy_from_slice(&first_8[..8]);
		if u64::from_le_bytes(magic) == crate::meta::MAGIC {
			return Format::BinaryMeta;
		}
		if &magic == TEXT_META_MAGIC {
			return Format::TextMeta;
		}
		if first_8[..3] == UTF8_BOM && &first_8[3..8] == NFO_MAGIC {
			return Format::Nfo;
		}
	}
	if is_lua_path(path) {
		return Format::Lua;
	}
	Format::Plain
}

fn is_lua_path(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.map(|ext| ext.eq_ignore_ascii_case("lua"))
		.unwrap_or(false)
}

/// Rewrites one asset's references to renamed paths as it copies it from
/// `input` to `output`. When `new_asset_fn` is given, the asset is itself
/// being renamed and should rewrite its own self-identifying fields too.
pub trait Resaver {
	/// Copy `input` to `output`, rewriting renamed references along the way.
	fn resave(
		&self,
		input: &mut dyn Read,
		output: &mut dyn Write,
		renames: &RenameMap,
		new_asset_fn: Option<&str>,
	) -> Result<()>;
}

/// Build the resaver for a recognized format.
pub fn resaver_for(format: Format) -> Box<dyn Resaver> {
	match format {
		Format::BinaryMeta => Box::new(binary_meta::BinaryMetaResaver),
		Format::TextMeta => Box::new(text_meta::TextMetaResaver),
		Format::Nfo => Box::new(nfo::NfoResaver),
		Format::Lua => Box::new(lua::LuaResaver::new()),
		Format::Plain => Box::new(plain::PlainCopy),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn sniffs_binary_meta_by_magic() {
		let magic_bytes = crate::meta::MAGIC.to_le_bytes();
		assert_eq!(sniff(&PathBuf::from("a.ctm"), &magic_bytes), Format::BinaryMeta);
	}

	#[test]
	fn sniffs_text_meta_by_magic() {
		assert_eq!(sniff(&PathBuf::from("a.txt"), b"MetaText"), Format::TextMeta);
	}

	#[test]
	fn sniffs_nfo_by_bom_and_level() {
		let mut bytes = UTF8_BOM.to_vec();
		bytes.extend_from_slice(b"LEVEL");
		assert_eq!(sniff(&PathBuf::from("a.wld"), &bytes), Format::Nfo);
	}

	#[test]
	fn sniffs_lua_by_extension() {
		assert_eq!(sniff(&PathBuf::from("Scripts/Foo.lua"), b""), Format::Lua);
		assert_eq!(sniff(&PathBuf::from("Scripts/Foo.LUA"), b""), Format::Lua);
	}

	#[test]
	fn falls_back_to_plain() {
		assert_eq!(sniff(&PathBuf::from("a.bin"), b"randombts"), Format::Plain);
	}
}
