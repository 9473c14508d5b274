//! The binary meta resaver: a copying stream editor over the block layout
//! described in `seresave::meta` (spec §4.6).
//!
//! Everything not named below is re-emitted byte-for-byte: [`MetaReader`]
//! reads it through a [`CopyCursor`], which tees every consumed byte, and
//! [`CopyCursor::flush_through`] drains the tee to the output once a span
//! turns out not to need rewriting.
//!
//! Replacement sites:
//! 1. `EXTERNAL_FILES` entries whose path hits the rename map.
//! 2. When this asset is itself being renamed and its first internal object
//!    is a `CResourceFile`, that object's `"14"`/`"7"` members (filename,
//!    UID).
//! 3. Every other internal object whose type has a reachable `ResourceLink`:
//!    every resource-link string that hits the rename map.
//! 4. The same, for `EDIT_OBJECTS`.
//!
//! Two flush short-circuits end the rewrite early once nothing further in
//! the file could possibly need touching: no `EXTERNAL_FILES` rename, no
//! type with a resource link, and (when renaming this asset) no
//! `CResourceFile` type to retarget; and, past `INTERNAL_OBJECTS`, no type
//! with a resource link at all (so `EDIT_OBJECTS` can't hold one either).

use std::collections::HashSet;
use std::io::{self, Read, Write};

use sesstream::bytes::Endian;

use super::Resaver;
use crate::copy_cursor::CopyCursor;
use crate::error::Result;
use crate::meta::{self, DataTypeArena, MetaReader, ResourceLinkAction};
use crate::rename::RenameMap;

/// Resaves the binary reflection meta format (spec §4.4-§4.6).
pub struct BinaryMetaResaver;

fn encode_string(endian: Endian, value: &str) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(4 + value.len());
	bytes.extend_from_slice(&endian.i32_bytes(value.len() as i32));
	bytes.extend_from_slice(value.as_bytes());
	bytes
}

impl Resaver for BinaryMetaResaver {
	fn resave(
		&self,
		input: &mut dyn Read,
		output: &mut dyn Write,
		renames: &RenameMap,
		new_asset_fn: Option<&str>,
	) -> Result<()> {
		let mut cursor = CopyCursor::new(input);
		let mut reader = MetaReader::new(&mut cursor)?;
		let endian = reader.endian();
		let version = reader.version();
		reader.inner_mut().flush_through(output)?;

		if version > 9 {
			reader.begin_block(meta::MESSAGES)?;
			reader.read_string()?;
		}

		reader.begin_block(meta::INFO)?;
		reader.skip(if version > 7 { 20 } else { 16 })?;
		reader.inner_mut().flush_through(output)?;

		let mut any_external_rename = false;
		let count = reader.begin_list(meta::EXTERNAL_FILES)?;
		for _ in 0..count.max(0) {
			reader.skip(8)?;
			let old_path = reader.read_string()?;
			match renames.get(&old_path) {
				Some(new_path) => {
					any_external_rename = true;
					let replacement = encode_string(endian, new_path);
					reader
						.inner_mut()
						.replace_last(output, 4 + old_path.len(), &replacement)?;
				}
				None => reader.inner_mut().flush_through(output)?,
			}
		}

		for magic in [meta::IDS, meta::EXTERNAL_TYPES] {
			let count = reader.begin_list(magic)?;
			for _ in 0..count.max(0) {
				reader.read_string()?;
			}
		}
		reader.inner_mut().flush_through(output)?;

		let arena = DataTypeArena::read(&mut reader)?;
		reader.inner_mut().flush_through(output)?;

		let self_renames_cresourcefile = new_asset_fn.is_some() && arena.find_by_name("CResourceFile").is_some();
		if !any_external_rename && !arena.any_has_resource_link() && !self_renames_cresourcefile {
			io::copy(&mut cursor, output)?;
			return Ok(());
		}

		let count = reader.begin_list(meta::EXTERNAL_OBJECTS)?;
		for _ in 0..count.max(0) {
			reader.read_string()?;
		}

		let object_types = read_type_indices(&mut reader, meta::INTERNAL_OBJECT_TYPES)?;
		let edit_object_types = read_type_indices(&mut reader, meta::EDIT_OBJECT_TYPES)?;
		reader.inner_mut().flush_through(output)?;

		reader.begin_block(meta::INTERNAL_OBJECTS)?;
		reader.inner_mut().flush_through(output)?;
		let mut first_object = 0;
		if self_renames_cresourcefile {
			if let Some(&type_index) = object_types.first() {
				let ty = arena.get(type_index);
				if ty.name == "CResourceFile" {
					let mut targets = HashSet::new();
					targets.insert("14".to_string());
					targets.insert("7".to_string());
					let new_fn = new_asset_fn.expect("self_renames_cresourcefile implies Some");
					let mut on_hit = |target: &str, reader: &mut MetaReader<&mut CopyCursor>| -> Result<()> {
						match target {
							"14" => {
								let old = reader.read_string()?;
								let replacement = encode_string(endian, new_fn);
								reader.inner_mut().replace_last(output, 4 + old.len(), &replacement)?;
							}
							"7" => {
								reader.read_i32()?;
								let new_uid: u32 = rand::random();
								reader.inner_mut().replace_last(output, 4, &endian.u32_bytes(new_uid))?;
							}
							_ => unreachable!("only \"14\"/\"7\" are registered targets"),
						}
						Ok(())
					};
					ty.skip_to_members(&arena, &mut reader, &targets, &mut on_hit)?;
					reader.inner_mut().flush_through(output)?;
					first_object = 1;
				}
			}
		}

		for &type_index in &object_types[first_object..] {
			let ty = arena.get(type_index);
			{
				let mut on_link = |reader: &mut MetaReader<&mut CopyCursor>| -> Result<ResourceLinkAction> {
					let old_path = reader.read_string()?;
					if let Some(new_path) = renames.get(&old_path) {
						let replacement = encode_string(endian, new_path);
						reader.inner_mut().replace_last(output, 4 + old_path.len(), &replacement)?;
					} else {
						reader.inner_mut().flush_through(output)?;
					}
					Ok(ResourceLinkAction::Continue)
				};
				ty.skip_to_resource_link(&arena, &mut reader, &mut on_link)?;
			}
			reader.inner_mut().flush_through(output)?;
		}

		if !arena.any_has_resource_link() {
			io::copy(&mut cursor, output)?;
			return Ok(());
		}

		reader.begin_block(meta::EDIT_OBJECTS)?;
		reader.inner_mut().flush_through(output)?;
		for &type_index in &edit_object_types {
			let ty = arena.get(type_index);
			{
				let mut on_link = |reader: &mut MetaReader<&mut CopyCursor>| -> Result<ResourceLinkAction> {
					let old_path = reader.read_string()?;
					if let Some(new_path) = renames.get(&old_path) {
						let replacement = encode_string(endian, new_path);
						reader.inner_mut().replace_last(output, 4 + old_path.len(), &replacement)?;
					} else {
						reader.inner_mut().flush_through(output)?;
					}
					Ok(ResourceLinkAction::Continue)
				};
				ty.skip_to_resource_link(&arena, &mut reader, &mut on_link)?;
			}
			reader.inner_mut().flush_through(output)?;
		}

		io::copy(&mut cursor, output)?;
		Ok(())
	}
}

fn read_type_indices<R: Read>(reader: &mut MetaReader<R>, magic: meta::BlockMagic) -> Result<Vec<usize>> {
	let count = reader.begin_list(magic)?;
	(0..count.max(0)).map(|_| reader.read_i32().map(|v| v as usize)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rename::ResaveFile;

	fn header(version: i32) -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(&meta::MAGIC.to_le_bytes());
		buf.extend_from_slice(&meta::COOKIE_LITTLE.to_le_bytes());
		buf.extend_from_slice(&version.to_le_bytes());
		buf
	}

	fn empty_string_list(magic: &[u8; 4]) -> Vec<u8> {
		let mut buf = magic.to_vec();
		buf.extend_from_slice(&0i32.to_le_bytes());
		buf
	}

	/// A minimal, fully-empty file (no types, no objects) that the first
	/// flush short-circuit should pass through unchanged.
	fn minimal_file() -> Vec<u8> {
		let mut buf = header(1);
		buf.extend_from_slice(b"INFO");
		buf.extend_from_slice(&[0u8; 16]);
		buf.extend_from_slice(&empty_string_list(&meta::EXTERNAL_FILES));
		buf.extend_from_slice(&empty_string_list(&meta::IDS));
		buf.extend_from_slice(&empty_string_list(&meta::EXTERNAL_TYPES));
		buf.extend_from_slice(&empty_string_list(&meta::INTERNAL_TYPES));
		buf
	}

	#[test]
	fn short_circuits_when_nothing_to_rewrite() {
		let input_bytes = minimal_file();
		let mut input = std::io::Cursor::new(input_bytes.clone());
		let mut output = Vec::new();
		BinaryMetaResaver
			.resave(&mut input, &mut output, &RenameMap::default(), None)
			.unwrap();
		assert_eq!(output, input_bytes);
	}

	#[test]
	fn rewrites_external_file_rename() {
		let mut buf = header(1);
		buf.extend_from_slice(b"INFO");
		buf.extend_from_slice(&[0u8; 16]);
		buf.extend_from_slice(b"RFIL");
		buf.extend_from_slice(&1i32.to_le_bytes());
		buf.extend_from_slice(&[0u8; 8]);
		buf.extend_from_slice(&4i32.to_le_bytes());
		buf.extend_from_slice(b"Old1");
		buf.extend_from_slice(&empty_string_list(&meta::IDS));
		buf.extend_from_slice(&empty_string_list(&meta::EXTERNAL_TYPES));
		buf.extend_from_slice(&empty_string_list(&meta::INTERNAL_TYPES));
		buf.extend_from_slice(&empty_string_list(&meta::EXTERNAL_OBJECTS));
		buf.extend_from_slice(&empty_string_list(&meta::INTERNAL_OBJECT_TYPES));
		buf.extend_from_slice(&empty_string_list(&meta::EDIT_OBJECT_TYPES));
		buf.extend_from_slice(b"OBJS");

		let files = vec![ResaveFile::new("Old1", "LongerName", false)];
		let renames = RenameMap::from_resave_files(&files);

		let mut input = std::io::Cursor::new(buf);
		let mut output = Vec::new();
		BinaryMetaResaver.resave(&mut input, &mut output, &renames, None).unwrap();

		let mut reader = MetaReader::new(std::io::Cursor::new(output)).unwrap();
		reader.begin_block(meta::INFO).unwrap();
		reader.skip(16).unwrap();
		let count = reader.begin_list(meta::EXTERNAL_FILES).unwrap();
		assert_eq!(count, 1);
		reader.skip(8).unwrap();
		assert_eq!(reader.read_string().unwrap(), "LongerName");
	}
}
