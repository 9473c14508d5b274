//! Self-describing data types discovered from `INTERNAL_TYPES` and their
//! walkers (spec §3 `DataType`, §4.5).
//!
//! Types are allocated into a flat arena first and resolved by index
//! afterwards (Design Notes §9 "self-referential type graph") rather than by
//! owning reference, since the graph can point through itself (a struct's
//! base, a pointee, a member) before every type has been read.

use std::io::Read;

use crate::error::{ErrorKind, Result};
use crate::meta::reader::MetaReader;
use crate::meta::{DATA_TYPE, STRUCT_MEMBERS};

/// The kind tag of a [`DataType`] (spec §3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
	/// A primitive leaf value (`SBYTE`, `SLONG`, `FLOAT`, ...).
	Simple,
	/// A named value field; carries no further structure of its own.
	ValueField,
	/// A raw pointer to another `DataType`.
	Pointer,
	/// A reference to another `DataType`.
	Reference,
	/// A fixed-length run of the pointee type, length given elsewhere.
	Array,
	/// A struct with an optional base type and an ordered member list.
	Struct,
	/// A length-prefixed array of the pointee type.
	CStaticArray,
	/// Like `CStaticArray`, stack-allocated on the engine side; same wire shape.
	CStaticStackArray,
	/// A length-prefixed container of 4-byte handles.
	CDynamicContainer,
	/// A function pointer; carries no data.
	Function,
	/// The empty type.
	Void,
	/// A smart (ref-counted) pointer to the pointee type.
	SmartPointer,
	/// A 4-byte opaque handle.
	Handle,
	/// An alias for the pointee type.
	Typedef,
	/// A unique-ownership pointer, dispatched further by `Template`.
	UniquePointer,
	/// Script VM state; treated as opaque.
	ScriptState,
	/// Script VM latent-call state; treated as opaque.
	ScriptLatent,
	/// Unrecognized kind tag; treated like `Simple` for sizing purposes.
	Unknown,
}

impl Kind {
	fn from_tag(tag: i32) -> Result<Self> {
		Ok(match tag {
			0 => Kind::Simple,
			1 => Kind::ValueField,
			2 => Kind::Pointer,
			3 => Kind::Reference,
			4 => Kind::Array,
			5 => Kind::Struct,
			6 => Kind::CStaticArray,
			7 => Kind::CStaticStackArray,
			8 => Kind::CDynamicContainer,
			9 => Kind::Function,
			10 => Kind::Void,
			11 => Kind::SmartPointer,
			12 => Kind::Handle,
			13 => Kind::Typedef,
			14 => Kind::UniquePointer,
			15 => Kind::ScriptState,
			16 => Kind::ScriptLatent,
			17 => Kind::Unknown,
			_ => return Err(ErrorKind::UnexpectedDataTypeKind.into()),
		})
	}
}

/// One field of a `Struct`-kind [`DataType`] (spec §3 `StructMember`).
#[derive(Clone, Debug)]
pub struct StructMember {
	/// Human-readable field name, present in older meta versions.
	pub name: Option<String>,
	/// Decimal field id, present in newer meta versions.
	pub id: Option<String>,
	/// Arena index of this member's type.
	pub data_type: usize,
}

impl StructMember {
	/// Whether this member's `Name` or `Id` equals `target` (spec §4.5,
	/// §4.6: members `"14"`/`"7"` on `CResourceFile`).
	pub fn matches(&self, target: &str) -> bool {
		self.id.as_deref() == Some(target) || self.name.as_deref() == Some(target)
	}
}

/// A self-describing type discovered from `INTERNAL_TYPES` (spec §3).
#[derive(Clone, Debug)]
pub struct DataType {
	/// This type's own index in the arena.
	pub index: usize,
	/// Type name, e.g. `CResourceFile`, `CString`, `SLONG`.
	pub name: String,
	/// Kind tag.
	pub kind: Kind,
	/// Numeric format tag (meaning is kind-specific; only `CBaseTexture`'s
	/// `Format > 26` trailing-blob rule consults it directly).
	pub format: i32,
	/// Statically known size in bytes, once computed by [`propagate_sizes`].
	pub size: Option<u32>,
	/// Referent type: pointee for Pointer/Array/Typedef/UniquePointer kinds,
	/// base type for Struct.
	pub pointer: Option<usize>,
	/// Element count for Array kind.
	pub array_size: Option<i32>,
	/// Template name, meaningful only for UniquePointer (`ResourceLink`,
	/// `Synced`, `UniquePtr`, `CStaticArray2D`).
	pub template: Option<String>,
	/// Ordered member list, present for Struct kind.
	pub members: Option<Vec<StructMember>>,
	/// Whether any reachable constituent is a `ResourceLink` unique
	/// pointer, computed once by [`compute_has_resource_link`].
	pub has_resource_link: bool,
}

/// The flat, index-addressed collection of every type read from
/// `INTERNAL_TYPES`.
#[derive(Clone, Debug, Default)]
pub struct DataTypeArena {
	types: Vec<DataType>,
}

impl DataTypeArena {
	/// Number of types in the arena.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether the arena is empty.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Look up a type by its arena index.
	pub fn get(&self, index: usize) -> &DataType {
		&self.types[index]
	}

	/// Find a type by name, if present (used to recognize `CResourceFile`).
	pub fn find_by_name(&self, name: &str) -> Option<&DataType> {
		self.types.iter().find(|t| t.name == name)
	}

	/// Whether any type in the arena has a reachable `ResourceLink` (spec
	/// §4.6's second flush short-circuit).
	pub fn any_has_resource_link(&self) -> bool {
		self.types.iter().any(|t| t.has_resource_link)
	}

	/// Read every entry of `INTERNAL_TYPES`, then run both preparation
	/// passes (spec §4.5).
	pub fn read<R: Read>(reader: &mut MetaReader<R>) -> Result<Self> {
		let count = reader.begin_list(crate::meta::INTERNAL_TYPES)?;
		let mut types = Vec::with_capacity(count.max(0) as usize);

		for _ in 0..count.max(0) {
			reader.begin_block(DATA_TYPE)?;
			let index = reader.read_i32()? as usize;
			let name = reader.read_string()?;
			let kind = Kind::from_tag(reader.read_i32()?)?;
			let format = reader.read_i32()?;

			let pointer = if reader.read_i32()? != 0 {
				Some(reader.read_i32()? as usize)
			} else {
				None
			};
			let array_size = if reader.read_i32()? != 0 {
				Some(reader.read_i32()?)
			} else {
				None
			};
			let template = if reader.read_i32()? != 0 {
				Some(reader.read_string()?)
			} else {
				None
			};

			let members = if kind == Kind::Struct {
				reader.begin_block(STRUCT_MEMBERS)?;
				let member_count = reader.read_i32()?;
				let mut members = Vec::with_capacity(member_count.max(0) as usize);
				for _ in 0..member_count.max(0) {
					let name = if reader.read_i32()? != 0 {
						Some(reader.read_string()?)
					} else {
						None
					};
					let id = if reader.read_i32()? != 0 {
						Some(reader.read_string()?)
					} else {
						None
					};
					let data_type = reader.read_i32()? as usize;
					members.push(StructMember { name, id, data_type });
				}
				Some(members)
			} else {
				None
			};

			types.push(DataType {
				index,
				name,
				kind,
				format,
				size: None,
				pointer,
				array_size,
				template,
				members,
				has_resource_link: false,
			});
		}

		let mut arena = Self { types };
		propagate_sizes(&mut arena.types);
		compute_has_resource_link(&mut arena.types);
		Ok(arena)
	}
}

fn primitive_size(name: &str) -> Option<u32> {
	match name {
		"SBYTE" | "UBYTE" => Some(1),
		"SWORD" | "UWORD" => Some(2),
		"SLONG" | "ULONG" | "FLOAT" | "IDENT" => Some(4),
		"SQUAD" | "DOUBLE" => Some(8),
		_ => None,
	}
}

#[derive(Clone, Copy)]
enum SizeState {
	Unknown,
	Visiting,
	Resolved(Option<u32>),
}

/// Resolve every type's static size, memoized, cycle-safe (spec §4.5 pass 1).
pub fn propagate_sizes(types: &mut [DataType]) {
	let mut memo = vec![SizeState::Unknown; types.len()];
	for i in 0..types.len() {
		resolve_size(types, &mut memo, i);
	}
	for (ty, state) in types.iter_mut().zip(memo) {
		if let SizeState::Resolved(size) = state {
			ty.size = size;
		}
	}
}

fn resolve_size(types: &[DataType], memo: &mut [SizeState], index: usize) -> Option<u32> {
	match memo[index] {
		SizeState::Resolved(size) => return size,
		SizeState::Visiting => return None,
		SizeState::Unknown => {}
	}
	memo[index] = SizeState::Visiting;

	let ty = &types[index];
	let size = match ty.kind {
		Kind::Simple | Kind::Unknown | Kind::ValueField => primitive_size(&ty.name),
		Kind::Pointer | Kind::Reference | Kind::SmartPointer | Kind::Handle => Some(4),
		Kind::Array => {
			let pointee = ty.pointer.and_then(|p| resolve_size(types, memo, p));
			match (pointee, ty.array_size) {
				(Some(elem), Some(count)) if count >= 0 => Some(elem * count as u32),
				_ => None,
			}
		}
		Kind::Struct => {
			let base = match ty.pointer {
				Some(p) => resolve_size(types, memo, p),
				None => Some(0),
			};
			let members = ty.members.as_ref().map(|members| {
				members
					.iter()
					.map(|m| resolve_size(types, memo, m.data_type))
					.collect::<Option<Vec<_>>>()
			});
			match (base, members) {
				(Some(base), Some(Some(member_sizes))) => Some(base + member_sizes.into_iter().sum::<u32>()),
				_ => None,
			}
		}
		Kind::Typedef => ty.pointer.and_then(|p| resolve_size(types, memo, p)),
		Kind::UniquePointer => match ty.template.as_deref() {
			Some("UniquePtr") => Some(4),
			Some("Synced") => ty.pointer.and_then(|p| resolve_size(types, memo, p)),
			_ => None,
		},
		Kind::CStaticArray
		| Kind::CStaticStackArray
		| Kind::CDynamicContainer
		| Kind::Function
		| Kind::Void
		| Kind::ScriptState
		| Kind::ScriptLatent => None,
	};

	memo[index] = SizeState::Resolved(size);
	size
}

#[derive(Clone, Copy)]
enum LinkState {
	Unknown,
	Visiting,
	Resolved(bool),
}

/// Resolve every type's `HasResourceLink` flag, memoized, cycle-safe (spec
/// §4.5 pass 2).
pub fn compute_has_resource_link(types: &mut [DataType]) {
	let mut memo = vec![LinkState::Unknown; types.len()];
	for i in 0..types.len() {
		resolve_link(types, &mut memo, i);
	}
	for (ty, state) in types.iter_mut().zip(memo) {
		if let LinkState::Resolved(has_link) = state {
			ty.has_resource_link = has_link;
		}
	}
}

fn resolve_link(types: &[DataType], memo: &mut [LinkState], index: usize) -> bool {
	match memo[index] {
		LinkState::Resolved(v) => return v,
		LinkState::Visiting => return false,
		LinkState::Unknown => {}
	}
	memo[index] = LinkState::Visiting;

	let ty = &types[index];
	let result = match ty.kind {
		Kind::Pointer
		| Kind::Reference
		| Kind::SmartPointer
		| Kind::Handle
		| Kind::Array
		| Kind::CStaticArray
		| Kind::CStaticStackArray
		| Kind::CDynamicContainer
		| Kind::Typedef => ty.pointer.map(|p| resolve_link(types, memo, p)).unwrap_or(false),
		Kind::Struct => {
			let base = ty.pointer.map(|p| resolve_link(types, memo, p)).unwrap_or(false);
			let members = ty
				.members
				.as_ref()
				.map(|members| members.iter().any(|m| resolve_link(types, memo, m.data_type)))
				.unwrap_or(false);
			base || members
		}
		Kind::UniquePointer => match ty.template.as_deref() {
			Some("ResourceLink") => true,
			Some("Synced") | Some("CStaticArray2D") => {
				ty.pointer.map(|p| resolve_link(types, memo, p)).unwrap_or(false)
			}
			_ => false,
		},
		Kind::Simple
		| Kind::ValueField
		| Kind::Function
		| Kind::Void
		| Kind::ScriptState
		| Kind::ScriptLatent
		| Kind::Unknown => false,
	};

	memo[index] = LinkState::Resolved(result);
	result
}

/// What a [`DataType::skip_to_resource_link`] callback tells the walker to
/// do once it's handled a `ResourceLink` site. Kept as an enum rather than
/// `()` per Design Notes §9's "continue/stop" framing — every site must
/// currently be visited, so only `Continue` exists, but a future scanner
/// that only needs the first hit has somewhere to add `Stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceLinkAction {
	/// Resume walking past this site.
	Continue,
}

const SKIP_ONE_STRING: &[&str] = &["CString"];
const SKIP_FOUR_BYTES: &[&str] = &["CMetaPointer", "CMetaHandle", "CSyncedSLONG"];

impl DataType {
	/// Advance past one instance of this type without emitting anything
	/// (spec §4.5 "Skip").
	pub fn skip<R: Read>(&self, arena: &DataTypeArena, reader: &mut MetaReader<R>) -> Result<()> {
		if SKIP_ONE_STRING.contains(&self.name.as_str()) {
			reader.read_string()?;
			return Ok(());
		}
		if SKIP_FOUR_BYTES.contains(&self.name.as_str()) {
			return reader.skip(4);
		}
		if self.name == "CTransString" {
			reader.skip(4)?;
			reader.read_string()?;
			reader.read_string()?;
			return Ok(());
		}
		if self.name == "CBaseTexture" {
			self.skip_as_struct(arena, reader)?;
			if self.format > 26 {
				reader.skip(2)?;
				let size = reader.read_i32()?;
				reader.skip(size.max(0) as usize)?;
			}
			return Ok(());
		}

		if let Some(size) = self.size {
			return reader.skip(size as usize);
		}

		match self.kind {
			Kind::Array => {
				let pointee = arena.get(self.pointer.expect("Array always has a pointee"));
				for _ in 0..self.array_size.unwrap_or(0).max(0) {
					pointee.skip(arena, reader)?;
				}
				Ok(())
			}
			Kind::CStaticArray | Kind::CStaticStackArray => self.skip_c_static_array(arena, reader),
			Kind::CDynamicContainer => {
				reader.skip(4)?;
				let count = reader.read_i32()?;
				reader.skip((count.max(0) as usize) * 4)
			}
			Kind::Struct => self.skip_as_struct(arena, reader),
			Kind::Typedef => arena.get(self.pointer.expect("Typedef always has a pointee")).skip(arena, reader),
			Kind::UniquePointer => match self.template.as_deref() {
				Some("ResourceLink") => {
					reader.read_string()?;
					Ok(())
				}
				Some("Synced") => arena.get(self.pointer.expect("Synced always has a pointee")).skip(arena, reader),
				Some("CStaticArray2D") => {
					reader.skip(8)?;
					self.skip_c_static_array(arena, reader)
				}
				_ => reader.skip(4),
			},
			_ => Ok(()),
		}
	}

	fn skip_as_struct<R: Read>(&self, arena: &DataTypeArena, reader: &mut MetaReader<R>) -> Result<()> {
		if let Some(base) = self.pointer {
			arena.get(base).skip(arena, reader)?;
		}
		if let Some(members) = &self.members {
			for member in members {
				arena.get(member.data_type).skip(arena, reader)?;
			}
		}
		Ok(())
	}

	fn skip_c_static_array<R: Read>(&self, arena: &DataTypeArena, reader: &mut MetaReader<R>) -> Result<()> {
		reader.skip(4)?;
		let count = reader.read_i32()?;
		let pointee = arena.get(self.pointer.expect("CStaticArray always has a pointee"));
		for _ in 0..count.max(0) {
			pointee.skip(arena, reader)?;
		}
		Ok(())
	}

	/// Advance through one instance, suspending at each reachable
	/// `ResourceLink` string position so the caller can read (and rewrite)
	/// it (spec §4.5 "SkipToResourceLink"). Only meaningful when
	/// `has_resource_link` is true; callers should call [`DataType::skip`]
	/// instead when it's false.
	pub fn skip_to_resource_link<R: Read>(
		&self,
		arena: &DataTypeArena,
		reader: &mut MetaReader<R>,
		on_link: &mut dyn FnMut(&mut MetaReader<R>) -> Result<ResourceLinkAction>,
	) -> Result<()> {
		if !self.has_resource_link {
			return self.skip(arena, reader);
		}

		match self.kind {
			Kind::Pointer | Kind::Reference | Kind::SmartPointer | Kind::Handle | Kind::Typedef => {
				arena
					.get(self.pointer.expect("has_resource_link implies a pointee"))
					.skip_to_resource_link(arena, reader, on_link)
			}
			Kind::Array | Kind::CStaticArray | Kind::CStaticStackArray => {
				let pointee = arena.get(self.pointer.expect("has_resource_link implies a pointee"));
				let count = match self.kind {
					Kind::Array => self.array_size.unwrap_or(0).max(0),
					_ => {
						reader.skip(4)?;
						reader.read_i32()?.max(0)
					}
				};
				for _ in 0..count {
					pointee.skip_to_resource_link(arena, reader, on_link)?;
				}
				Ok(())
			}
			Kind::Struct => {
				if let Some(base) = self.pointer {
					arena.get(base).skip_to_resource_link(arena, reader, on_link)?;
				}
				if let Some(members) = &self.members {
					for member in members {
						arena
							.get(member.data_type)
							.skip_to_resource_link(arena, reader, on_link)?;
					}
				}
				Ok(())
			}
			Kind::UniquePointer => match self.template.as_deref() {
				Some("ResourceLink") => {
					on_link(reader)?;
					Ok(())
				}
				Some("Synced") | Some("CStaticArray2D") => {
					arena
						.get(self.pointer.expect("has_resource_link implies a pointee"))
						.skip_to_resource_link(arena, reader, on_link)
				}
				_ => Ok(()),
			},
			_ => Ok(()),
		}
	}

	/// Walk this type's direct members, yielding control to `on_hit` at
	/// each member whose `Name` or `Id` is in `targets`, and calling
	/// [`DataType::skip`] on every other member (spec §4.5 "State machine
	/// for struct-member matching"). Only defined for `Struct` kind;
	/// recurses into a base type first.
	pub fn skip_to_members<R: Read>(
		&self,
		arena: &DataTypeArena,
		reader: &mut MetaReader<R>,
		targets: &std::collections::HashSet<String>,
		on_hit: &mut dyn FnMut(&str, &mut MetaReader<R>) -> Result<()>,
	) -> Result<()> {
		if self.kind != Kind::Struct {
			return self.skip(arena, reader);
		}
		if let Some(base) = self.pointer {
			arena
				.get(base)
				.skip_to_members(arena, reader, targets, on_hit)?;
		}
		if let Some(members) = &self.members {
			for member in members {
				let hit = targets
					.iter()
					.find(|t| member.matches(t))
					.cloned();
				match hit {
					Some(target) => on_hit(&target, reader)?,
					None => arena.get(member.data_type).skip(arena, reader)?,
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn simple(index: usize, name: &str) -> DataType {
		DataType {
			index,
			name: name.to_string(),
			kind: Kind::Simple,
			format: 0,
			size: None,
			pointer: None,
			array_size: None,
			template: None,
			members: None,
			has_resource_link: false,
		}
	}

	#[test]
	fn primitive_sizes_propagate() {
		let mut types = vec![simple(0, "SLONG"), simple(1, "UBYTE")];
		propagate_sizes(&mut types);
		assert_eq!(types[0].size, Some(4));
		assert_eq!(types[1].size, Some(1));
	}

	#[test]
	fn struct_size_is_sum_of_members() {
		let mut types = vec![
			simple(0, "SLONG"),
			simple(1, "UBYTE"),
			DataType {
				members: Some(vec![
					StructMember { name: None, id: Some("1".into()), data_type: 0 },
					StructMember { name: None, id: Some("2".into()), data_type: 1 },
				]),
				..simple_struct(2)
			},
		];
		propagate_sizes(&mut types);
		assert_eq!(types[2].size, Some(5));
	}

	fn simple_struct(index: usize) -> DataType {
		DataType {
			index,
			name: "SomeStruct".into(),
			kind: Kind::Struct,
			format: 0,
			size: None,
			pointer: None,
			array_size: None,
			template: None,
			members: None,
			has_resource_link: false,
		}
	}

	#[test]
	fn resource_link_propagates_through_struct_member() {
		let link = DataType {
			template: Some("ResourceLink".into()),
			kind: Kind::UniquePointer,
			..simple(0, "UniquePtr<ResourceLink>")
		};
		let mut types = vec![
			link,
			DataType {
				members: Some(vec![StructMember { name: None, id: Some("14".into()), data_type: 0 }]),
				..simple_struct(1)
			},
		];
		compute_has_resource_link(&mut types);
		assert!(types[0].has_resource_link);
		assert!(types[1].has_resource_link);
	}

	#[test]
	fn resource_link_false_when_absent() {
		let mut types = vec![simple(0, "SLONG")];
		compute_has_resource_link(&mut types);
		assert!(!types[0].has_resource_link);
	}
}
