//! The binary meta format: a positional reader over a self-describing
//! reflection-driven object graph (spec §4.4, §4.5).

pub mod datatype;
pub mod reader;

pub use datatype::{DataType, DataTypeArena, Kind, StructMember};
pub use reader::MetaReader;

/// Top-level magic: ASCII `CTSESMETA`, read as a little-endian `u64`.
pub const MAGIC: u64 = 0x4154_454d_4553_5443;

/// Little-endian endianness cookie: the file's subsequent int32 reads are
/// little-endian.
pub const COOKIE_LITTLE: u32 = 0x1234_ABCD;

/// Big-endian endianness cookie: the file's subsequent int32 reads are
/// byte-swapped relative to their on-disk little-endian encoding.
pub const COOKIE_BIG: u32 = 0xCDAB_3412;

/// One 4-byte ASCII block magic, always read/written as literal bytes
/// regardless of the file's declared endianness.
pub type BlockMagic = [u8; 4];

/// `MSGS`
pub const MESSAGES: BlockMagic = *b"MSGS";
/// `INFO`
pub const INFO: BlockMagic = *b"INFO";
/// `RFIL`
pub const EXTERNAL_FILES: BlockMagic = *b"RFIL";
/// `IDNT`
pub const IDS: BlockMagic = *b"IDNT";
/// `EXTY`
pub const EXTERNAL_TYPES: BlockMagic = *b"EXTY";
/// `INTY`
pub const INTERNAL_TYPES: BlockMagic = *b"INTY";
/// `DTTY`
pub const DATA_TYPE: BlockMagic = *b"DTTY";
/// `STMB`
pub const STRUCT_MEMBERS: BlockMagic = *b"STMB";
/// `EXOB`
pub const EXTERNAL_OBJECTS: BlockMagic = *b"EXOB";
/// `OBTY`
pub const INTERNAL_OBJECT_TYPES: BlockMagic = *b"OBTY";
/// `EDTY`
pub const EDIT_OBJECT_TYPES: BlockMagic = *b"EDTY";
/// `OBJS`
pub const INTERNAL_OBJECTS: BlockMagic = *b"OBJS";
/// `EDOB`
pub const EDIT_OBJECTS: BlockMagic = *b"EDOB";
