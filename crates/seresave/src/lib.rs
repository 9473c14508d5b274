//! Rewrites the internal and cross-file references in a Serious Engine 2+
//! game's assets after a batch of file renames, so the game keeps loading
//! correctly under its new layout.

#![warn(clippy::unwrap_used, missing_docs)]
#![deny(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod batch;
pub mod copy_cursor;
pub mod error;
pub mod meta;
pub mod rename;
pub mod resave;
pub mod scan;

pub use batch::{BatchDriver, BatchEvent, BatchReport};
pub use error::{Error, ErrorKind, Result};
pub use rename::{RenameMap, ResaveFile};
