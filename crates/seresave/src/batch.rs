//! The two-phase batch driver (spec §4.8, §5): resave every listed asset in
//! parallel, then rewrite every auxiliary file's references, then clean up
//! `DeleteOld` entries. Both phases are independently `rayon`-parallel;
//! per-file failures in either phase are collected rather than aborting the
//! batch, and the whole run can be cancelled cooperatively between files.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write as _};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::{debug, warn};

use sesstream::Profile;

use crate::error::{Error, Result};
use crate::rename::{RenameMap, ResaveFile};
use crate::resave::{self, Format};
use crate::scan::{self, Scanner};

/// Adapts the boxed, dynamically-dispatched stream `sesstream::open_for_read`
/// returns into a plain `Read + Seek` value, so it can be passed to
/// [`crate::resave::Resaver`]/[`Scanner`] methods (which take `&mut dyn
/// Read`) without requiring `Box<dyn ReadSeek>` itself to satisfy `Read`.
struct FactoryStream(Box<dyn sesstream::ReadSeek>);

impl Read for FactoryStream {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		self.0.read(buf)
	}
}

impl Seek for FactoryStream {
	fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
		self.0.seek(pos)
	}
}

/// One unit of progress reported back to the caller during a batch.
#[derive(Clone, Debug)]
pub enum BatchEvent {
	/// `file` was resaved to its new path successfully.
	ResaveDone(ResaveFile),
	/// `file` failed to resave; see [`BatchReport::resave_errors`].
	ResaveFailed(ResaveFile),
	/// `path`'s references were rewritten in place successfully.
	AuxDone(PathBuf),
	/// `path`'s reference update failed; see [`BatchReport::aux_errors`].
	AuxFailed(PathBuf),
}

/// The outcome of a full batch: every per-file failure from each phase.
#[derive(Debug, Default)]
pub struct BatchReport {
	/// Resave-phase failures, keyed by the rename entry that failed.
	pub resave_errors: HashMap<ResaveFile, Error>,
	/// Reference-update-phase failures, keyed by the auxiliary file's
	/// game-root-relative path.
	pub aux_errors: HashMap<PathBuf, Error>,
}

impl BatchReport {
	/// Whether every file in both phases succeeded.
	pub fn is_success(&self) -> bool {
		self.resave_errors.is_empty() && self.aux_errors.is_empty()
	}
}

/// Drives a batch over one game root.
pub struct BatchDriver<'a> {
	game_root: &'a Path,
	profile: Profile,
}

impl<'a> BatchDriver<'a> {
	/// Build a driver rooted at `game_root`, using `profile` to pick which
	/// stream wrappers the write side applies (spec §4.8 phase 1).
	pub fn new(game_root: &'a Path, profile: Profile) -> Self {
		Self { game_root, profile }
	}

	/// Run both phases. `cancel` is checked before starting each file in
	/// either phase; once set, no further files are started, but in-flight
	/// ones still finish. `on_event` is called from whichever thread
	/// finishes a file, so it must be `Sync`.
	pub fn run(
		&self,
		files: &[ResaveFile],
		aux_paths: &[PathBuf],
		cancel: &AtomicBool,
		on_event: &(dyn Fn(BatchEvent) + Sync),
	) -> BatchReport {
		let renames = RenameMap::from_resave_files(files);

		let resave_errors = Mutex::new(HashMap::new());
		files.par_iter().for_each(|file| {
			if cancel.load(Ordering::Relaxed) {
				return;
			}
			match self.resave_one(file, &renames) {
				Ok(()) => on_event(BatchEvent::ResaveDone(file.clone())),
				Err(error) => {
					warn!(old = %file.old_path, new = %file.new_path, %error, "resave failed");
					resave_errors.lock().expect("resave_errors mutex poisoned").insert(file.clone(), error);
					on_event(BatchEvent::ResaveFailed(file.clone()));
				}
			}
		});
		let resave_errors = resave_errors.into_inner().expect("resave_errors mutex poisoned");

		let scan_targets = renames.old_paths();
		let aux_errors = Mutex::new(HashMap::new());
		aux_paths.par_iter().for_each(|path| {
			if cancel.load(Ordering::Relaxed) {
				return;
			}
			match self.update_references(path, &renames, &scan_targets) {
				Ok(()) => on_event(BatchEvent::AuxDone(path.clone())),
				Err(error) => {
					warn!(path = %path.display(), %error, "reference update failed");
					aux_errors.lock().expect("aux_errors mutex poisoned").insert(path.clone(), error);
					on_event(BatchEvent::AuxFailed(path.clone()));
				}
			}
		});
		let aux_errors = aux_errors.into_inner().expect("aux_errors mutex poisoned");

		for file in files {
			if file.delete_old && !resave_errors.contains_key(file) {
				let old_abs = self.game_root.join(&file.old_path);
				if let Err(error) = fs::remove_file(&old_abs) {
					debug!(path = %old_abs.display(), %error, "delete-old cleanup failed, ignoring");
				}
			}
		}

		BatchReport { resave_errors, aux_errors }
	}

	/// Resave `file` into its new path. On failure, the partial output
	/// (however far the resaver got writing it) is deleted (spec §4.8
	/// phase 1, §7 "the partial destination file is deleted").
	fn resave_one(&self, file: &ResaveFile, renames: &RenameMap) -> Result<()> {
		let old_abs = self.game_root.join(&file.old_path);
		let new_abs = self.game_root.join(&file.new_path);
		if let Some(parent) = new_abs.parent() {
			fs::create_dir_all(parent)?;
		}

		if let Err(error) = self.resave_one_inner(&old_abs, &new_abs, file, renames) {
			if let Err(remove_error) = fs::remove_file(&new_abs) {
				debug!(path = %new_abs.display(), %remove_error, "partial output cleanup failed, ignoring");
			}
			return Err(error);
		}
		Ok(())
	}

	fn resave_one_inner(&self, old_abs: &Path, new_abs: &Path, file: &ResaveFile, renames: &RenameMap) -> Result<()> {
		let mut source = FactoryStream(sesstream::open_for_read(BufReader::new(fs::File::open(old_abs)?))?);
		let first_8 = sesstream::bytes::peek::<8>(&mut source)?;
		let format = resave::sniff(Path::new(&file.new_path), first_8.as_ref().map_or(&[], |buf| buf.as_slice()));
		let resaver = resave::resaver_for(format);

		let extension = Path::new(&file.new_path).extension().and_then(|e| e.to_str()).unwrap_or("");
		let mut dest = sesstream::open_for_write(self.profile, extension, BufWriter::new(fs::File::create(new_abs)?))?;

		let new_fn = Path::new(&file.new_path).file_name().and_then(|n| n.to_str());
		resaver.resave(&mut source, &mut dest, renames, new_fn)?;
		dest.flush()?;
		Ok(())
	}

	/// Rewrite `rel_path`'s references in place, via a sibling temp file
	/// (spec §4.8 phase 2). Skips files that don't reference any renamed
	/// path at all. On failure, the temp file is deleted (spec §4.8 phase
	/// 2, §5 "temp files are cleaned ... on per-file exception").
	fn update_references(&self, rel_path: &Path, renames: &RenameMap, targets: &HashSet<String>) -> Result<()> {
		let abs_path = self.game_root.join(rel_path);
		let tmp_path = abs_path.with_extension("seresave-tmp");

		if let Err(error) = self.update_references_inner(&abs_path, &tmp_path, rel_path, renames, targets) {
			if let Err(remove_error) = fs::remove_file(&tmp_path) {
				debug!(path = %tmp_path.display(), %remove_error, "temp file cleanup failed, ignoring");
			}
			return Err(error);
		}
		Ok(())
	}

	fn update_references_inner(
		&self,
		abs_path: &Path,
		tmp_path: &Path,
		rel_path: &Path,
		renames: &RenameMap,
		targets: &HashSet<String>,
	) -> Result<()> {
		let mut source = FactoryStream(sesstream::open_for_read(BufReader::new(fs::File::open(abs_path)?))?);
		let first_8 = sesstream::bytes::peek::<8>(&mut source)?;
		let format = resave::sniff(rel_path, first_8.as_ref().map_or(&[], |buf| buf.as_slice()));
		if format == Format::Plain {
			return Ok(());
		}

		let scanner = scan::scanner_for(format).expect("non-Plain format always has a scanner");
		if !scanner.references_any(&mut source, targets)? {
			return Ok(());
		}
		source.seek(SeekFrom::Start(0))?;

		let resaver = resave::resaver_for(format);
		let extension = rel_path.extension().and_then(|e| e.to_str()).unwrap_or("");
		{
			let mut dest =
				sesstream::open_for_write(self.profile, extension, BufWriter::new(fs::File::create(tmp_path)?))?;
			resaver.resave(&mut source, &mut dest, renames, None)?;
			dest.flush()?;
		}
		fs::rename(tmp_path, abs_path)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resave_and_delete_old_round_trip() {
		let dir = std::env::temp_dir().join(format!("seresave-batch-test-{:?}", std::thread::current().id()));
		fs::create_dir_all(&dir).unwrap();
		fs::write(dir.join("Old.bin"), b"plain content").unwrap();

		let files = vec![ResaveFile::new("Old.bin", "New.bin", true)];
		let driver = BatchDriver::new(&dir, Profile::Ss2);
		let cancel = AtomicBool::new(false);
		let report = driver.run(&files, &[], &cancel, &|_event| {});

		assert!(report.is_success());
		assert_eq!(fs::read(dir.join("New.bin")).unwrap(), b"plain content");
		assert!(!dir.join("Old.bin").exists());

		fs::remove_dir_all(&dir).ok();
	}

	#[test]
	fn records_failure_for_missing_file() {
		let dir = std::env::temp_dir().join(format!("seresave-batch-missing-{:?}", std::thread::current().id()));
		fs::create_dir_all(&dir).unwrap();

		let files = vec![ResaveFile::new("DoesNotExist.bin", "New.bin", false)];
		let driver = BatchDriver::new(&dir, Profile::Ss2);
		let cancel = AtomicBool::new(false);
		let report = driver.run(&files, &[], &cancel, &|_event| {});

		assert!(!report.is_success());
		assert_eq!(report.resave_errors.len(), 1);
		assert!(!dir.join("New.bin").exists());

		fs::remove_dir_all(&dir).ok();
	}

	#[test]
	fn cancellation_skips_remaining_files() {
		let dir = std::env::temp_dir().join(format!("seresave-batch-cancel-{:?}", std::thread::current().id()));
		fs::create_dir_all(&dir).unwrap();
		fs::write(dir.join("A.bin"), b"a").unwrap();

		let files = vec![ResaveFile::new("A.bin", "A2.bin", false)];
		let driver = BatchDriver::new(&dir, Profile::Ss2);
		let cancel = AtomicBool::new(true);
		let report = driver.run(&files, &[], &cancel, &|_event| {});

		assert!(report.is_success());
		assert!(!dir.join("A2.bin").exists());

		fs::remove_dir_all(&dir).ok();
	}

	#[test]
	fn aux_file_without_any_renamed_reference_is_left_untouched() {
		let dir = std::env::temp_dir().join(format!("seresave-batch-aux-skip-{:?}", std::thread::current().id()));
		fs::create_dir_all(&dir).unwrap();

		let mut nfo = b"\xEF\xBB\xBF".to_vec();
		nfo.extend_from_slice(b"LEVEL= \"World.wld\"\nTHUMBNAIL= \"Textures/Unrelated.tex\"\n");
		fs::write(dir.join("world.nfo"), &nfo).unwrap();

		let files = vec![ResaveFile::new("Textures/Old.tex", "Textures/New.tex", false)];
		let driver = BatchDriver::new(&dir, Profile::Ss2);
		let cancel = AtomicBool::new(false);
		let report = driver.run(&files, &[PathBuf::from("world.nfo")], &cancel, &|_event| {});

		// the resave of Textures/Old.tex itself fails (file doesn't exist in
		// this fixture), but the aux phase runs independently and should
		// still report success since world.nfo has nothing to rewrite.
		assert!(report.aux_errors.is_empty());
		assert_eq!(fs::read(dir.join("world.nfo")).unwrap(), nfo);
		assert!(!dir.join("world.seresave-tmp").exists());

		fs::remove_dir_all(&dir).ok();
	}
}
