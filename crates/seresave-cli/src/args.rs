use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sesstream::Profile;

/// Rewrite Serious Engine 2+ asset references after a batch of file renames.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
	/// Root directory of the game whose assets are being renamed.
	pub game_root: PathBuf,

	/// Rename rules file: one `old\tnew` pair per line, paths relative to
	/// `game_root`.
	pub rename_rules: PathBuf,

	/// Game profile, selecting which stream wrappers to expect/produce.
	#[arg(long, value_enum, default_value_t = ProfileArg::Ss3)]
	pub profile: ProfileArg,

	/// Delete each renamed file's old path once its resave succeeds.
	#[arg(long)]
	pub delete_old: bool,

	/// Additional files (not themselves renamed) whose references should
	/// be updated, relative to `game_root`.
	#[arg(long = "aux")]
	pub aux: Vec<PathBuf>,

	/// Increase logging verbosity; repeat for more (`-v`, `-vv`, `-vvv`).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Write logs (as JSON) to this file or directory instead of stderr.
	#[arg(long)]
	pub log_file: Option<PathBuf>,
}

/// `clap`-facing mirror of [`sesstream::Profile`] (kept out of `sesstream`
/// itself, which has no `clap` dependency).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProfileArg {
	/// Serious Sam 2.
	Ss2,
	/// Serious Sam HD.
	Sshd,
	/// Serious Sam 3.
	Ss3,
	/// Fusion engine.
	Fusion,
	/// Serious Sam 4.
	Ss4,
}

impl From<ProfileArg> for Profile {
	fn from(arg: ProfileArg) -> Self {
		match arg {
			ProfileArg::Ss2 => Profile::Ss2,
			ProfileArg::Sshd => Profile::Sshd,
			ProfileArg::Ss3 => Profile::Ss3,
			ProfileArg::Fusion => Profile::Fusion,
			ProfileArg::Ss4 => Profile::Ss4,
		}
	}
}
