#![warn(clippy::unwrap_used)]
#![deny(rust_2018_idioms)]

use std::sync::atomic::AtomicBool;

use clap::Parser;
use miette::IntoDiagnostic;
use tracing::{debug, info, warn};

use seresave::BatchDriver;

use crate::args::Args;

mod args;
mod logs;
mod rename_rules;

fn main() -> miette::Result<()> {
	let logs_on = logs::from_env().into_diagnostic()?;

	debug!("parsing arguments");
	let args = Args::parse();

	if logs_on {
		warn!("ignoring logging options from args");
	} else {
		logs::from_args(&args).into_diagnostic()?;
	}

	debug!(?args, "got arguments");

	let files = rename_rules::parse(&args.rename_rules, args.delete_old)?;
	info!(count = files.len(), "loaded rename rules");

	let driver = BatchDriver::new(&args.game_root, args.profile.into());
	let cancel = AtomicBool::new(false);
	let report = driver.run(&files, &args.aux, &cancel, &|event| {
		debug!(?event, "batch progress");
	});

	for (file, error) in &report.resave_errors {
		eprintln!("failed to resave {} -> {}: {error}", file.old_path, file.new_path);
	}
	for (path, error) in &report.aux_errors {
		eprintln!("failed to update references in {}: {error}", path.display());
	}

	if report.is_success() {
		info!("batch completed successfully");
		Ok(())
	} else {
		Err(miette::miette!(
			"{} resave failure(s), {} reference-update failure(s)",
			report.resave_errors.len(),
			report.aux_errors.len()
		))
	}
}
