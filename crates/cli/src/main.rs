//! `optreg`: assemble a Manual world's option catalog from the command line.

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::List { build, json } => {
			let catalog = build.build()?;
			if json {
				println!("{}", report::to_json(&catalog)?);
			} else {
				print!("{}", report::render_listing(&catalog));
			}
		}
		Command::Check { build } => {
			info!(manifests = build.manifests.len(), wow_leveling = build.wow_leveling, "checking catalog");
			let catalog = build.build()?;
			print!("{}", report::render_check(&catalog));
		}
	}

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
