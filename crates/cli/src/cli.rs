use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use optreg_manifest::load_manifest;
use optreg_manual::{ManualBuiltins, WOW_LEVELING};
use optreg_registry::{Catalog, CatalogBuilder};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "optreg")]
#[command(about = "Assemble a Manual world's option catalog and report on it")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the assembled options grouped for presentation
	List {
		#[command(flatten)]
		build: BuildArgs,

		/// Emit the catalog as JSON
		#[arg(long)]
		json: bool,
	},
	/// Assemble the catalog and report problems
	Check {
		#[command(flatten)]
		build: BuildArgs,
	},
}

/// Flags describing the host and the plugins to build with.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
	/// Goal name offered by the `goal` option (repeatable)
	#[arg(long = "goal", value_name = "NAME", conflicts_with = "wow_leveling")]
	pub goals: Vec<String>,

	/// Category key that gets an on-by-default toggle (repeatable)
	#[arg(long = "category", value_name = "KEY")]
	pub categories: Vec<String>,

	/// Define the death_link option
	#[arg(long)]
	pub death_link: bool,

	/// Use the World of Warcraft leveling world and its plugin
	#[arg(long)]
	pub wow_leveling: bool,

	/// Manifest to load as a plugin (repeatable, applied in order)
	#[arg(long = "manifest", value_name = "PATH")]
	pub manifests: Vec<PathBuf>,
}

impl BuildArgs {
	pub fn host(&self) -> ManualBuiltins {
		let host = if self.wow_leveling {
			ManualBuiltins::wow_leveling()
		} else {
			ManualBuiltins::new(self.goals.iter().cloned())
		};
		self.categories
			.iter()
			.fold(host, |host, category| host.with_category(category.clone()))
			.with_death_link(self.death_link)
	}

	pub fn builder(&self) -> Result<CatalogBuilder<ManualBuiltins>> {
		let mut builder = CatalogBuilder::new(self.host());
		if self.wow_leveling {
			builder.register_plugin(WOW_LEVELING)?;
		}
		for path in &self.manifests {
			let plugin = load_manifest(path).with_context(|| format!("loading manifest {}", path.display()))?;
			builder.register_plugin(plugin)?;
		}
		Ok(builder)
	}

	/// Loads every manifest and runs the full build.
	pub fn build(&self) -> Result<Catalog> {
		let builder = self.builder()?;
		builder.build().context("building option catalog")
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(std::iter::once("optreg").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn repeated_flags_collect_in_order() {
		let cli = parse(&["list", "--goal", "Leveling", "--goal", "Gold Hunt", "--category", "include_dungeons", "-v"]);

		let Command::List { build, json } = cli.command else {
			panic!("expected list");
		};
		assert!(cli.verbose);
		assert!(!json);
		assert_eq!(build.goals, vec!["Leveling", "Gold Hunt"]);
		assert_eq!(build.categories, vec!["include_dungeons"]);
	}

	#[test]
	fn goal_conflicts_with_wow_leveling() {
		let result = Cli::try_parse_from(["optreg", "check", "--wow-leveling", "--goal", "Leveling"]);
		assert!(result.is_err());
	}

	#[test]
	fn wow_leveling_builds_with_plugin() {
		let build = BuildArgs {
			wow_leveling: true,
			death_link: true,
			..BuildArgs::default()
		};

		let catalog = build.build().unwrap();
		assert!(catalog.options.contains_key("gold_hunt_amount"));
		assert!(catalog.options.contains_key("death_link"));
	}

	#[test]
	fn manifests_register_as_plugins() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "id = \"extra\"\n[options.bonus]\nkind = \"toggle\"").unwrap();

		let build = BuildArgs {
			goals: vec!["Win".into()],
			manifests: vec![file.path().to_path_buf()],
			..BuildArgs::default()
		};

		let catalog = build.build().unwrap();
		assert_eq!(catalog.options.keys().collect::<Vec<_>>(), vec!["bonus", "goal"]);
	}

	#[test]
	fn missing_manifest_names_the_path() {
		let build = BuildArgs {
			manifests: vec![PathBuf::from("/nonexistent/extra.toml")],
			..BuildArgs::default()
		};

		let err = build.build().unwrap_err();
		assert!(format!("{err:#}").contains("/nonexistent/extra.toml"));
	}
}
