use std::collections::HashSet;

use serde::Serialize;

use crate::core::{CatalogPlugin, Contributor, HostCatalog, Phase};
use crate::error::{CatalogError, Result};
use crate::groups::{GroupCatalog, GroupDiagnostic};
use crate::options::{OptionCatalog, WriteCounts};
use crate::pipeline::{GroupingPipeline, RegistrationPipeline};

#[cfg(test)]
mod tests;

/// Writes attributed to a single phase invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseCounts {
	/// Definitions inserted under a new key.
	pub inserted: usize,
	/// Definitions that replaced an existing key.
	pub replaced: usize,
	/// Group memberships dropped for naming an unknown key.
	pub dropped: usize,
}

impl From<WriteCounts> for PhaseCounts {
	fn from(counts: WriteCounts) -> Self {
		Self {
			inserted: counts.inserted,
			replaced: counts.replaced,
			dropped: 0,
		}
	}
}

impl PhaseCounts {
	fn dropped(dropped: usize) -> Self {
		Self { dropped, ..Self::default() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseRecord {
	pub phase: Phase,
	pub contributor: Contributor,
	pub counts: PhaseCounts,
}

/// Everything a build produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	pub options: OptionCatalog,
	pub groups: GroupCatalog,
	pub diagnostics: Vec<GroupDiagnostic>,
	/// One record per hook invocation, in execution order.
	pub records: Vec<PhaseRecord>,
}

/// Runs a host and its plugins through both pipelines.
pub struct CatalogBuilder<H> {
	host: H,
	plugins: Vec<Box<dyn CatalogPlugin>>,
	plugin_ids: HashSet<String>,
}

impl<H: HostCatalog> CatalogBuilder<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			plugins: Vec::new(),
			plugin_ids: HashSet::new(),
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// Plugin ids in registration order.
	pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
		self.plugins.iter().map(|plugin| plugin.id())
	}

	/// Appends a plugin. Hooks of each phase run in registration order.
	pub fn register_plugin(&mut self, plugin: impl CatalogPlugin + 'static) -> Result<()> {
		if !self.plugin_ids.insert(plugin.id().to_string()) {
			return Err(CatalogError::DuplicatePlugin(plugin.id().to_string()));
		}
		tracing::debug!(domain = "builder", plugin = plugin.id(), "plugin registered");
		self.plugins.push(Box::new(plugin));
		Ok(())
	}

	pub fn with_plugin(mut self, plugin: impl CatalogPlugin + 'static) -> Result<Self> {
		self.register_plugin(plugin)?;
		Ok(self)
	}

	/// Assembles a fresh catalog. Each call starts from empty registries.
	pub fn build(&self) -> Result<Catalog> {
		let mut records = Vec::new();
		let mut registration = RegistrationPipeline::new();

		for plugin in &self.plugins {
			let counts = registration
				.pre_register(|options| plugin.before_options_defined(options))
				.map_err(|err| CatalogError::in_plugin(plugin.id(), err))?;
			records.push(record(Phase::PreRegistration, Contributor::plugin(plugin.id()), counts.into()));
		}

		let counts = registration.define_builtins(|options| self.host.define_options(options))?;
		records.push(record(Phase::BuiltinDefinition, Contributor::Host, counts.into()));

		for plugin in &self.plugins {
			let counts = registration
				.post_register(|options| plugin.after_options_defined(options))
				.map_err(|err| CatalogError::in_plugin(plugin.id(), err))?;
			records.push(record(Phase::PostRegistration, Contributor::plugin(plugin.id()), counts.into()));
		}

		let options = registration.finalize()?;

		let outcome = {
			let mut grouping = GroupingPipeline::new(&options);
			for plugin in &self.plugins {
				let dropped = grouping.pre_group(|groups| plugin.before_option_groups_created(groups))?;
				records.push(record(Phase::PreGrouping, Contributor::plugin(plugin.id()), PhaseCounts::dropped(dropped)));
			}

			let dropped = grouping.assign_builtin_groups(|groups| self.host.assign_groups(groups))?;
			records.push(record(Phase::BuiltinGrouping, Contributor::Host, PhaseCounts::dropped(dropped)));

			for plugin in &self.plugins {
				let dropped = grouping.post_group(|groups| plugin.after_option_groups_created(groups))?;
				records.push(record(Phase::PostGrouping, Contributor::plugin(plugin.id()), PhaseCounts::dropped(dropped)));
			}

			grouping.finish()?
		};

		tracing::info!(
			domain = "builder",
			options = options.len(),
			groups = outcome.groups.len(),
			plugins = self.plugins.len(),
			dropped = outcome.diagnostics.len(),
			"catalog built",
		);

		Ok(Catalog {
			options,
			groups: outcome.groups,
			diagnostics: outcome.diagnostics,
			records,
		})
	}
}

fn record(phase: Phase, contributor: Contributor, counts: PhaseCounts) -> PhaseRecord {
	tracing::trace!(
		domain = "builder",
		phase = %phase,
		contributor = %contributor,
		inserted = counts.inserted,
		replaced = counts.replaced,
		dropped = counts.dropped,
		"phase complete",
	);
	PhaseRecord { phase, contributor, counts }
}
