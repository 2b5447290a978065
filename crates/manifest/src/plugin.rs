use optreg_registry::{CatalogPlugin, GroupRegistry, OptionDef, OptionRegistry};

use crate::decl::{GroupDecl, ManifestFile, OverrideDecl, Placement};
use crate::error::Result;

/// A plugin whose hooks replay the declarations of a manifest.
///
/// Declared options run in their placement's registration phase, overrides
/// run after the built-ins, and groups run in their placement's grouping
/// phase. Within a phase, declaration order is kept.
#[derive(Debug, Clone)]
pub struct ManifestPlugin {
	id: String,
	options: Vec<(Placement, String, OptionDef)>,
	overrides: Vec<(String, OverrideDecl)>,
	groups: Vec<(String, GroupDecl)>,
}

impl ManifestPlugin {
	/// Builds the plugin from a parsed manifest, checking every declaration.
	pub fn from_file(id: String, file: ManifestFile) -> Result<Self> {
		let options = file
			.options
			.iter()
			.map(|(key, decl)| Ok((decl.phase, key.clone(), decl.to_def(key)?)))
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(
			domain = "manifest",
			id = %id,
			options = options.len(),
			overrides = file.overrides.len(),
			groups = file.groups.len(),
			"manifest plugin built",
		);

		Ok(Self {
			id,
			options,
			overrides: file.overrides.into_iter().collect(),
			groups: file.groups.into_iter().collect(),
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Declared options and the definitions they produce.
	pub fn options(&self) -> impl Iterator<Item = (&str, &OptionDef)> {
		self.options.iter().map(|(_, key, def)| (key.as_str(), def))
	}

	pub fn overrides(&self) -> impl Iterator<Item = (&str, &OverrideDecl)> {
		self.overrides.iter().map(|(key, decl)| (key.as_str(), decl))
	}

	pub fn groups(&self) -> impl Iterator<Item = (&str, &GroupDecl)> {
		self.groups.iter().map(|(name, decl)| (name.as_str(), decl))
	}

	fn insert_options(&self, registry: &mut OptionRegistry, placement: Placement) {
		for (_, key, def) in self.options.iter().filter(|(phase, ..)| *phase == placement) {
			registry.insert(key.as_str(), def.clone());
		}
	}

	fn apply_groups(&self, groups: &mut GroupRegistry<'_>, placement: Placement) {
		for (name, decl) in self.groups.iter().filter(|(_, decl)| decl.phase == placement) {
			if decl.replace {
				groups.insert_group(name.as_str(), decl.options.iter().cloned());
			} else {
				groups.extend(name, decl.options.iter().cloned());
			}
			if let Some(collapsed) = decl.collapsed {
				groups.set_collapsed(name, collapsed);
			}
		}
	}
}

impl CatalogPlugin for ManifestPlugin {
	fn id(&self) -> &str {
		&self.id
	}

	fn before_options_defined(&self, options: &mut OptionRegistry) -> optreg_registry::Result<()> {
		self.insert_options(options, Placement::Before);
		Ok(())
	}

	fn after_options_defined(&self, options: &mut OptionRegistry) -> optreg_registry::Result<()> {
		self.insert_options(options, Placement::After);
		for (key, decl) in &self.overrides {
			options.edit(key, |def| decl.apply(key, def))?;
		}
		Ok(())
	}

	fn before_option_groups_created(&self, groups: &mut GroupRegistry<'_>) {
		self.apply_groups(groups, Placement::Before);
	}

	fn after_option_groups_created(&self, groups: &mut GroupRegistry<'_>) {
		self.apply_groups(groups, Placement::After);
	}
}
