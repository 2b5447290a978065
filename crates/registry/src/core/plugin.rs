use crate::error::Result;
use crate::groups::GroupRegistry;
use crate::options::OptionRegistry;

/// Hook run against the option registry.
pub type OptionsHook = fn(&mut OptionRegistry) -> Result<()>;

/// Hook run against the group registry.
pub type GroupsHook = fn(&mut GroupRegistry<'_>);

/// The host application's built-in catalog.
///
/// The host runs between the plugins' before- and after-hooks of each
/// pipeline and knows nothing about the plugins around it.
pub trait HostCatalog {
	/// Inserts (or overwrites) the standard option definitions.
	fn define_options(&self, options: &mut OptionRegistry) -> Result<()>;

	/// Assigns options to the standard groups.
	fn assign_groups(&self, _groups: &mut GroupRegistry<'_>) {}
}

/// Host with no built-in options or groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBuiltins;

impl HostCatalog for NoBuiltins {
	fn define_options(&self, _options: &mut OptionRegistry) -> Result<()> {
		Ok(())
	}
}

/// An independently authored set of lifecycle hooks.
///
/// Every hook defaults to a no-op.
pub trait CatalogPlugin {
	/// Unique plugin id, used in build records and error reports.
	fn id(&self) -> &str;

	/// Runs before the host defines its options.
	///
	/// Entries inserted here are overwritten by host definitions that share a
	/// key.
	fn before_options_defined(&self, _options: &mut OptionRegistry) -> Result<()> {
		Ok(())
	}

	/// Runs after the host defines its options and before validation.
	fn after_options_defined(&self, _options: &mut OptionRegistry) -> Result<()> {
		Ok(())
	}

	/// Runs before the host assigns its groups.
	fn before_option_groups_created(&self, _groups: &mut GroupRegistry<'_>) {}

	/// Runs after the host assigns its groups.
	fn after_option_groups_created(&self, _groups: &mut GroupRegistry<'_>) {}
}

/// A plugin descriptor built from plain function pointers.
#[derive(Clone, Copy)]
pub struct PluginDef {
	/// Plugin id.
	pub id: &'static str,
	pub before_options: Option<OptionsHook>,
	pub after_options: Option<OptionsHook>,
	pub before_groups: Option<GroupsHook>,
	pub after_groups: Option<GroupsHook>,
}

impl PluginDef {
	/// Creates a plugin with no hooks.
	pub const fn new(id: &'static str) -> Self {
		Self {
			id,
			before_options: None,
			after_options: None,
			before_groups: None,
			after_groups: None,
		}
	}

	pub const fn before_options(mut self, hook: OptionsHook) -> Self {
		self.before_options = Some(hook);
		self
	}

	pub const fn after_options(mut self, hook: OptionsHook) -> Self {
		self.after_options = Some(hook);
		self
	}

	pub const fn before_groups(mut self, hook: GroupsHook) -> Self {
		self.before_groups = Some(hook);
		self
	}

	pub const fn after_groups(mut self, hook: GroupsHook) -> Self {
		self.after_groups = Some(hook);
		self
	}
}

impl std::fmt::Debug for PluginDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PluginDef")
			.field("id", &self.id)
			.field("before_options", &self.before_options.is_some())
			.field("after_options", &self.after_options.is_some())
			.field("before_groups", &self.before_groups.is_some())
			.field("after_groups", &self.after_groups.is_some())
			.finish()
	}
}

impl CatalogPlugin for PluginDef {
	fn id(&self) -> &str {
		self.id
	}

	fn before_options_defined(&self, options: &mut OptionRegistry) -> Result<()> {
		self.before_options.map_or(Ok(()), |hook| hook(options))
	}

	fn after_options_defined(&self, options: &mut OptionRegistry) -> Result<()> {
		self.after_options.map_or(Ok(()), |hook| hook(options))
	}

	fn before_option_groups_created(&self, groups: &mut GroupRegistry<'_>) {
		if let Some(hook) = self.before_groups {
			hook(groups);
		}
	}

	fn after_option_groups_created(&self, groups: &mut GroupRegistry<'_>) {
		if let Some(hook) = self.after_groups {
			hook(groups);
		}
	}
}
