use serde::Serialize;

/// A fixed position in the catalog lifecycle.
///
/// Phases run in declaration order, each exactly once per build (plugin
/// phases once per plugin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
	/// Plugins seed definitions ahead of the host's built-ins.
	PreRegistration,
	/// The host defines its standard catalog.
	BuiltinDefinition,
	/// Plugins add definitions or edit existing ones in place.
	PostRegistration,
	/// Plugins create groups ahead of the host's built-in grouping.
	PreGrouping,
	/// The host assigns options to its standard groups.
	BuiltinGrouping,
	/// Plugins reorder, merge, rename or prune groups.
	PostGrouping,
}

impl Phase {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::PreRegistration => "pre-registration",
			Self::BuiltinDefinition => "built-in definition",
			Self::PostRegistration => "post-registration",
			Self::PreGrouping => "pre-grouping",
			Self::BuiltinGrouping => "built-in grouping",
			Self::PostGrouping => "post-grouping",
		}
	}

	/// Returns true for phases that operate on the group registry.
	pub const fn is_grouping(self) -> bool {
		matches!(self, Self::PreGrouping | Self::BuiltinGrouping | Self::PostGrouping)
	}
}

impl std::fmt::Display for Phase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Who ran a phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Contributor {
	/// The host application's built-in step.
	Host,
	/// A plugin, by id.
	Plugin(String),
}

impl Contributor {
	pub fn plugin(id: impl Into<String>) -> Self {
		Self::Plugin(id.into())
	}
}

impl std::fmt::Display for Contributor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Host => write!(f, "host"),
			Self::Plugin(id) => write!(f, "plugin:{id}"),
		}
	}
}
