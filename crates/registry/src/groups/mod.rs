//! Option groups: named, ordered lists of option keys used for presentation.
//!
//! Groups are assembled against a finalized [`OptionCatalog`]. Every
//! membership write checks the key against the catalog; unknown keys are
//! dropped and reported as a [`GroupDiagnostic`] instead of failing the
//! build.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::core::Phase;
use crate::options::OptionCatalog;


/// A named, ordered list of option keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
	name: String,
	members: Vec<String>,
	start_collapsed: bool,
}

impl Group {
	fn new(name: String) -> Self {
		Self {
			name,
			members: Vec::new(),
			start_collapsed: false,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn members(&self) -> &[String] {
		&self.members
	}

	/// Presentation hint: render the group folded.
	pub fn start_collapsed(&self) -> bool {
		self.start_collapsed
	}

	pub fn contains(&self, key: &str) -> bool {
		self.members.iter().any(|member| member == key)
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	fn push_unique(&mut self, key: String) -> bool {
		if self.contains(&key) {
			return false;
		}
		self.members.push(key);
		true
	}
}

/// Recoverable grouping problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum GroupDiagnostic {
	/// A membership named a key missing from the finalized catalog.
	#[error("unknown option key '{key}' in group '{group}' during {phase}; membership dropped")]
	UnknownOptionKey { phase: Phase, group: String, key: String },
}

/// Group name to group map, mutable during the grouping pipeline.
#[derive(Debug)]
pub struct GroupRegistry<'c> {
	catalog: &'c OptionCatalog,
	groups: IndexMap<String, Group>,
	diagnostics: Vec<GroupDiagnostic>,
	phase: Phase,
}

impl<'c> GroupRegistry<'c> {
	pub fn new(catalog: &'c OptionCatalog) -> Self {
		Self {
			catalog,
			groups: IndexMap::new(),
			diagnostics: Vec::new(),
			phase: Phase::PreGrouping,
		}
	}

	/// The finalized options that memberships are checked against.
	pub fn catalog(&self) -> &'c OptionCatalog {
		self.catalog
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub(crate) fn enter_phase(&mut self, phase: Phase) {
		self.phase = phase;
	}

	fn admit(&mut self, group: &str, key: &str) -> bool {
		if self.catalog.contains_key(key) {
			return true;
		}
		tracing::warn!(
			domain = "groups",
			group,
			key,
			phase = %self.phase,
			"unknown option key in group; membership dropped",
		);
		self.diagnostics.push(GroupDiagnostic::UnknownOptionKey {
			phase: self.phase,
			group: group.to_string(),
			key: key.to_string(),
		});
		false
	}

	fn group_entry(&mut self, name: &str) -> &mut Group {
		self.groups
			.entry(name.to_string())
			.or_insert_with(|| Group::new(name.to_string()))
	}

	/// Creates an empty group; returns false if it already exists.
	pub fn create(&mut self, name: impl Into<String>) -> bool {
		let name = name.into();
		if self.groups.contains_key(&name) {
			return false;
		}
		self.groups.insert(name.clone(), Group::new(name));
		true
	}

	/// Appends `key` to `group`, creating the group if needed.
	///
	/// Returns true if the membership was added. Unknown keys are dropped
	/// with a diagnostic; keys already in the group are left in place.
	pub fn add(&mut self, group: &str, key: impl Into<String>) -> bool {
		let key = key.into();
		let admitted = self.admit(group, &key);
		let entry = self.group_entry(group);
		admitted && entry.push_unique(key)
	}

	/// Appends every key in order; returns how many were added.
	pub fn extend<I, S>(&mut self, group: &str, keys: I) -> usize
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.group_entry(group);
		let mut added = 0;
		for key in keys {
			if self.add(group, key) {
				added += 1;
			}
		}
		added
	}

	/// Inserts a whole group under `name`, replacing any group of that name
	/// in place. Returns the replaced group.
	pub fn insert_group<I, S>(&mut self, name: impl Into<String>, keys: I) -> Option<Group>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let name = name.into();
		let mut group = Group::new(name.clone());
		if let Some(existing) = self.groups.get(&name) {
			group.start_collapsed = existing.start_collapsed;
		}
		for key in keys {
			let key = key.into();
			if self.admit(&name, &key) {
				group.push_unique(key);
			}
		}
		self.groups.insert(name, group)
	}

	/// Removes `key` from `group`; returns true if it was a member.
	pub fn remove_member(&mut self, group: &str, key: &str) -> bool {
		let Some(group) = self.groups.get_mut(group) else {
			return false;
		};
		let before = group.members.len();
		group.members.retain(|member| member != key);
		group.members.len() != before
	}

	/// Moves `key` to `index` within `group`, clamping past-the-end indices.
	pub fn move_member(&mut self, group: &str, key: &str, index: usize) -> bool {
		let Some(group) = self.groups.get_mut(group) else {
			return false;
		};
		let Some(from) = group.members.iter().position(|member| member == key) else {
			return false;
		};
		let member = group.members.remove(from);
		let to = index.min(group.members.len());
		group.members.insert(to, member);
		true
	}

	/// Renames a group in place. Fails if `from` is missing or `to` exists.
	pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
		let to = to.into();
		if self.groups.contains_key(&to) {
			return false;
		}
		let Some((index, _, mut group)) = self.groups.shift_remove_full(from) else {
			return false;
		};
		group.name = to.clone();
		self.groups.shift_insert(index, to, group);
		true
	}

	/// Appends the members of `from` to `into` and removes `from`.
	///
	/// `into` is created at the end if it does not exist yet.
	pub fn merge(&mut self, from: &str, into: &str) -> bool {
		if from == into {
			return false;
		}
		let Some(source) = self.groups.shift_remove(from) else {
			return false;
		};
		let target = self.group_entry(into);
		for key in source.members {
			target.push_unique(key);
		}
		true
	}

	pub fn remove_group(&mut self, name: &str) -> Option<Group> {
		self.groups.shift_remove(name)
	}

	pub fn set_collapsed(&mut self, name: &str, collapsed: bool) -> bool {
		match self.groups.get_mut(name) {
			Some(group) => {
				group.start_collapsed = collapsed;
				true
			}
			None => false,
		}
	}

	pub fn get(&self, name: &str) -> Option<&Group> {
		self.groups.get(name)
	}

	pub fn contains_group(&self, name: &str) -> bool {
		self.groups.contains_key(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Group> {
		self.groups.values()
	}

	pub fn len(&self) -> usize {
		self.groups.len()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Catalog keys that belong to no group yet, in catalog order.
	pub fn ungrouped_keys(&self) -> Vec<&'c str> {
		self.catalog
			.keys()
			.filter(|key| !self.groups.values().any(|group| group.contains(key)))
			.collect()
	}

	pub fn diagnostics(&self) -> &[GroupDiagnostic] {
		&self.diagnostics
	}

	/// Freezes the groups.
	pub fn finalize(self) -> GroupingOutcome {
		tracing::debug!(
			domain = "groups",
			count = self.groups.len(),
			dropped = self.diagnostics.len(),
			"group registry finalized",
		);
		GroupingOutcome {
			groups: GroupCatalog { groups: self.groups },
			diagnostics: self.diagnostics,
		}
	}
}

/// Frozen groups plus the memberships dropped while assembling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingOutcome {
	pub groups: GroupCatalog,
	pub diagnostics: Vec<GroupDiagnostic>,
}

/// Finalized, read-only groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCatalog {
	groups: IndexMap<String, Group>,
}

impl GroupCatalog {
	pub fn get(&self, name: &str) -> Option<&Group> {
		self.groups.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Group> {
		self.groups.values()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.groups.keys().map(String::as_str)
	}

	/// Groups listing `key`, in group order.
	pub fn groups_containing<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Group> + 'a {
		self.groups.values().filter(move |group| group.contains(key))
	}

	pub fn len(&self) -> usize {
		self.groups.len()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
}

impl Serialize for GroupCatalog {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self.groups.values())
	}
}
