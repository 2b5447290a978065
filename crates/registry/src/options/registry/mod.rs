//! The mutable option registry used during assembly.

use indexmap::IndexMap;
use serde::Serialize;

use super::snapshot::OptionCatalog;
use super::validators::{validate_def, validate_key};
use crate::core::Phase;
use crate::error::{CatalogError, Result};
use crate::options::OptionDef;


/// Result of [`OptionRegistry::insert`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; definition inserted.
	InsertedNew,
	/// Key existed; replaced with the new definition.
	ReplacedExisting,
}

/// A recorded overwrite of one definition by another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Override {
	pub key: String,
	/// Phase that wrote the replaced definition.
	pub replaced: Phase,
	/// Phase that wrote the surviving definition.
	pub by: Phase,
}

/// Running insert/replace totals, used to attribute writes to phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteCounts {
	pub inserted: usize,
	pub replaced: usize,
}

impl WriteCounts {
	pub(crate) fn since(self, before: Self) -> Self {
		Self {
			inserted: self.inserted.saturating_sub(before.inserted),
			replaced: self.replaced.saturating_sub(before.replaced),
		}
	}
}

#[derive(Debug, Clone)]
struct Slot {
	def: OptionDef,
	written_in: Phase,
}

/// Key to definition map, mutable until finalized.
///
/// Iteration follows first-insertion order. Replacing a key keeps its
/// original position; the last writer wins outright, nothing is merged.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
	entries: IndexMap<String, Slot>,
	overrides: Vec<Override>,
	phase: Phase,
	counts: WriteCounts,
}

impl Default for OptionRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl OptionRegistry {
	pub fn new() -> Self {
		Self {
			entries: IndexMap::new(),
			overrides: Vec::new(),
			phase: Phase::PreRegistration,
			counts: WriteCounts::default(),
		}
	}

	/// Phase that subsequent writes are attributed to.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub(crate) fn enter_phase(&mut self, phase: Phase) {
		self.phase = phase;
	}

	pub(crate) fn counts(&self) -> WriteCounts {
		self.counts
	}

	/// Adds `def` under `key`, replacing any existing definition.
	pub fn insert(&mut self, key: impl Into<String>, def: OptionDef) -> InsertAction {
		let key = key.into();
		let phase = self.phase;

		if let Some(slot) = self.entries.get_mut(&key) {
			tracing::debug!(
				domain = "options",
				key = %key,
				replaced = %slot.written_in,
				by = %phase,
				"option definition replaced",
			);
			self.overrides.push(Override {
				key,
				replaced: slot.written_in,
				by: phase,
			});
			*slot = Slot { def, written_in: phase };
			self.counts.replaced += 1;
			return InsertAction::ReplacedExisting;
		}

		tracing::trace!(domain = "options", key = %key, phase = %phase, "option definition inserted");
		self.entries.insert(key, Slot { def, written_in: phase });
		self.counts.inserted += 1;
		InsertAction::InsertedNew
	}

	/// Returns the current definition for `key`.
	pub fn get(&self, key: &str) -> Result<&OptionDef> {
		self.entries
			.get(key)
			.map(|slot| &slot.def)
			.ok_or_else(|| CatalogError::key_not_found(key))
	}

	/// Returns the current definition for `key` for in-place editing.
	///
	/// Fields not touched through the returned reference are preserved.
	pub fn get_mut(&mut self, key: &str) -> Result<&mut OptionDef> {
		self.entries
			.get_mut(key)
			.map(|slot| &mut slot.def)
			.ok_or_else(|| CatalogError::key_not_found(key))
	}

	/// Applies `f` to the definition at `key`.
	pub fn edit<F, R>(&mut self, key: &str, f: F) -> Result<R>
	where
		F: FnOnce(&mut OptionDef) -> R,
	{
		self.get_mut(key).map(f)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDef)> {
		self.entries.iter().map(|(key, slot)| (key.as_str(), &slot.def))
	}

	/// Phase that last wrote `key`.
	pub fn written_in(&self, key: &str) -> Option<Phase> {
		self.entries.get(key).map(|slot| slot.written_in)
	}

	/// Every overwrite so far, oldest first.
	pub fn overrides(&self) -> &[Override] {
		&self.overrides
	}

	/// Validates every definition and freezes the registry.
	///
	/// Definitions are checked in iteration order; the first violation
	/// aborts.
	pub fn finalize(self) -> Result<OptionCatalog> {
		for (key, slot) in &self.entries {
			validate_key(key)
				.and_then(|()| validate_def(&slot.def))
				.map_err(|violation| CatalogError::InvalidOptionDefinition {
					key: key.clone(),
					violation,
				})?;
		}

		tracing::debug!(
			domain = "options",
			count = self.entries.len(),
			overrides = self.overrides.len(),
			"option registry finalized",
		);

		let options = self.entries.into_iter().map(|(key, slot)| (key, slot.def)).collect();
		Ok(OptionCatalog::new(options, self.overrides))
	}
}
