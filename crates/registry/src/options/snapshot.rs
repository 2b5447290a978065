use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::registry::Override;
use crate::error::{CatalogError, Result};
use crate::options::OptionDef;

/// Finalized, read-only option catalog.
///
/// Equality compares the key to definition mapping and ignores iteration
/// order and the override log.
#[derive(Debug, Clone, Default)]
pub struct OptionCatalog {
	options: IndexMap<String, OptionDef>,
	overrides: Vec<Override>,
}

impl OptionCatalog {
	pub(crate) fn new(options: IndexMap<String, OptionDef>, overrides: Vec<Override>) -> Self {
		Self { options, overrides }
	}

	#[inline]
	pub fn get(&self, key: &str) -> Option<&OptionDef> {
		self.options.get(key)
	}

	/// Like [`OptionCatalog::get`], failing with [`CatalogError::KeyNotFound`].
	pub fn require(&self, key: &str) -> Result<&OptionDef> {
		self.get(key).ok_or_else(|| CatalogError::key_not_found(key))
	}

	#[inline]
	pub fn contains_key(&self, key: &str) -> bool {
		self.options.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.options.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDef)> {
		self.options.iter().map(|(key, def)| (key.as_str(), def))
	}

	/// Overwrites that happened while the catalog was assembled.
	pub fn overrides(&self) -> &[Override] {
		&self.overrides
	}
}

impl PartialEq for OptionCatalog {
	fn eq(&self, other: &Self) -> bool {
		self.options == other.options
	}
}

impl Eq for OptionCatalog {}

impl Serialize for OptionCatalog {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.options.serialize(serializer)
	}
}

impl<'a> IntoIterator for &'a OptionCatalog {
	type Item = (&'a String, &'a OptionDef);
	type IntoIter = indexmap::map::Iter<'a, String, OptionDef>;

	fn into_iter(self) -> Self::IntoIter {
		self.options.iter()
	}
}
