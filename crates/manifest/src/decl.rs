//! Serde shapes of the manifest file.

use indexmap::IndexMap;
use optreg_registry::{ChoiceSpec, NamedRangeSpec, OptionDef, OptionKind, OptionValue, RANDOM, RangeSpec};
use serde::Deserialize;

use crate::error::{ManifestError, Result};

/// A whole manifest file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
	/// Plugin id; loaders fall back to the file stem.
	pub id: Option<String>,
	#[serde(default)]
	pub options: IndexMap<String, OptionDecl>,
	#[serde(default)]
	pub overrides: IndexMap<String, OverrideDecl>,
	#[serde(default)]
	pub groups: IndexMap<String, GroupDecl>,
}

/// Whether a declaration runs before or after the host's built-ins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
	#[default]
	Before,
	After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindName {
	Toggle,
	DefaultOnToggle,
	Range,
	NamedRange,
	Choice,
	TextChoice,
	FreeText,
}

impl KindName {
	const fn as_str(self) -> &'static str {
		match self {
			Self::Toggle => "toggle",
			Self::DefaultOnToggle => "default_on_toggle",
			Self::Range => "range",
			Self::NamedRange => "named_range",
			Self::Choice => "choice",
			Self::TextChoice => "text_choice",
			Self::FreeText => "free_text",
		}
	}

	const fn has_bounds(self) -> bool {
		matches!(self, Self::Range | Self::NamedRange)
	}

	const fn has_choices(self) -> bool {
		matches!(self, Self::Choice | Self::TextChoice)
	}
}

/// A new option declared by the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDecl {
	pub kind: KindName,
	/// Defaults to the option key.
	pub display_name: Option<String>,
	#[serde(default)]
	pub documentation: String,
	pub range_start: Option<i64>,
	pub range_end: Option<i64>,
	pub default: Option<OptionValue>,
	#[serde(default)]
	pub special_range_names: IndexMap<String, i64>,
	#[serde(default)]
	pub choices: IndexMap<String, i64>,
	#[serde(default)]
	pub aliases: IndexMap<String, i64>,
	#[serde(default)]
	pub phase: Placement,
}

impl OptionDecl {
	/// Builds the definition, filling in the kind's implicit default.
	pub fn to_def(&self, key: &str) -> Result<OptionDef> {
		self.reject_foreign_fields(key)?;

		let kind = match self.kind {
			KindName::Toggle => OptionKind::Toggle,
			KindName::DefaultOnToggle => OptionKind::DefaultOnToggle,
			KindName::Range => OptionKind::Range(RangeSpec::new(
				required(self.range_start, key, "range_start")?,
				required(self.range_end, key, "range_end")?,
			)),
			KindName::NamedRange => OptionKind::NamedRange(NamedRangeSpec {
				range_start: required(self.range_start, key, "range_start")?,
				range_end: required(self.range_end, key, "range_end")?,
				special_range_names: self.special_range_names.clone(),
			}),
			KindName::Choice | KindName::TextChoice => {
				if self.choices.is_empty() {
					return Err(missing(key, "choices"));
				}
				let spec = ChoiceSpec {
					options: self.choices.clone(),
					aliases: self.aliases.clone(),
				};
				if self.kind == KindName::Choice {
					OptionKind::Choice(spec)
				} else {
					OptionKind::TextChoice(spec)
				}
			}
			KindName::FreeText => OptionKind::FreeText,
		};

		let default = match self.default.clone() {
			Some(value) => literal_random(&kind, value),
			None => implicit_default(&kind),
		};

		Ok(OptionDef {
			display_name: self.display_name.clone().unwrap_or_else(|| key.to_string()),
			documentation: self.documentation.clone(),
			default,
			kind,
		})
	}

	fn reject_foreign_fields(&self, key: &str) -> Result<()> {
		let unexpected = |field| ManifestError::UnexpectedField {
			key: key.to_string(),
			field,
			kind: self.kind.as_str(),
		};
		if !self.kind.has_bounds() {
			if self.range_start.is_some() {
				return Err(unexpected("range_start"));
			}
			if self.range_end.is_some() {
				return Err(unexpected("range_end"));
			}
		}
		if self.kind != KindName::NamedRange && !self.special_range_names.is_empty() {
			return Err(unexpected("special_range_names"));
		}
		if !self.kind.has_choices() {
			if !self.choices.is_empty() {
				return Err(unexpected("choices"));
			}
			if !self.aliases.is_empty() {
				return Err(unexpected("aliases"));
			}
		}
		Ok(())
	}
}

fn missing(key: &str, field: &'static str) -> ManifestError {
	ManifestError::MissingField { key: key.to_string(), field }
}

fn required(value: Option<i64>, key: &str, field: &'static str) -> Result<i64> {
	value.ok_or_else(|| missing(key, field))
}

/// Reads "random" as plain text where it names a value: any free text, or
/// a choice declaring an option called "random".
fn literal_random(kind: &OptionKind, value: OptionValue) -> OptionValue {
	let names_option = match kind {
		OptionKind::FreeText => true,
		OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => spec.options.contains_key(RANDOM),
		_ => false,
	};
	match value {
		OptionValue::Random if names_option => OptionValue::Text(RANDOM.to_string()),
		value => value,
	}
}

fn implicit_default(kind: &OptionKind) -> OptionValue {
	match kind {
		OptionKind::Toggle => OptionValue::Bool(false),
		OptionKind::DefaultOnToggle => OptionValue::Bool(true),
		OptionKind::Range(spec) => OptionValue::Int(spec.range_start),
		OptionKind::NamedRange(spec) => OptionValue::Int(spec.range_start),
		OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => spec
			.options
			.keys()
			.next()
			.map_or(OptionValue::Int(0), |name| OptionValue::Text(name.clone())),
		OptionKind::FreeText => OptionValue::Text(String::new()),
	}
}

/// Field edits applied to an existing option after the built-ins.
///
/// `choices` and `aliases` are merged into the existing tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideDecl {
	pub display_name: Option<String>,
	pub documentation: Option<String>,
	pub default: Option<OptionValue>,
	pub range_start: Option<i64>,
	pub range_end: Option<i64>,
	#[serde(default)]
	pub special_range_names: IndexMap<String, i64>,
	#[serde(default)]
	pub choices: IndexMap<String, i64>,
	#[serde(default)]
	pub aliases: IndexMap<String, i64>,
}

impl OverrideDecl {
	/// Applies the edits in place. Fields that do not fit the option's kind
	/// are skipped with a warning; finalization still validates the result.
	pub fn apply(&self, key: &str, def: &mut OptionDef) {
		if let Some(display_name) = &self.display_name {
			def.display_name.clone_from(display_name);
		}
		if let Some(documentation) = &self.documentation {
			def.documentation.clone_from(documentation);
		}

		let kind = def.kind.name();
		match &mut def.kind {
			OptionKind::Range(spec) => {
				apply_bounds(&mut spec.range_start, &mut spec.range_end, self.range_start, self.range_end);
			}
			OptionKind::NamedRange(spec) => {
				apply_bounds(&mut spec.range_start, &mut spec.range_end, self.range_start, self.range_end);
				spec.special_range_names.extend(self.special_range_names.clone());
			}
			OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => {
				spec.options.extend(self.choices.clone());
				spec.aliases.extend(self.aliases.clone());
			}
			OptionKind::Toggle | OptionKind::DefaultOnToggle | OptionKind::FreeText => {}
		}
		if let Some(default) = &self.default {
			def.default = literal_random(&def.kind, default.clone());
		}

		for field in self.foreign_fields(&def.kind) {
			tracing::warn!(domain = "manifest", key, field, kind, "override field ignored for option kind");
		}
	}

	fn foreign_fields(&self, kind: &OptionKind) -> Vec<&'static str> {
		let bounded = matches!(kind, OptionKind::Range(_) | OptionKind::NamedRange(_));
		let named = matches!(kind, OptionKind::NamedRange(_));
		let choices = matches!(kind, OptionKind::Choice(_) | OptionKind::TextChoice(_));
		[
			("range_start", !bounded && self.range_start.is_some()),
			("range_end", !bounded && self.range_end.is_some()),
			("special_range_names", !named && !self.special_range_names.is_empty()),
			("choices", !choices && !self.choices.is_empty()),
			("aliases", !choices && !self.aliases.is_empty()),
		]
		.into_iter()
		.filter_map(|(field, foreign)| foreign.then_some(field))
		.collect()
	}
}

fn apply_bounds(start: &mut i64, end: &mut i64, new_start: Option<i64>, new_end: Option<i64>) {
	if let Some(value) = new_start {
		*start = value;
	}
	if let Some(value) = new_end {
		*end = value;
	}
}

/// Group membership declared by the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDecl {
	#[serde(default)]
	pub options: Vec<String>,
	pub collapsed: Option<bool>,
	#[serde(default)]
	pub phase: Placement,
	/// Replace an existing group of the same name instead of appending.
	#[serde(default)]
	pub replace: bool,
}
