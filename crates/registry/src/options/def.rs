use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{OptionValue, RANDOM};

/// Definition of a configurable option.
///
/// Fields stay public so later phases can edit a single attribute in place;
/// nothing is checked until the owning registry is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDef {
	/// Name shown to players.
	pub display_name: String,
	/// Help text shown next to the option.
	pub documentation: String,
	/// Default value; its valid shape depends on [`OptionDef::kind`].
	pub default: OptionValue,
	/// Kind plus kind-specific constraints.
	#[serde(flatten)]
	pub kind: OptionKind,
}

/// The kind of an option, carrying only the fields that kind uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionKind {
	/// On/off switch, default off unless overridden.
	Toggle,
	/// On/off switch that defaults to on.
	DefaultOnToggle,
	/// Integer within inclusive bounds.
	Range(RangeSpec),
	/// Integer within inclusive bounds, with named special values.
	NamedRange(NamedRangeSpec),
	/// One of an enumerated set of named codes.
	Choice(ChoiceSpec),
	/// Like [`OptionKind::Choice`], but the host accepts custom text values.
	TextChoice(ChoiceSpec),
	/// Arbitrary text.
	FreeText,
}

impl OptionKind {
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Toggle => "toggle",
			Self::DefaultOnToggle => "default_on_toggle",
			Self::Range(_) => "range",
			Self::NamedRange(_) => "named_range",
			Self::Choice(_) => "choice",
			Self::TextChoice(_) => "text_choice",
			Self::FreeText => "free_text",
		}
	}
}

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSpec {
	pub range_start: i64,
	pub range_end: i64,
}

impl RangeSpec {
	pub const fn new(range_start: i64, range_end: i64) -> Self {
		Self { range_start, range_end }
	}

	pub const fn contains(&self, value: i64) -> bool {
		self.range_start <= value && value <= self.range_end
	}
}

/// Inclusive integer bounds plus named special values.
///
/// Special values may lie outside the bounds; only the default is held to
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRangeSpec {
	pub range_start: i64,
	pub range_end: i64,
	pub special_range_names: IndexMap<String, i64>,
}

impl NamedRangeSpec {
	pub fn new<I, S>(range_start: i64, range_end: i64, special_range_names: I) -> Self
	where
		I: IntoIterator<Item = (S, i64)>,
		S: Into<String>,
	{
		Self {
			range_start,
			range_end,
			special_range_names: special_range_names.into_iter().map(|(name, value)| (name.into(), value)).collect(),
		}
	}

	pub const fn bounds(&self) -> RangeSpec {
		RangeSpec::new(self.range_start, self.range_end)
	}
}

/// Enumerated choices: symbolic name to integer code, plus aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChoiceSpec {
	pub options: IndexMap<String, i64>,
	pub aliases: IndexMap<String, i64>,
}

impl ChoiceSpec {
	pub fn new<I, S>(options: I) -> Self
	where
		I: IntoIterator<Item = (S, i64)>,
		S: Into<String>,
	{
		Self {
			options: options.into_iter().map(|(name, code)| (name.into(), code)).collect(),
			aliases: IndexMap::new(),
		}
	}

	/// Adds an alternate name for an existing code.
	pub fn with_alias(mut self, alias: impl Into<String>, code: i64) -> Self {
		self.aliases.insert(alias.into(), code);
		self
	}

	/// Looks up a code by option name, then by alias.
	pub fn code_of(&self, name: &str) -> Option<i64> {
		self.options.get(name).or_else(|| self.aliases.get(name)).copied()
	}

	/// Returns the first option name declared for `code`.
	pub fn name_of(&self, code: i64) -> Option<&str> {
		self.options.iter().find(|&(_, &c)| c == code).map(|(name, _)| name.as_str())
	}

	pub fn has_code(&self, code: i64) -> bool {
		self.options.values().any(|&c| c == code)
	}
}

impl OptionDef {
	/// Creates a definition with empty documentation.
	pub fn new(display_name: impl Into<String>, kind: OptionKind, default: impl Into<OptionValue>) -> Self {
		Self {
			display_name: display_name.into(),
			documentation: String::new(),
			default: default.into(),
			kind,
		}
	}

	pub fn toggle(display_name: impl Into<String>, default: bool) -> Self {
		Self::new(display_name, OptionKind::Toggle, default)
	}

	pub fn default_on_toggle(display_name: impl Into<String>) -> Self {
		Self::new(display_name, OptionKind::DefaultOnToggle, true)
	}

	pub fn range(display_name: impl Into<String>, range_start: i64, range_end: i64, default: i64) -> Self {
		Self::new(display_name, OptionKind::Range(RangeSpec::new(range_start, range_end)), default)
	}

	pub fn named_range(display_name: impl Into<String>, spec: NamedRangeSpec, default: impl Into<OptionValue>) -> Self {
		Self::new(display_name, OptionKind::NamedRange(spec), default)
	}

	pub fn choice(display_name: impl Into<String>, spec: ChoiceSpec, default: impl Into<OptionValue>) -> Self {
		Self::new(display_name, OptionKind::Choice(spec), default)
	}

	pub fn text_choice(display_name: impl Into<String>, spec: ChoiceSpec, default: impl Into<OptionValue>) -> Self {
		Self::new(display_name, OptionKind::TextChoice(spec), default)
	}

	pub fn free_text(display_name: impl Into<String>, default: impl Into<String>) -> Self {
		Self::new(display_name, OptionKind::FreeText, OptionValue::Text(default.into()))
	}

	pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
		self.documentation = documentation.into();
		self
	}

	/// Returns the choice table for `Choice` and `TextChoice` options.
	pub fn choices(&self) -> Option<&ChoiceSpec> {
		match &self.kind {
			OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => Some(spec),
			_ => None,
		}
	}

	pub fn choices_mut(&mut self) -> Option<&mut ChoiceSpec> {
		match &mut self.kind {
			OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => Some(spec),
			_ => None,
		}
	}

	/// Returns the inclusive bounds for `Range` and `NamedRange` options.
	pub fn bounds(&self) -> Option<RangeSpec> {
		match &self.kind {
			OptionKind::Range(spec) => Some(*spec),
			OptionKind::NamedRange(spec) => Some(spec.bounds()),
			_ => None,
		}
	}

	/// Returns the integer a choice or range default stands for.
	///
	/// `None` for the random sentinel, for unknown names, and for kinds that
	/// carry no integer.
	pub fn default_code(&self) -> Option<i64> {
		if self.names_random_option() {
			return self.choices().and_then(|spec| spec.code_of(RANDOM));
		}
		if self.default.is_random() {
			return None;
		}
		match (&self.kind, &self.default) {
			(OptionKind::Choice(spec) | OptionKind::TextChoice(spec), OptionValue::Text(name)) => spec.code_of(name),
			(OptionKind::NamedRange(spec), OptionValue::Text(name)) => spec.special_range_names.get(name).copied(),
			(OptionKind::Choice(_) | OptionKind::TextChoice(_) | OptionKind::Range(_) | OptionKind::NamedRange(_), OptionValue::Int(code)) => {
				Some(*code)
			}
			_ => None,
		}
	}

	/// Returns the default, asking `on_random` to pick a value for the random
	/// sentinel.
	///
	/// A choice that declares an option named "random" resolves to that
	/// option, whichever spelling the default uses.
	pub fn resolve_default<F>(&self, on_random: F) -> OptionValue
	where
		F: FnOnce(&OptionKind) -> OptionValue,
	{
		if self.names_random_option() {
			OptionValue::Text(RANDOM.to_string())
		} else if self.default.is_random() {
			on_random(&self.kind)
		} else {
			self.default.clone()
		}
	}

	/// True when the default spells "random" and the choice declares an
	/// option of that name; the default then means that option, not the
	/// sentinel.
	pub fn names_random_option(&self) -> bool {
		self.default.is_random() && self.choices().is_some_and(|spec| spec.options.contains_key(RANDOM))
	}
}
