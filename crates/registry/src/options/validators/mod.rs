//! Structural validation of option definitions.
//!
//! These run when an [`OptionRegistry`](crate::options::OptionRegistry) is
//! finalized, never on insertion: later phases may still repair a definition.

use std::collections::HashMap;

use crate::core::OptionValue;
use crate::options::{ChoiceSpec, NamedRangeSpec, OptionDef, OptionKind, RangeSpec};

/// A broken structural rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
	#[error("invalid key: {reason}")]
	InvalidKey { reason: &'static str },

	#[error("default type mismatch: expected {expected}, got {got}")]
	DefaultTypeMismatch { expected: &'static str, got: &'static str },

	#[error("default out of range: {default} not in [{start}, {end}]")]
	DefaultOutOfRange { default: i64, start: i64, end: i64 },

	#[error("range start exceeds range end: {start} > {end}")]
	InvertedRange { start: i64, end: i64 },

	#[error("choice declares no options")]
	EmptyChoice,

	#[error("duplicate choice code {code}: '{first}' and '{second}'")]
	DuplicateChoiceCode { code: i64, first: String, second: String },

	#[error("alias shadows option: '{alias}'")]
	AliasShadowsOption { alias: String },

	#[error("alias targets unknown code: '{alias}' -> {code}")]
	AliasUnknownCode { alias: String, code: i64 },

	#[error("unknown default choice: '{default}'")]
	UnknownDefaultChoice { default: String },

	#[error("unknown special range name: '{name}'")]
	UnknownSpecialRangeName { name: String },
}

/// Validates a registry key: non-empty, no whitespace.
pub fn validate_key(key: &str) -> Result<(), Violation> {
	if key.is_empty() {
		return Err(Violation::InvalidKey { reason: "key is empty" });
	}
	if key.chars().any(char::is_whitespace) {
		return Err(Violation::InvalidKey {
			reason: "key contains whitespace",
		});
	}
	Ok(())
}

/// Validates a definition against its kind's constraints.
pub fn validate_def(def: &OptionDef) -> Result<(), Violation> {
	match &def.kind {
		OptionKind::Toggle | OptionKind::DefaultOnToggle => bool_default(&def.default),
		OptionKind::Range(spec) => range(spec, &def.default),
		OptionKind::NamedRange(spec) => named_range(spec, &def.default),
		OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => choice(spec, &def.default),
		OptionKind::FreeText => text_default(&def.default),
	}
}

fn bool_default(default: &OptionValue) -> Result<(), Violation> {
	match default {
		OptionValue::Bool(_) => Ok(()),
		other => Err(mismatch("bool", other)),
	}
}

fn text_default(default: &OptionValue) -> Result<(), Violation> {
	match default {
		OptionValue::Text(_) => Ok(()),
		other => Err(mismatch("text", other)),
	}
}

fn bounds(spec: RangeSpec) -> Result<(), Violation> {
	if spec.range_start > spec.range_end {
		return Err(Violation::InvertedRange {
			start: spec.range_start,
			end: spec.range_end,
		});
	}
	Ok(())
}

fn in_bounds(spec: RangeSpec, value: i64) -> Result<(), Violation> {
	if spec.contains(value) {
		Ok(())
	} else {
		Err(Violation::DefaultOutOfRange {
			default: value,
			start: spec.range_start,
			end: spec.range_end,
		})
	}
}

fn range(spec: &RangeSpec, default: &OptionValue) -> Result<(), Violation> {
	bounds(*spec)?;
	match default {
		OptionValue::Int(value) => in_bounds(*spec, *value),
		other => Err(mismatch("int", other)),
	}
}

fn named_range(spec: &NamedRangeSpec, default: &OptionValue) -> Result<(), Violation> {
	bounds(spec.bounds())?;
	let value = match default {
		OptionValue::Int(value) => *value,
		OptionValue::Text(name) => *spec
			.special_range_names
			.get(name)
			.ok_or_else(|| Violation::UnknownSpecialRangeName { name: name.clone() })?,
		other => return Err(mismatch("int or special range name", other)),
	};
	in_bounds(spec.bounds(), value)
}

fn choice(spec: &ChoiceSpec, default: &OptionValue) -> Result<(), Violation> {
	if spec.options.is_empty() {
		return Err(Violation::EmptyChoice);
	}

	let mut owners: HashMap<i64, &str> = HashMap::with_capacity(spec.options.len());
	for (name, &code) in &spec.options {
		if let Some(first) = owners.insert(code, name) {
			return Err(Violation::DuplicateChoiceCode {
				code,
				first: first.to_string(),
				second: name.clone(),
			});
		}
	}

	for (alias, &code) in &spec.aliases {
		if spec.options.contains_key(alias) {
			return Err(Violation::AliasShadowsOption { alias: alias.clone() });
		}
		if !owners.contains_key(&code) {
			return Err(Violation::AliasUnknownCode { alias: alias.clone(), code });
		}
	}

	match default {
		OptionValue::Random => Ok(()),
		OptionValue::Text(name) if spec.options.contains_key(name) => Ok(()),
		OptionValue::Text(_) if default.is_random() => Ok(()),
		OptionValue::Text(name) => Err(Violation::UnknownDefaultChoice { default: name.clone() }),
		OptionValue::Int(code) if owners.contains_key(code) => Ok(()),
		OptionValue::Int(code) => Err(Violation::UnknownDefaultChoice { default: code.to_string() }),
		other => Err(mismatch("choice name or code", other)),
	}
}

fn mismatch(expected: &'static str, got: &OptionValue) -> Violation {
	Violation::DefaultTypeMismatch {
		expected,
		got: got.type_name(),
	}
}
