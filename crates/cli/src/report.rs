//! Human and JSON renderings of a built catalog.

use std::fmt::Write;

use optreg_registry::{Catalog, GroupCatalog, GroupDiagnostic, OptionCatalog, OptionDef, OptionKind, PhaseRecord};
use serde::Serialize;

#[derive(Serialize)]
struct Listing<'a> {
	options: &'a OptionCatalog,
	groups: &'a GroupCatalog,
	diagnostics: &'a [GroupDiagnostic],
	records: &'a [PhaseRecord],
}

pub fn to_json(catalog: &Catalog) -> serde_json::Result<String> {
	serde_json::to_string_pretty(&Listing {
		options: &catalog.options,
		groups: &catalog.groups,
		diagnostics: &catalog.diagnostics,
		records: &catalog.records,
	})
}

/// Groups in order, each followed by its options, then anything ungrouped.
pub fn render_listing(catalog: &Catalog) -> String {
	let mut out = String::new();
	for group in catalog.groups.iter() {
		let folded = if group.start_collapsed() { " (collapsed)" } else { "" };
		let _ = writeln!(out, "{}{folded}", group.name());
		for key in group.members() {
			if let Some(def) = catalog.options.get(key) {
				let _ = writeln!(out, "  {}", describe(key, def));
			}
		}
	}

	let ungrouped: Vec<_> = catalog
		.options
		.iter()
		.filter(|(key, _)| catalog.groups.groups_containing(key).next().is_none())
		.collect();
	if !ungrouped.is_empty() {
		let _ = writeln!(out, "(ungrouped)");
		for (key, def) in ungrouped {
			let _ = writeln!(out, "  {}", describe(key, def));
		}
	}
	out
}

fn describe(key: &str, def: &OptionDef) -> String {
	let mut line = format!("{key} [{}] \"{}\" default={}", def.kind.name(), def.display_name, def.default);
	match &def.kind {
		OptionKind::Range(spec) => {
			let _ = write!(line, " range={}..={}", spec.range_start, spec.range_end);
		}
		OptionKind::NamedRange(spec) => {
			let _ = write!(line, " range={}..={}", spec.range_start, spec.range_end);
			if !spec.special_range_names.is_empty() {
				let names: Vec<_> = spec.special_range_names.iter().map(|(name, value)| format!("{name}={value}")).collect();
				let _ = write!(line, " special={}", names.join(","));
			}
		}
		OptionKind::Choice(spec) | OptionKind::TextChoice(spec) => {
			let names: Vec<_> = spec.options.keys().map(String::as_str).collect();
			let _ = write!(line, " choices={}", names.join("|"));
		}
		OptionKind::Toggle | OptionKind::DefaultOnToggle | OptionKind::FreeText => {}
	}
	line
}

/// Summary printed by `check`: counts, per-phase records and warnings.
pub fn render_check(catalog: &Catalog) -> String {
	let mut out = String::new();
	for record in &catalog.records {
		let counts = record.counts;
		let _ = writeln!(
			out,
			"{:<20} {:<24} +{} ~{} -{}",
			record.phase.as_str(),
			record.contributor.to_string(),
			counts.inserted,
			counts.replaced,
			counts.dropped,
		);
	}
	for overwrite in catalog.options.overrides() {
		let _ = writeln!(out, "note: {} defined in {} was replaced in {}", overwrite.key, overwrite.replaced, overwrite.by);
	}
	for diagnostic in &catalog.diagnostics {
		let _ = writeln!(out, "warning: {diagnostic}");
	}
	let _ = writeln!(
		out,
		"ok: {} options, {} groups, {} warnings",
		catalog.options.len(),
		catalog.groups.len(),
		catalog.diagnostics.len(),
	);
	out
}
