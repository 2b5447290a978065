use optreg_registry::{CatalogBuilder, CatalogError, ChoiceSpec, HostCatalog, OptionDef, OptionKind, OptionRegistry, OptionValue};
use pretty_assertions::assert_eq;

use super::*;

fn def(plugin: &ManifestPlugin, key: &str) -> OptionDef {
	plugin
		.options()
		.find_map(|(k, def)| (k == key).then(|| def.clone()))
		.unwrap_or_else(|| panic!("option {key} not declared"))
}

#[test]
fn implicit_defaults_follow_kind() {
	let plugin = parse_manifest_str(
		r#"
		id = "defaults"

		[options.toggle]
		kind = "toggle"

		[options.on]
		kind = "default_on_toggle"

		[options.amount]
		kind = "range"
		range_start = 3
		range_end = 9

		[options.level]
		kind = "named_range"
		range_start = 1
		range_end = 60
		special_range_names = { max = 60 }

		[options.faction]
		kind = "choice"
		choices = { alliance = 0, horde = 1 }

		[options.name]
		kind = "free_text"
		"#,
	)
	.unwrap();

	assert_eq!(plugin.id(), "defaults");
	assert_eq!(def(&plugin, "toggle").default, OptionValue::Bool(false));
	assert_eq!(def(&plugin, "on").default, OptionValue::Bool(true));
	assert_eq!(def(&plugin, "amount").default, OptionValue::Int(3));
	assert_eq!(def(&plugin, "level").default, OptionValue::Int(1));
	assert_eq!(def(&plugin, "faction").default, OptionValue::Text("alliance".into()));
	assert_eq!(def(&plugin, "name").default, OptionValue::Text(String::new()));
	assert_eq!(def(&plugin, "toggle").display_name, "toggle");
}

#[test]
fn explicit_fields_are_kept() {
	let plugin = parse_manifest_str(
		r#"
		id = "explicit"

		[options.faction]
		kind = "text_choice"
		display_name = "Faction"
		documentation = "Which side to play."
		choices = { alliance = 0, horde = 1 }
		aliases = { ally = 0 }
		default = "random"

		[options.motto]
		kind = "free_text"
		default = "random"
		"#,
	)
	.unwrap();

	let faction = def(&plugin, "faction");
	assert_eq!(faction.display_name, "Faction");
	assert_eq!(faction.documentation, "Which side to play.");
	assert_eq!(faction.default, OptionValue::Random);
	assert_eq!(
		faction.kind,
		OptionKind::TextChoice(ChoiceSpec::new([("alliance", 0), ("horde", 1)]).with_alias("ally", 0))
	);
	assert_eq!(def(&plugin, "motto").default, OptionValue::Text("random".into()));
}

#[test]
fn range_without_bounds_is_missing_field() {
	let err = parse_manifest_str(
		r#"
		id = "bad"
		[options.amount]
		kind = "range"
		range_end = 10
		"#,
	)
	.unwrap_err();

	assert!(matches!(err, ManifestError::MissingField { ref key, field: "range_start" } if key == "amount"));
}

#[test]
fn choice_without_choices_is_missing_field() {
	let err = parse_manifest_str("id = \"bad\"\n[options.goal]\nkind = \"choice\"\n").unwrap_err();
	assert!(matches!(err, ManifestError::MissingField { field: "choices", .. }));
}

#[test]
fn foreign_field_is_rejected() {
	let err = parse_manifest_str("id = \"bad\"\n[options.flag]\nkind = \"toggle\"\nchoices = { a = 0 }\n").unwrap_err();
	assert_eq!(err.to_string(), "option 'flag' sets 'choices', which a toggle option does not use");
}

#[test]
fn unknown_fields_fail_to_parse() {
	let err = parse_manifest_str("id = \"bad\"\n[options.flag]\nkind = \"toggle\"\ncolour = \"red\"\n").unwrap_err();
	assert!(matches!(err, ManifestError::Parse(_)));

	let err = parse_manifest_str("id = \"bad\"\n[options.flag]\nkind = \"slider\"\n").unwrap_err();
	assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn parsed_manifest_needs_id() {
	let err = parse_manifest_str("[options.flag]\nkind = \"toggle\"\n").unwrap_err();
	assert!(matches!(err, ManifestError::MissingField { field: "id", .. }));
}

struct Host;

impl HostCatalog for Host {
	fn define_options(&self, options: &mut OptionRegistry) -> optreg_registry::Result<()> {
		options.insert("goal", OptionDef::choice("Goal", ChoiceSpec::new([("leveling", 0)]), 0));
		options.insert("amount", OptionDef::toggle("Amount", false));
		Ok(())
	}

	fn assign_groups(&self, groups: &mut optreg_registry::GroupRegistry<'_>) {
		groups.extend("Game Options", ["goal"]);
	}
}

const PHASED: &str = r#"
id = "phased"

[options.amount]
kind = "range"
display_name = "Seeded Amount"
range_start = 1
range_end = 10

[options.bonus]
kind = "toggle"
phase = "after"

[overrides.goal]
display_name = "Selected Goal"
documentation = "What to do."
choices = { gold_hunt = 1 }
default = 1

[groups."Extras"]
options = ["bonus", "missing"]

[groups."Game Options"]
options = ["amount"]
collapsed = true
phase = "after"
"#;

#[test]
fn declarations_run_in_their_phases() {
	let plugin = parse_manifest_str(PHASED).unwrap();
	let catalog = CatalogBuilder::new(Host).with_plugin(plugin).unwrap().build().unwrap();

	assert_eq!(catalog.options.require("amount").unwrap().display_name, "Amount");
	assert!(catalog.options.contains_key("bonus"));

	let goal = catalog.options.require("goal").unwrap();
	assert_eq!(goal.display_name, "Selected Goal");
	assert_eq!(goal.documentation, "What to do.");
	assert_eq!(goal.default, OptionValue::Int(1));
	assert_eq!(goal.choices().unwrap().code_of("gold_hunt"), Some(1));

	assert_eq!(catalog.groups.names().collect::<Vec<_>>(), vec!["Extras", "Game Options"]);
	assert_eq!(catalog.groups.get("Extras").unwrap().members(), ["bonus"]);
	let game = catalog.groups.get("Game Options").unwrap();
	assert_eq!(game.members(), ["goal", "amount"]);
	assert!(game.start_collapsed());
	assert_eq!(catalog.diagnostics.len(), 1);
}

#[test]
fn replace_group_discards_existing_members() {
	let plugin = parse_manifest_str(
		"id = \"swap\"\n[groups.\"Game Options\"]\noptions = [\"amount\"]\nphase = \"after\"\nreplace = true\n",
	)
	.unwrap();
	let catalog = CatalogBuilder::new(Host).with_plugin(plugin).unwrap().build().unwrap();

	assert_eq!(catalog.groups.get("Game Options").unwrap().members(), ["amount"]);
}

#[test]
fn override_of_unknown_key_fails_build() {
	let plugin = parse_manifest_str("id = \"ghost\"\n[overrides.gold_hunt_amount]\ndefault = 5\n").unwrap();
	let err = CatalogBuilder::new(Host).with_plugin(plugin).unwrap().build().unwrap_err();

	assert!(matches!(&err, CatalogError::Plugin { plugin, .. } if plugin == "ghost"));
	assert_eq!(err.key(), Some("gold_hunt_amount"));
}

#[test]
fn choice_option_named_random_is_not_the_sentinel() {
	let plugin = parse_manifest_str(
		r#"
		id = "modes"

		[options.mode]
		kind = "choice"
		choices = { random = 0, fixed = 1 }
		default = "random"

		[options.side]
		kind = "choice"
		choices = { left = 0, right = 1 }
		default = "random"
		"#,
	)
	.unwrap();
	let catalog = CatalogBuilder::new(optreg_registry::NoBuiltins).with_plugin(plugin).unwrap().build().unwrap();

	let mode = catalog.options.require("mode").unwrap();
	assert_eq!(mode.default, OptionValue::Text("random".into()));
	assert_eq!(mode.default_code(), Some(0));
	assert_eq!(mode.resolve_default(|_| OptionValue::Int(1)), OptionValue::Text("random".into()));

	let side = catalog.options.require("side").unwrap();
	assert_eq!(side.default, OptionValue::Random);
	assert_eq!(side.default_code(), None);
}

#[test]
fn override_adding_random_option_keeps_default_literal() {
	let plugin = parse_manifest_str(
		"id = \"late\"\n[overrides.goal]\nchoices = { random = 5 }\ndefault = \"random\"\n",
	)
	.unwrap();
	let catalog = CatalogBuilder::new(Host).with_plugin(plugin).unwrap().build().unwrap();

	let goal = catalog.options.require("goal").unwrap();
	assert_eq!(goal.default, OptionValue::Text("random".into()));
	assert_eq!(goal.default_code(), Some(5));
}

#[test]
fn random_marker_table_reads_as_sentinel() {
	let plugin = parse_manifest_str(
		r#"
		id = "marked"

		[options.side]
		kind = "choice"
		choices = { left = 0, right = 1 }
		default = { random = true }
		"#,
	)
	.unwrap();

	assert_eq!(def(&plugin, "side").default, OptionValue::Random);
	assert!(parse_manifest_str("id = \"bad\"\n[options.x]\nkind = \"toggle\"\ndefault = { random = false }\n").is_err());
}
