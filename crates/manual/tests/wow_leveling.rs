use optreg_manual::{ManualBuiltins, WOW_LEVELING, keys};
use optreg_registry::{CatalogBuilder, CatalogError, Contributor, OptionKind, OptionValue, Phase, RangeSpec};
use pretty_assertions::assert_eq;

fn build() -> optreg_registry::Catalog {
	CatalogBuilder::new(ManualBuiltins::wow_leveling())
		.with_plugin(WOW_LEVELING)
		.unwrap()
		.build()
		.unwrap()
}

#[test]
fn plugin_options_come_before_builtins() {
	let catalog = build();

	assert_eq!(
		catalog.options.keys().collect::<Vec<_>>(),
		vec![
			keys::GOLD_HUNT_AMOUNT,
			keys::EXPANSION,
			keys::PRE_OR_POST_CATACLYSM,
			keys::FACTION,
			keys::RANDOMIZE_CLASS,
			keys::LEVEL_ITEMS,
			keys::EASIER_TRANSITIONS,
			keys::GOAL,
			keys::INCLUDE_DUNGEONS,
		]
	);
}

#[test]
fn goal_and_dungeons_are_edited_after_builtins() {
	let catalog = build();

	let goal = catalog.options.require(keys::GOAL).unwrap();
	assert_eq!(goal.display_name, "Selected Goal");
	assert_eq!(goal.default, OptionValue::Int(0));
	assert_eq!(goal.default_code(), Some(0));
	assert!(goal.documentation.starts_with("Select your goal for the randomizer."));
	assert_eq!(goal.choices().unwrap().name_of(1), Some("gold_hunt"));

	let dungeons = catalog.options.require(keys::INCLUDE_DUNGEONS).unwrap();
	assert_eq!(dungeons.display_name, "Include Dungeons");
	assert_eq!(dungeons.default, OptionValue::Bool(false));
	assert_eq!(dungeons.kind, OptionKind::DefaultOnToggle);
}

#[test]
fn plugin_definitions_match_the_world() {
	let catalog = build();

	let gold = catalog.options.require(keys::GOLD_HUNT_AMOUNT).unwrap();
	assert_eq!(gold.kind, OptionKind::Range(RangeSpec::new(1, 10)));
	assert_eq!(gold.default, OptionValue::Int(10));

	let faction = catalog.options.require(keys::FACTION).unwrap();
	assert!(faction.default.is_random());
	assert_eq!(faction.resolve_default(|_| OptionValue::Int(1)), OptionValue::Int(1));

	let expansion = catalog.options.require(keys::EXPANSION).unwrap();
	assert_eq!(expansion.default_code(), Some(4));
	assert_eq!(expansion.choices().unwrap().name_of(4), Some("mists_of_pandaria"));
	assert_eq!(catalog.options.require(keys::RANDOMIZE_CLASS).unwrap().default, OptionValue::Bool(false));
}

#[test]
fn everything_lands_in_game_options() {
	let catalog = build();

	let game = catalog.groups.get(keys::GAME_OPTIONS).unwrap();
	assert_eq!(game.len(), catalog.options.len());
	assert!(catalog.diagnostics.is_empty());
}

#[test]
fn records_attribute_each_phase() {
	let catalog = build();

	let pre = &catalog.records[0];
	assert_eq!((pre.phase, &pre.contributor), (Phase::PreRegistration, &Contributor::plugin("wow-leveling")));
	assert_eq!(pre.counts.inserted, 7);

	let post = &catalog.records[2];
	assert_eq!(post.phase, Phase::PostRegistration);
	assert_eq!(post.counts.inserted + post.counts.replaced, 0);
}

#[test]
fn plugin_needs_the_builtins_it_edits() {
	let err = CatalogBuilder::new(ManualBuiltins::new(["Leveling"]))
		.with_plugin(WOW_LEVELING)
		.unwrap()
		.build()
		.unwrap_err();

	assert!(matches!(&err, CatalogError::Plugin { plugin, .. } if plugin == "wow-leveling"));
	assert_eq!(err.key(), Some(keys::INCLUDE_DUNGEONS));
}
