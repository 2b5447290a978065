use optreg_registry::{CatalogBuilder, OptionKind, OptionValue};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn option_names_are_snake_case() {
	assert_eq!(option_name("Gold Hunt"), "gold_hunt");
	assert_eq!(option_name("  Wrath of the Lich King! "), "wrath_of_the_lich_king");
	assert_eq!(option_name("Leveling"), "leveling");
}

#[test]
fn display_names_are_title_case() {
	assert_eq!(title_case("include_dungeons"), "Include Dungeons");
	assert_eq!(title_case("death__link"), "Death Link");
}

#[test]
fn builtins_define_goal_categories_and_death_link() {
	let host = ManualBuiltins::new(["Leveling", "Gold Hunt"])
		.with_category("include_dungeons")
		.with_death_link(true);
	let catalog = CatalogBuilder::new(host).build().unwrap();

	assert_eq!(catalog.options.keys().collect::<Vec<_>>(), vec!["goal", "include_dungeons", "death_link"]);

	let goal = catalog.options.require(keys::GOAL).unwrap();
	assert_eq!(goal.display_name, "Goal");
	assert_eq!(goal.choices().unwrap().code_of("gold_hunt"), Some(1));

	let dungeons = catalog.options.require(keys::INCLUDE_DUNGEONS).unwrap();
	assert_eq!(dungeons.kind, OptionKind::DefaultOnToggle);
	assert_eq!(dungeons.default, OptionValue::Bool(true));
	assert_eq!(dungeons.display_name, "Include Dungeons");

	assert_eq!(catalog.groups.names().collect::<Vec<_>>(), vec![keys::GAME_OPTIONS]);
	assert_eq!(catalog.groups.get(keys::GAME_OPTIONS).unwrap().members(), ["goal", "include_dungeons", "death_link"]);
}

#[test]
fn world_without_goals_has_no_goal_option() {
	let catalog = CatalogBuilder::new(ManualBuiltins::default()).build().unwrap();

	assert!(catalog.options.is_empty());
	assert!(catalog.groups.get(keys::GAME_OPTIONS).is_some_and(|group| group.is_empty()));
}

#[test]
fn colliding_and_empty_goal_names_are_skipped() {
	let host = ManualBuiltins::new(["Gold Hunt", "--", "gold-hunt", "Leveling"]);
	let catalog = CatalogBuilder::new(host).build().unwrap();

	let goal = catalog.options.require(keys::GOAL).unwrap();
	let choices = goal.choices().unwrap();
	assert_eq!(choices.options.keys().collect::<Vec<_>>(), vec!["gold_hunt", "leveling"]);
	assert_eq!(choices.code_of("leveling"), Some(1));
	assert_eq!(goal.default_code(), Some(0));
}

#[test]
fn goals_without_usable_names_define_no_goal_option() {
	let catalog = CatalogBuilder::new(ManualBuiltins::new(["!!", " "])).build().unwrap();

	assert!(!catalog.options.contains_key(keys::GOAL));
}
