use pretty_assertions::assert_eq;

use super::*;
use crate::core::{NoBuiltins, PluginDef};
use crate::groups::GroupRegistry;
use crate::options::{OptionDef, OptionRegistry};

struct Host;

impl HostCatalog for Host {
	fn define_options(&self, options: &mut OptionRegistry) -> Result<()> {
		options.insert("goal", OptionDef::range("Goal", 0, 3, 0));
		options.insert("bonus", OptionDef::toggle("Bonus", false));
		Ok(())
	}

	fn assign_groups(&self, groups: &mut GroupRegistry<'_>) {
		for key in groups.ungrouped_keys() {
			groups.add("Game Options", key);
		}
	}
}

fn seed_bonus(options: &mut OptionRegistry) -> Result<()> {
	options.insert("bonus", OptionDef::toggle("Seeded Bonus", true));
	options.insert("extra", OptionDef::toggle("Extra", false));
	Ok(())
}

fn rename_goal(options: &mut OptionRegistry) -> Result<()> {
	options.edit("goal", |def| def.display_name = "Selected Goal".into())
}

fn group_extra(groups: &mut GroupRegistry<'_>) {
	groups.extend("Extras", ["extra", "missing"]);
}

fn collapse_game(groups: &mut GroupRegistry<'_>) {
	groups.set_collapsed("Game Options", true);
}

const EXTRAS: PluginDef = PluginDef::new("extras")
	.before_options(seed_bonus)
	.after_options(rename_goal)
	.before_groups(group_extra)
	.after_groups(collapse_game);

#[test]
fn test_build_runs_phases_in_order() {
	let builder = CatalogBuilder::new(Host).with_plugin(EXTRAS).unwrap();
	let catalog = builder.build().unwrap();

	assert_eq!(catalog.options.keys().collect::<Vec<_>>(), vec!["bonus", "extra", "goal"]);
	assert_eq!(catalog.options.get("bonus").unwrap().display_name, "Bonus");
	assert_eq!(catalog.options.get("goal").unwrap().display_name, "Selected Goal");

	assert_eq!(catalog.groups.names().collect::<Vec<_>>(), vec!["Extras", "Game Options"]);
	assert_eq!(catalog.groups.get("Game Options").unwrap().members(), ["bonus", "goal"]);
	assert!(catalog.groups.get("Game Options").unwrap().start_collapsed());
	assert_eq!(catalog.diagnostics.len(), 1);

	let phases: Vec<_> = catalog.records.iter().map(|record| (record.phase, record.contributor.to_string())).collect();
	assert_eq!(
		phases,
		vec![
			(Phase::PreRegistration, "plugin:extras".to_string()),
			(Phase::BuiltinDefinition, "host".to_string()),
			(Phase::PostRegistration, "plugin:extras".to_string()),
			(Phase::PreGrouping, "plugin:extras".to_string()),
			(Phase::BuiltinGrouping, "host".to_string()),
			(Phase::PostGrouping, "plugin:extras".to_string()),
		]
	);
	assert_eq!(catalog.records[1].counts, PhaseCounts { inserted: 1, replaced: 1, dropped: 0 });
	assert_eq!(catalog.records[3].counts, PhaseCounts { inserted: 0, replaced: 0, dropped: 1 });
}

#[test]
fn test_build_is_repeatable() {
	let builder = CatalogBuilder::new(Host).with_plugin(EXTRAS).unwrap();

	assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

#[test]
fn test_duplicate_plugin_id_rejected() {
	let mut builder = CatalogBuilder::new(NoBuiltins);
	builder.register_plugin(EXTRAS).unwrap();

	let err = builder.register_plugin(PluginDef::new("extras")).unwrap_err();
	assert!(matches!(err, CatalogError::DuplicatePlugin(id) if id == "extras"));
	assert_eq!(builder.plugin_ids().collect::<Vec<_>>(), vec!["extras"]);
}

struct Broken;

impl CatalogPlugin for Broken {
	fn id(&self) -> &str {
		"broken"
	}

	fn after_options_defined(&self, options: &mut OptionRegistry) -> Result<()> {
		options.get_mut("nonexistent").map(|_| ())
	}
}

#[test]
fn test_plugin_errors_carry_plugin_id() {
	let builder = CatalogBuilder::new(Host).with_plugin(Broken).unwrap();

	let err = builder.build().unwrap_err();
	assert!(matches!(&err, CatalogError::Plugin { plugin, .. } if plugin == "broken"));
	assert_eq!(err.key(), Some("nonexistent"));
	assert!(matches!(err.innermost(), CatalogError::KeyNotFound { .. }));
}

#[test]
fn test_host_validation_errors_are_not_wrapped() {
	struct BadHost;

	impl HostCatalog for BadHost {
		fn define_options(&self, options: &mut OptionRegistry) -> Result<()> {
			options.insert("amount", OptionDef::range("Amount", 1, 10, 15));
			Ok(())
		}
	}

	let err = CatalogBuilder::new(BadHost).build().unwrap_err();
	assert!(matches!(err, CatalogError::InvalidOptionDefinition { ref key, .. } if key == "amount"));
}
