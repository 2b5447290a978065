//! World of Warcraft leveling: extra options and edits to the built-ins.

use optreg_registry::{ChoiceSpec, OptionDef, OptionRegistry, OptionValue, PluginDef, Result};

use crate::keys;

/// The bundled World of Warcraft leveling plugin.
pub const WOW_LEVELING: PluginDef = PluginDef::new("wow-leveling")
	.before_options(before_options_defined)
	.after_options(after_options_defined);

const EXPANSION_DOC: &str = "This will affect the items/locations in the randomizer to match what max level you want to reach.
vanilla = Level 60
the_burning_crusade = Level 70
wrath_of_the_lich_king = Level 80
cataclysm = Level 85
mists_of_pandaria = Level 90";

const PRE_OR_POST_CATACLYSM_DOC: &str = "Select whether you want to quest in the pre-cataclysm or post-cataclysm versions of zones affected by the Cataclysm expansion in the pool.
Setting this option to Pre-Cataclysm will make it so that zones like Stranglethorn Vale, Desolace, Feralas, and Thousand Needles are in their original states.
If you choose your Goal to be Vanilla, The Burning Crusade, or Wrath of the Lich King, you can still choose Post-Cataclysm as your option, if you are playing Cataclysm or Mists of Pandaria game versions.
## WARNING ## If you choose your Goal to be either Cataclysm or Mists of Pandaria, you will automatically be set to Post-Cataclysm, as those expansions assume the world has already been changed by Cataclysm.";

const EASIER_TRANSITIONS_DOC: &str = "Setting it to true will make it that the logic will always expect 2 zones for each level bracket (eg: 10-20) and the first zone of each expansion to be received before allowing progression.
This will make it easier to quest in logic by allowing you more zone choices for your level.";

const GOAL_DOC: &str = "Select your goal for the randomizer.
Leveling: Reach the maximum level for your selected expansion. Define the expansion with the 'expansion' option.
Gold Hunt: Find a set amount of Gold in the item pool to win. Define the amount of Gold needed with the 'gold_hunt_amount' option.";

const INCLUDE_DUNGEONS_DOC: &str = "If set to 'true', this will add all the various leveling dungeons as Filler items. This has no effect on logic; only Maximum Level and Zone Items do.";

fn before_options_defined(options: &mut OptionRegistry) -> Result<()> {
	options.insert(
		keys::GOLD_HUNT_AMOUNT,
		OptionDef::range("Gold amount", 1, 10, 10)
			.with_documentation("If you have selected the Gold Hunt Goal, choose how much Gold you need to find in the pool to win."),
	);
	options.insert(
		keys::EXPANSION,
		OptionDef::choice(
			"Selected Expansion",
			ChoiceSpec::new([
				("vanilla", 0),
				("the_burning_crusade", 1),
				("wrath_of_the_lich_king", 2),
				("cataclysm", 3),
				("mists_of_pandaria", 4),
			]),
			4,
		)
		.with_documentation(EXPANSION_DOC),
	);
	options.insert(
		keys::PRE_OR_POST_CATACLYSM,
		OptionDef::choice("Pre or Post Cataclysm", ChoiceSpec::new([("pre_cataclysm", 0), ("post_cataclysm", 1)]), 1)
			.with_documentation(PRE_OR_POST_CATACLYSM_DOC),
	);
	options.insert(
		keys::FACTION,
		OptionDef::choice("Character faction", ChoiceSpec::new([("alliance", 0), ("horde", 1)]), OptionValue::Random)
			.with_documentation("Choose your character faction. (affects which zones are available for you to quest in)"),
	);
	options.insert(
		keys::RANDOMIZE_CLASS,
		OptionDef::toggle("Randomize Starting Class", false).with_documentation(
			"If set to 'true', you will be given a random class for you to play. You can see the received class in the Manual client.",
		),
	);
	options.insert(
		keys::LEVEL_ITEMS,
		OptionDef::choice("Progressive or Sequential", ChoiceSpec::new([("sequential", 0), ("progressive", 1)]), 1)
			.with_documentation(
				"Progressive will add multiple Progressive Levels to the pool and replace the normal \"Maximum Level X\" items.",
			),
	);
	options.insert(
		keys::EASIER_TRANSITIONS,
		OptionDef::choice("Easier Transitions", ChoiceSpec::new([("false", 0), ("true", 1)]), 0)
			.with_documentation(EASIER_TRANSITIONS_DOC),
	);
	Ok(())
}

fn after_options_defined(options: &mut OptionRegistry) -> Result<()> {
	options.edit(keys::GOAL, |goal| {
		goal.documentation = GOAL_DOC.to_string();
		goal.default = OptionValue::Int(0);
		goal.display_name = "Selected Goal".to_string();
	})?;
	options.edit(keys::INCLUDE_DUNGEONS, |dungeons| {
		dungeons.documentation = INCLUDE_DUNGEONS_DOC.to_string();
		dungeons.default = OptionValue::Bool(false);
		dungeons.display_name = "Include Dungeons".to_string();
	})
}
