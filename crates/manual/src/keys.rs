//! Option keys shared between the built-ins and the bundled plugin.

pub const GOAL: &str = "goal";
pub const DEATH_LINK: &str = "death_link";

pub const GOLD_HUNT_AMOUNT: &str = "gold_hunt_amount";
pub const EXPANSION: &str = "expansion";
pub const PRE_OR_POST_CATACLYSM: &str = "pre_or_post_cataclysm";
pub const FACTION: &str = "faction";
pub const RANDOMIZE_CLASS: &str = "randomize_class";
pub const LEVEL_ITEMS: &str = "level_items";
pub const EASIER_TRANSITIONS: &str = "easier_transitions";
pub const INCLUDE_DUNGEONS: &str = "include_dungeons";

/// Group the built-in grouping step collects every ungrouped option into.
pub const GAME_OPTIONS: &str = "Game Options";
