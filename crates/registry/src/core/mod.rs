//! Shared vocabulary: option values, lifecycle phases, and plugin/host seams.

mod phase;
pub mod plugin;
mod value;

pub use phase::{Contributor, Phase};
pub use plugin::{CatalogPlugin, GroupsHook, HostCatalog, NoBuiltins, OptionsHook, PluginDef};
pub use value::{OptionValue, RANDOM, ValueType};
