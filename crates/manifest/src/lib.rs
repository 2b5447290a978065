//! Data-driven catalog plugins.
//!
//! A manifest is a TOML file that declares new options, edits to existing
//! ones, and group memberships. Loading one yields a [`ManifestPlugin`] that
//! registers with a catalog builder like any code-defined plugin:
//!
//! ```toml
//! id = "gold-hunt"
//!
//! [options.gold_hunt_amount]
//! kind = "range"
//! display_name = "Gold amount"
//! range_start = 1
//! range_end = 10
//! default = 10
//!
//! [overrides.goal]
//! display_name = "Selected Goal"
//!
//! [groups."Goal Options"]
//! options = ["goal", "gold_hunt_amount"]
//! ```

mod decl;
mod error;
mod load;
mod plugin;

pub use decl::{GroupDecl, KindName, ManifestFile, OptionDecl, OverrideDecl, Placement};
pub use error::{ManifestError, Result};
pub use load::{load_manifest, parse_manifest_str};
pub use plugin::ManifestPlugin;

#[cfg(test)]
mod tests;
