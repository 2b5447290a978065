//! A Manual world host for the option catalog.
//!
//! [`ManualBuiltins`] supplies the options and groups every Manual world
//! gets from its game data; [`WOW_LEVELING`] is the World of Warcraft
//! leveling world's plugin on top of them.

mod builtins;
pub mod keys;
mod wow;

pub use builtins::{ManualBuiltins, option_name, title_case};
pub use wow::WOW_LEVELING;

#[cfg(test)]
mod tests;
