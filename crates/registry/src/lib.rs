//! Phased option catalog assembly.
//!
//! A host application and any number of plugins contribute option
//! definitions and presentation groups through a fixed sequence of phases:
//!
//! 1. plugins seed options before the host ([`Phase::PreRegistration`]),
//! 2. the host defines its built-ins ([`Phase::BuiltinDefinition`]),
//! 3. plugins add or edit options ([`Phase::PostRegistration`]),
//! 4. the option registry is validated and frozen into an [`OptionCatalog`],
//! 5. the same before/host/after sequence runs against a [`GroupRegistry`].
//!
//! [`CatalogBuilder`] drives the whole sequence; [`RegistrationPipeline`] and
//! [`GroupingPipeline`] expose each half on its own.

pub mod builder;
pub mod core;
pub mod error;
pub mod groups;
pub mod options;
pub mod pipeline;

pub use builder::{Catalog, CatalogBuilder, PhaseCounts, PhaseRecord};
pub use crate::core::{
	CatalogPlugin, Contributor, GroupsHook, HostCatalog, NoBuiltins, OptionValue, OptionsHook, Phase, PluginDef, RANDOM,
	ValueType,
};
pub use error::{CatalogError, Result};
pub use groups::{Group, GroupCatalog, GroupDiagnostic, GroupRegistry, GroupingOutcome};
pub use options::{
	ChoiceSpec, InsertAction, NamedRangeSpec, OptionCatalog, OptionDef, OptionKind, OptionRegistry, Override, RangeSpec,
	Violation, WriteCounts,
};
pub use pipeline::{GroupingPipeline, PipelineState, RegistrationPipeline};
