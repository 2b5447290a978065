//! Sequenced phase execution for the option and group registries.
//!
//! Both pipelines are explicit state machines: each step checks the current
//! state and fails with [`CatalogError::PhaseOrder`] when called out of turn.

use crate::core::Phase;
use crate::error::{CatalogError, Result};
use crate::groups::{GroupRegistry, GroupingOutcome};
use crate::options::{OptionCatalog, OptionRegistry, WriteCounts};


/// Position of a pipeline in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PipelineState {
	/// Only before-phases have run.
	#[default]
	NotStarted,
	/// The host has defined its built-in options.
	HostDefining,
	/// The host has assigned its built-in groups.
	HostAssigning,
	/// The registry is frozen.
	Finalized,
	/// A phase failed; no further step may run.
	Aborted,
}

impl PipelineState {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::NotStarted => "not started",
			Self::HostDefining => "host-defining",
			Self::HostAssigning => "host-assigning",
			Self::Finalized => "finalized",
			Self::Aborted => "aborted",
		}
	}
}

impl std::fmt::Display for PipelineState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

fn expect_state(step: &'static str, state: PipelineState, expected: PipelineState) -> Result<()> {
	if state == expected {
		Ok(())
	} else {
		Err(CatalogError::PhaseOrder { step, state })
	}
}

/// Drives the option registry through its registration phases.
#[derive(Debug, Default)]
pub struct RegistrationPipeline {
	registry: OptionRegistry,
	state: PipelineState,
}

impl RegistrationPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> PipelineState {
		self.state
	}

	/// Read access to the registry between steps.
	pub fn registry(&self) -> &OptionRegistry {
		&self.registry
	}

	/// Runs a pre-registration phase. Allowed any number of times before
	/// [`define_builtins`](Self::define_builtins).
	pub fn pre_register<F>(&mut self, phase: F) -> Result<WriteCounts>
	where
		F: FnOnce(&mut OptionRegistry) -> Result<()>,
	{
		expect_state(Phase::PreRegistration.as_str(), self.state, PipelineState::NotStarted)?;
		self.run(Phase::PreRegistration, phase)
	}

	/// Runs the host's built-in definition phase.
	pub fn define_builtins<F>(&mut self, phase: F) -> Result<WriteCounts>
	where
		F: FnOnce(&mut OptionRegistry) -> Result<()>,
	{
		expect_state(Phase::BuiltinDefinition.as_str(), self.state, PipelineState::NotStarted)?;
		let counts = self.run(Phase::BuiltinDefinition, phase)?;
		self.state = PipelineState::HostDefining;
		Ok(counts)
	}

	/// Runs a post-registration phase. Allowed any number of times between
	/// the built-in definitions and finalization.
	pub fn post_register<F>(&mut self, phase: F) -> Result<WriteCounts>
	where
		F: FnOnce(&mut OptionRegistry) -> Result<()>,
	{
		expect_state(Phase::PostRegistration.as_str(), self.state, PipelineState::HostDefining)?;
		self.run(Phase::PostRegistration, phase)
	}

	/// Validates and freezes the registry.
	pub fn finalize(&mut self) -> Result<OptionCatalog> {
		expect_state("finalize", self.state, PipelineState::HostDefining)?;
		match std::mem::take(&mut self.registry).finalize() {
			Ok(catalog) => {
				self.state = PipelineState::Finalized;
				Ok(catalog)
			}
			Err(err) => {
				self.state = PipelineState::Aborted;
				Err(err)
			}
		}
	}

	fn run<F>(&mut self, phase: Phase, f: F) -> Result<WriteCounts>
	where
		F: FnOnce(&mut OptionRegistry) -> Result<()>,
	{
		self.registry.enter_phase(phase);
		let before = self.registry.counts();
		if let Err(err) = f(&mut self.registry) {
			tracing::debug!(domain = "options", phase = %phase, error = %err, "registration phase failed");
			self.state = PipelineState::Aborted;
			return Err(err);
		}
		Ok(self.registry.counts().since(before))
	}
}

/// Drives a group registry through its grouping phases.
#[derive(Debug)]
pub struct GroupingPipeline<'c> {
	groups: Option<GroupRegistry<'c>>,
	state: PipelineState,
}

impl<'c> GroupingPipeline<'c> {
	pub fn new(catalog: &'c OptionCatalog) -> Self {
		Self {
			groups: Some(GroupRegistry::new(catalog)),
			state: PipelineState::NotStarted,
		}
	}

	pub fn state(&self) -> PipelineState {
		self.state
	}

	/// Read access to the groups between steps; `None` once finished.
	pub fn groups(&self) -> Option<&GroupRegistry<'c>> {
		self.groups.as_ref()
	}

	/// Runs a pre-grouping phase; returns how many memberships it dropped.
	pub fn pre_group<F>(&mut self, phase: F) -> Result<usize>
	where
		F: FnOnce(&mut GroupRegistry<'c>),
	{
		expect_state(Phase::PreGrouping.as_str(), self.state, PipelineState::NotStarted)?;
		self.run(Phase::PreGrouping, phase)
	}

	/// Runs the host's built-in grouping phase.
	pub fn assign_builtin_groups<F>(&mut self, phase: F) -> Result<usize>
	where
		F: FnOnce(&mut GroupRegistry<'c>),
	{
		expect_state(Phase::BuiltinGrouping.as_str(), self.state, PipelineState::NotStarted)?;
		let dropped = self.run(Phase::BuiltinGrouping, phase)?;
		self.state = PipelineState::HostAssigning;
		Ok(dropped)
	}

	/// Runs a post-grouping phase.
	pub fn post_group<F>(&mut self, phase: F) -> Result<usize>
	where
		F: FnOnce(&mut GroupRegistry<'c>),
	{
		expect_state(Phase::PostGrouping.as_str(), self.state, PipelineState::HostAssigning)?;
		self.run(Phase::PostGrouping, phase)
	}

	/// Freezes the groups.
	pub fn finish(&mut self) -> Result<GroupingOutcome> {
		expect_state("finish", self.state, PipelineState::HostAssigning)?;
		let groups = self.take_groups("finish")?;
		self.state = PipelineState::Finalized;
		Ok(groups.finalize())
	}

	fn take_groups(&mut self, step: &'static str) -> Result<GroupRegistry<'c>> {
		self.groups.take().ok_or(CatalogError::PhaseOrder { step, state: self.state })
	}

	fn run<F>(&mut self, phase: Phase, f: F) -> Result<usize>
	where
		F: FnOnce(&mut GroupRegistry<'c>),
	{
		let state = self.state;
		let groups = self
			.groups
			.as_mut()
			.ok_or(CatalogError::PhaseOrder { step: phase.as_str(), state })?;
		groups.enter_phase(phase);
		let before = groups.diagnostics().len();
		f(groups);
		Ok(groups.diagnostics().len() - before)
	}
}
