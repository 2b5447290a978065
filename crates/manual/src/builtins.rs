use optreg_registry::{ChoiceSpec, GroupRegistry, HostCatalog, OptionDef, OptionRegistry, Result};

use crate::keys;

/// The built-in catalog a Manual world defines from its game data.
///
/// Every world gets a `goal` choice built from its goal list. Each
/// category that opts into a player option gets an on-by-default toggle
/// named after the category key, and `death_link` is added when the world
/// supports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualBuiltins {
	goals: Vec<String>,
	categories: Vec<String>,
	death_link: bool,
}

impl ManualBuiltins {
	pub fn new<I, S>(goals: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			goals: goals.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	/// The built-ins of the World of Warcraft leveling world.
	pub fn wow_leveling() -> Self {
		Self::new(["Leveling", "Gold Hunt"]).with_category(keys::INCLUDE_DUNGEONS)
	}

	pub fn with_category(mut self, key: impl Into<String>) -> Self {
		self.categories.push(key.into());
		self
	}

	pub fn with_death_link(mut self, enabled: bool) -> Self {
		self.death_link = enabled;
		self
	}

	pub fn goals(&self) -> &[String] {
		&self.goals
	}

	pub fn categories(&self) -> &[String] {
		&self.categories
	}

	/// One choice per distinct goal, coded in goal order.
	///
	/// Goals whose option name is empty or repeats an earlier goal's are
	/// skipped, so codes stay dense and code 0 is always the first goal kept.
	fn goal_choices(&self) -> ChoiceSpec {
		let mut spec = ChoiceSpec::default();
		for goal in &self.goals {
			let name = option_name(goal);
			if name.is_empty() {
				tracing::warn!(domain = "manual", goal = %goal, "goal has no usable option name; skipped");
				continue;
			}
			if spec.options.contains_key(&name) {
				tracing::warn!(domain = "manual", goal = %goal, option = %name, "goal repeats an earlier goal's option name; skipped");
				continue;
			}
			let code = spec.options.len() as i64;
			spec.options.insert(name, code);
		}
		spec
	}
}

impl HostCatalog for ManualBuiltins {
	fn define_options(&self, options: &mut OptionRegistry) -> Result<()> {
		let goals = self.goal_choices();
		if !goals.options.is_empty() {
			options.insert(
				keys::GOAL,
				OptionDef::choice("Goal", goals, 0).with_documentation("Choose your victory condition."),
			);
		}

		for category in &self.categories {
			options.insert(category.as_str(), OptionDef::default_on_toggle(title_case(category)));
		}

		if self.death_link {
			options.insert(
				keys::DEATH_LINK,
				OptionDef::toggle("Death Link", false)
					.with_documentation("When you die, everyone who enabled death link dies. Of course, the reverse is true too."),
			);
		}

		tracing::debug!(
			domain = "manual",
			goals = self.goals.len(),
			categories = self.categories.len(),
			death_link = self.death_link,
			"manual built-ins defined",
		);
		Ok(())
	}

	fn assign_groups(&self, groups: &mut GroupRegistry<'_>) {
		let ungrouped = groups.ungrouped_keys();
		groups.extend(keys::GAME_OPTIONS, ungrouped);
	}
}

/// Turns a goal name into a choice option name: "Gold Hunt" -> "gold_hunt".
pub fn option_name(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for c in name.trim().chars() {
		if c.is_alphanumeric() {
			out.extend(c.to_lowercase());
		} else if !out.ends_with('_') {
			out.push('_');
		}
	}
	out.trim_matches('_').to_string()
}

/// Turns an option key into a display name: "include_dungeons" -> "Include Dungeons".
pub fn title_case(key: &str) -> String {
	key.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			chars
				.next()
				.map(|first| first.to_uppercase().chain(chars).collect::<String>())
				.unwrap_or_default()
		})
		.collect::<Vec<_>>()
		.join(" ")
}
