use crate::options::Violation;
use crate::pipeline::PipelineState;

/// Fatal catalog construction errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	/// A phase tried to read or edit a key that is not registered.
	#[error("option key not found: {key}")]
	KeyNotFound { key: String },

	/// A definition broke a structural rule at finalization.
	#[error("invalid option definition '{key}': {violation}")]
	InvalidOptionDefinition { key: String, violation: Violation },

	/// A pipeline step was called out of order.
	#[error("{step} cannot run while the pipeline is {state}")]
	PhaseOrder { step: &'static str, state: PipelineState },

	/// Two plugins share an id.
	#[error("duplicate plugin id {0}")]
	DuplicatePlugin(String),

	/// A plugin hook failed.
	#[error("plugin {plugin} failed: {source}")]
	Plugin {
		plugin: String,
		#[source]
		source: Box<CatalogError>,
	},
}

impl CatalogError {
	pub(crate) fn key_not_found(key: &str) -> Self {
		Self::KeyNotFound { key: key.to_string() }
	}

	pub(crate) fn in_plugin(plugin: &str, source: CatalogError) -> Self {
		Self::Plugin {
			plugin: plugin.to_string(),
			source: Box::new(source),
		}
	}

	/// Returns the error with plugin attribution stripped.
	pub fn innermost(&self) -> &CatalogError {
		match self {
			Self::Plugin { source, .. } => source.innermost(),
			other => other,
		}
	}

	/// Returns the offending option key, if the error names one.
	pub fn key(&self) -> Option<&str> {
		match self.innermost() {
			Self::KeyNotFound { key } | Self::InvalidOptionDefinition { key, .. } => Some(key),
			_ => None,
		}
	}
}

/// Result type for catalog operations.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
