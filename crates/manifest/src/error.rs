use std::path::PathBuf;

/// Manifest loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
	/// The manifest file could not be read.
	#[error("failed to read manifest {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The manifest is not valid TOML or does not match the schema.
	#[error("manifest parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A declaration omits a field its kind requires.
	#[error("option '{key}' is missing required field '{field}'")]
	MissingField { key: String, field: &'static str },

	/// A declaration sets a field its kind does not use.
	#[error("option '{key}' sets '{field}', which a {kind} option does not use")]
	UnexpectedField {
		key: String,
		field: &'static str,
		kind: &'static str,
	},
}

/// Result type for manifest operations.
pub type Result<T, E = ManifestError> = std::result::Result<T, E>;
