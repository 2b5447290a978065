//! Manifest file loading.

use std::path::Path;

use crate::decl::ManifestFile;
use crate::error::{ManifestError, Result};
use crate::plugin::ManifestPlugin;

/// Reads a manifest from disk. A missing `id` falls back to the file stem.
pub fn load_manifest(path: &Path) -> Result<ManifestPlugin> {
	let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let fallback = path.file_stem().map(|stem| stem.to_string_lossy().into_owned());
	let plugin = build(&content, fallback)?;
	tracing::info!(domain = "manifest", path = %path.display(), id = plugin.id(), "manifest loaded");
	Ok(plugin)
}

/// Parses a manifest from a string. The manifest must declare its `id`.
pub fn parse_manifest_str(content: &str) -> Result<ManifestPlugin> {
	build(content, None)
}

fn build(content: &str, fallback_id: Option<String>) -> Result<ManifestPlugin> {
	let file: ManifestFile = toml::from_str(content)?;
	let id = file.id.clone().or(fallback_id).ok_or(ManifestError::MissingField {
		key: "manifest".to_string(),
		field: "id",
	})?;
	ManifestPlugin::from_file(id, file)
}
