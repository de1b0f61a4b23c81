//! Manifest (package.json) patching

use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Manifest file name at the template root
pub const MANIFEST_FILE: &str = "package.json";

/// Overwrite `name` and `description` in the target's package.json
///
/// The manifest is parsed as a JSON object and fully re-serialized with
/// two-space indentation; every other key, value, and key position is
/// preserved. A missing file or invalid JSON is fatal.
pub async fn patch_manifest(
    target: &Path,
    name: &str,
    description: &str,
) -> Result<(), ScaffoldError> {
    let path = target.join(MANIFEST_FILE);

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| ScaffoldError::ManifestRead {
            path: path.clone(),
            source,
        })?;

    let rendered = patch_manifest_str(&content, name, description).map_err(|source| {
        ScaffoldError::ManifestParse {
            path: path.clone(),
            source,
        }
    })?;

    fs::write(&path, rendered)
        .await
        .map_err(|source| ScaffoldError::ManifestWrite { path, source })?;

    Ok(())
}

/// Patch the manifest text in memory - separated out for testability
fn patch_manifest_str(
    content: &str,
    name: &str,
    description: &str,
) -> Result<String, serde_json::Error> {
    // Deserializing straight into a Map rejects non-object documents
    let mut manifest: Map<String, Value> = serde_json::from_str(content)?;

    manifest.insert("name".to_string(), Value::String(name.to_string()));
    manifest.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );

    serde_json::to_string_pretty(&manifest)
}
