//! Bundled template resolution, validation, and materialization
//!
//! This module provides:
//! - Template root resolution relative to the installation directory
//! - Up-front template completeness validation
//! - Recursive template copying into the target directory
//! - Manifest (package.json) patching

pub mod copier;
pub mod manifest;

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

pub use copier::copy_tree;
pub use manifest::patch_manifest;

/// Files every template must ship at its root for the pipeline to complete
const REQUIRED_TEMPLATE_FILES: &[&str] = &[manifest::MANIFEST_FILE, ".env.example"];

/// Resolve the template root from the tool's installation directory
///
/// Pure function, computed once at startup and passed down explicitly.
pub fn resolve_template_root(install_dir: &Path) -> PathBuf {
    install_dir.join("templates")
}

/// Check that a template exists and ships everything the pipeline needs
///
/// Runs before any filesystem mutation so an incomplete template fails with
/// a clear diagnostic instead of deep in the pipeline after partial
/// materialization. Returns the template directory on success.
pub fn validate_template(
    template_root: &Path,
    template_name: &str,
) -> Result<PathBuf, ScaffoldError> {
    if !template_root.is_dir() {
        return Err(ScaffoldError::TemplateRootMissing {
            path: template_root.to_path_buf(),
        });
    }

    let template_dir = template_root.join(template_name);
    if !template_dir.is_dir() {
        return Err(ScaffoldError::TemplateRootMissing { path: template_dir });
    }

    for file in REQUIRED_TEMPLATE_FILES {
        if !template_dir.join(file).is_file() {
            return Err(ScaffoldError::TemplateIncomplete {
                template: template_name.to_string(),
                file: (*file).to_string(),
            });
        }
    }

    Ok(template_dir)
}
