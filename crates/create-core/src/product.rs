//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product binary must implement
//! to configure the scaffolding behavior for their specific needs.

use crate::answers::PackageManager;
use std::path::Path;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (display name)
/// - Wizard defaults (project name, description)
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name shown in the wizard intro
    fn display_name(&self) -> &'static str;

    /// Default project name offered by the wizard
    fn default_project_name(&self) -> &'static str;

    /// Default project description offered by the wizard
    fn default_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String>;
}
