//! Create Core - Shared library for project scaffolding CLIs
//!
//! This library provides the core functionality for scaffolding a project
//! from a bundled template tree: resolving and validating the template root,
//! materializing the tree into a fresh target directory, patching the copied
//! `package.json`, seeding `.env`, and running the package manager install
//! as a best-effort subprocess.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template resolution/validation, tree copy,
//!   manifest patching, env seeding, dependency install
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait so multiple
//!   binaries can share the pipeline with different branding and defaults
//! - **Layer 3: CLI/TUI Interface** - cliclack-based wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based wizard module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use create_core::{templates, scaffold, AnswerSet};
//!
//! let root = templates::resolve_template_root(&install_dir);
//! templates::validate_template(&root, "create-express-api")?;
//! ```

pub mod answers;
pub mod error;
pub mod install;
pub mod product;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, PackageManager, ProjectKind};
pub use error::ScaffoldError;
pub use install::{install_dependencies, InstallOutcome};
pub use product::ProductConfig;
pub use scaffold::{check_target, materialize_project, TargetDisposition};
pub use templates::{resolve_template_root, validate_template};

#[cfg(feature = "tui")]
pub use tui::run;
