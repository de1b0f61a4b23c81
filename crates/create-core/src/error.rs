//! Stage-tagged errors for the scaffolding pipeline
//!
//! Every fatal pipeline stage gets its own variant so the top level can tell
//! them apart when reporting. The dependency-install stage never constructs
//! one of these: its failure is degraded to an [`InstallOutcome`] value
//! rather than an error (see [`crate::install`]).
//!
//! [`InstallOutcome`]: crate::install::InstallOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors, tagged by the stage that raised them
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template validation: the template root or a template directory is missing
    #[error("template directory not found: {}", path.display())]
    TemplateRootMissing { path: PathBuf },

    /// Template validation: a file the pipeline depends on is not shipped
    #[error("template '{template}' is incomplete: missing {file}")]
    TemplateIncomplete { template: String, file: String },

    /// Target preparation: existing directory teardown or (re)creation failed
    #[error("failed to prepare target directory {}: {source}", path.display())]
    PrepareTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Materialization: the recursive template copy failed
    #[error("failed to copy template file to {}: {source}", path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest patching: package.json could not be read
    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest patching: package.json is not a JSON object
    #[error("manifest {} is not valid JSON: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest patching: the rewritten package.json could not be written
    #[error("failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Environment seeding: .env.example -> .env copy failed
    #[error("failed to create .env from {}: {source}", example.display())]
    SeedEnv {
        example: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
