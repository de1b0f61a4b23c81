//! Target directory resolution and preparation, `.env` seeding

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Destination directory for a project: `cwd` joined with the project name
pub fn resolve_target(cwd: &Path, project_name: &str) -> PathBuf {
    cwd.join(project_name)
}

/// How to treat the resolved target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDisposition {
    /// Target does not exist; create it fresh
    Fresh,
    /// Target exists and the user confirmed the teardown
    Overwrite,
    /// Target exists and the user declined; nothing may be touched
    Declined,
}

/// Classify the target directory ahead of any mutation
pub fn check_target(target: &Path, overwrite_confirmed: bool) -> TargetDisposition {
    if !target.exists() {
        TargetDisposition::Fresh
    } else if overwrite_confirmed {
        TargetDisposition::Overwrite
    } else {
        TargetDisposition::Declined
    }
}

/// Materialize a project into the target: teardown/create the directory,
/// copy the template tree, patch the manifest, seed `.env`
///
/// Returns the number of files copied, or `None` without touching the
/// filesystem when the overwrite was declined.
pub async fn materialize_project(
    template_dir: &Path,
    target: &Path,
    disposition: TargetDisposition,
    name: &str,
    description: &str,
) -> Result<Option<usize>, ScaffoldError> {
    if disposition == TargetDisposition::Declined {
        return Ok(None);
    }

    prepare_target(target).await?;
    let copied = crate::templates::copy_tree(template_dir, target).await?;
    crate::templates::patch_manifest(target, name, description).await?;
    seed_env(target).await?;

    Ok(Some(copied))
}

/// Create the target directory, tearing down any existing subtree first
///
/// Destructive: the caller must have confirmed the overwrite with the user
/// before calling this for an existing target.
pub async fn prepare_target(target: &Path) -> Result<(), ScaffoldError> {
    let wrap = |source| ScaffoldError::PrepareTarget {
        path: target.to_path_buf(),
        source,
    };

    if target.exists() {
        fs::remove_dir_all(target).await.map_err(wrap)?;
    }
    fs::create_dir_all(target).await.map_err(wrap)?;

    Ok(())
}

/// Seed `<target>/.env` from `<target>/.env.example`, byte for byte
///
/// No values are altered and no secrets are generated; the example file is
/// the scaffolded application's documented starting configuration.
pub async fn seed_env(target: &Path) -> Result<(), ScaffoldError> {
    let example = target.join(".env.example");
    let env = target.join(".env");

    fs::copy(&example, &env)
        .await
        .map_err(|source| ScaffoldError::SeedEnv { example, source })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[test]
    fn test_resolve_target_joins_cwd_and_name() {
        let target = resolve_target(Path::new("/work"), "demo-api");
        assert_eq!(target, Path::new("/work/demo-api"));
    }

    #[test]
    fn test_check_target_dispositions() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent");

        assert_eq!(check_target(&missing, false), TargetDisposition::Fresh);
        assert_eq!(check_target(&missing, true), TargetDisposition::Fresh);
        assert_eq!(check_target(tmp.path(), true), TargetDisposition::Overwrite);
        assert_eq!(check_target(tmp.path(), false), TargetDisposition::Declined);
    }

    #[tokio::test]
    async fn test_prepare_creates_fresh_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("demo-api");

        prepare_target(&target).await.unwrap();
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_removes_residual_files() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("demo-api");
        std_fs::create_dir_all(target.join("stale/deep")).unwrap();
        std_fs::write(target.join("stale/deep/old.txt"), "leftover").unwrap();

        prepare_target(&target).await.unwrap();
        assert!(target.is_dir());
        assert!(!target.join("stale").exists());
    }

    #[tokio::test]
    async fn test_seed_env_copies_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let content = "PORT=3000\nMONGODB_URI=mongodb://localhost:27017/demo\n";
        std_fs::write(tmp.path().join(".env.example"), content).unwrap();

        seed_env(tmp.path()).await.unwrap();
        assert_eq!(
            std_fs::read_to_string(tmp.path().join(".env")).unwrap(),
            content
        );
    }

    #[tokio::test]
    async fn test_seed_env_missing_example_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = seed_env(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::SeedEnv { .. }));
    }
}
