//! Dependency installation via the selected package manager

use crate::answers::PackageManager;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Result of the dependency-install stage
///
/// Install failure never aborts the run: the scaffolded files on disk are
/// the primary deliverable, installation is best-effort. Failure text is
/// carried here for the warning message instead of propagating as an error.
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    Success,
    Failed { error: String },
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InstallOutcome::Success)
    }
}

/// Command to suggest when installation fails
pub fn manual_install_hint(project_name: &str, package_manager: PackageManager) -> String {
    format!("cd {} && {}", project_name, package_manager.install_command())
}

/// Run the package manager's install command in the target directory
///
/// Blocks until the subprocess exits. Output is piped, not streamed to the
/// terminal; stderr is surfaced to the caller only on failure.
pub async fn install_dependencies(target: &Path, package_manager: PackageManager) -> InstallOutcome {
    let output = Command::new(package_manager.program())
        .arg("install")
        .current_dir(target)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => InstallOutcome::Success,
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let error = if stderr.trim().is_empty() {
                format!(
                    "{} exited with code {}",
                    package_manager.install_command(),
                    out.status.code().unwrap_or(-1)
                )
            } else {
                stderr.trim().to_string()
            };
            InstallOutcome::Failed { error }
        }
        Err(e) => InstallOutcome::Failed {
            error: format!(
                "failed to run {}: {}",
                package_manager.install_command(),
                e
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_install_hint_npm() {
        assert_eq!(
            manual_install_hint("demo-api", PackageManager::Npm),
            "cd demo-api && npm install"
        );
    }

    #[test]
    fn test_manual_install_hint_yarn() {
        assert_eq!(
            manual_install_hint("demo-api", PackageManager::Yarn),
            "cd demo-api && yarn install"
        );
    }

    #[tokio::test]
    async fn test_install_in_missing_directory_is_captured_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");

        // Spawning with a nonexistent working directory fails whether or not
        // the package manager binary is on PATH
        let outcome = install_dependencies(&missing, PackageManager::Npm).await;

        match outcome {
            InstallOutcome::Failed { error } => {
                assert!(!error.is_empty());
                assert!(error.contains("npm install"));
            }
            InstallOutcome::Success => panic!("install cannot succeed in a missing directory"),
        }
    }

    #[test]
    fn test_outcome_flags() {
        assert!(InstallOutcome::Success.is_success());
        assert!(!InstallOutcome::Failed {
            error: "boom".to_string()
        }
        .is_success());
    }
}
