//! Recursive template copying

use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy the entire template tree into the target directory
///
/// Full recursive copy, byte-for-byte, dotfiles included. No filtering, no
/// substitution, symlinks are not followed. Returns the number of files
/// copied. A failure leaves the target partially populated; no cleanup is
/// attempted.
pub async fn copy_tree(source: &Path, target: &Path) -> Result<usize, ScaffoldError> {
    fs::create_dir_all(target)
        .await
        .map_err(|e| ScaffoldError::Materialize {
            path: target.to_path_buf(),
            source: e,
        })?;

    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(|e| ScaffoldError::Materialize {
            path: source.to_path_buf(),
            source: e.into(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target_path = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(|e| ScaffoldError::Materialize {
                    path: target_path.clone(),
                    source: e,
                })?;
        } else {
            fs::copy(entry.path(), &target_path)
                .await
                .map_err(|e| ScaffoldError::Materialize {
                    path: target_path.clone(),
                    source: e,
                })?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std_fs::create_dir_all(parent).unwrap();
        }
        std_fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_copies_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let target = tmp.path().join("out");

        write(&source.join("package.json"), "{\"name\": \"x\"}");
        write(&source.join("src/index.js"), "console.log('hi');\n");
        write(&source.join("src/routes/api.js"), "export default {};\n");

        let copied = copy_tree(&source, &target).await.unwrap();
        assert_eq!(copied, 3);
        assert_eq!(
            std_fs::read(target.join("src/routes/api.js")).unwrap(),
            std_fs::read(source.join("src/routes/api.js")).unwrap()
        );
    }

    #[tokio::test]
    async fn test_copies_dotfiles() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let target = tmp.path().join("out");

        write(&source.join(".env.example"), "PORT=3000\nJWT_SECRET=change-me\n");
        write(&source.join(".gitignore"), "node_modules/\n");

        copy_tree(&source, &target).await.unwrap();
        assert_eq!(
            std_fs::read_to_string(target.join(".env.example")).unwrap(),
            "PORT=3000\nJWT_SECRET=change-me\n"
        );
        assert!(target.join(".gitignore").is_file());
    }

    #[tokio::test]
    async fn test_preserves_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let target = tmp.path().join("out");

        let bytes: Vec<u8> = (0u8..=255).collect();
        std_fs::create_dir_all(&source).unwrap();
        std_fs::write(source.join("blob.bin"), &bytes).unwrap();

        copy_tree(&source, &target).await.unwrap();
        assert_eq!(std_fs::read(target.join("blob.bin")).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("nope");
        let target = tmp.path().join("out");

        let err = copy_tree(&source, &target).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Materialize { .. }));
    }

    #[tokio::test]
    async fn test_empty_directories_are_recreated() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let target = tmp.path().join("out");

        std_fs::create_dir_all(source.join("logs")).unwrap();
        write(&source.join("package.json"), "{}");

        copy_tree(&source, &target).await.unwrap();
        assert!(target.join("logs").is_dir());
    }
}
