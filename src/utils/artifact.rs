//! Artifact path conventions for release builds.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Conventional Cargo release output path for a binary: `target/release/<name>`.
pub fn release_artifact_path(project_root: &Path, binary_name: &str) -> PathBuf {
    project_root.join("target").join("release").join(binary_name)
}

/// Verify the artifact exists at its conventional path.
///
/// The build step owns the artifact's content; this only confirms the
/// toolchain placed it where the stripping step expects it.
pub fn resolve_artifact(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        log_status!("dist", "Resolved artifact at '{}'", path.display());
        return Ok(path.to_path_buf());
    }

    Err(Error::artifact_missing(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn release_path_follows_cargo_convention() {
        let path = release_artifact_path(Path::new("/proj"), "terra-link");
        assert_eq!(path, PathBuf::from("/proj/target/release/terra-link"));
    }

    #[test]
    fn resolve_artifact_returns_existing_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("terra-link");
        File::create(&file_path).unwrap();

        let result = resolve_artifact(&file_path);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), file_path);
    }

    #[test]
    fn resolve_artifact_rejects_missing_file() {
        let result = resolve_artifact(Path::new("/nonexistent/terra-link"));
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReleaseArtifactMissing);
        assert!(err.message.contains("Artifact not found"));
    }

    #[test]
    fn resolve_artifact_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let result = resolve_artifact(dir.path());
        assert_eq!(result.unwrap_err().code, ErrorCode::ReleaseArtifactMissing);
    }
}
