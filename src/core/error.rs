use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ReleaseBuildFailed,
    ReleaseStripFailed,
    ReleaseArtifactMissing,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ReleaseBuildFailed => "release.build_failed",
            ErrorCode::ReleaseStripFailed => "release.strip_failed",
            ErrorCode::ReleaseArtifactMissing => "release.artifact_missing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFailedDetails {
    pub command: String,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMissingDetails {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    pub fn build_failed(details: StepFailedDetails) -> Self {
        let message = format!("Build failed (exit code {})", details.exit_code);
        Self::step_failed(ErrorCode::ReleaseBuildFailed, message, details)
    }

    pub fn strip_failed(details: StepFailedDetails) -> Self {
        let message = format!("Strip failed (exit code {})", details.exit_code);
        Self::step_failed(ErrorCode::ReleaseStripFailed, message, details)
    }

    fn step_failed(code: ErrorCode, message: String, details: StepFailedDetails) -> Self {
        let hint = posix_exit_hint(details.exit_code);
        let details =
            serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        let mut err = Self::new(code, message, details);
        if let Some(hint) = hint {
            err = err.with_hint(hint);
        }
        err
    }

    pub fn artifact_missing(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = serde_json::to_value(ArtifactMissingDetails { path: path.clone() })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ReleaseArtifactMissing,
            format!("Artifact not found: {}", path),
            details,
        )
        .with_hint("Check that the [[bin]] target name matches the expected artifact name")
    }

    /// Process exit status for this error.
    ///
    /// A positive collaborator exit code recorded in the details takes
    /// precedence, so the pipeline's exit status matches whichever step
    /// failed. Pipeline-origin failures fall back to a per-code mapping.
    pub fn exit_code(&self) -> i32 {
        if let Some(code) = self.details.get("exitCode").and_then(Value::as_i64) {
            if code > 0 {
                return code as i32;
            }
        }

        match self.code {
            ErrorCode::ReleaseBuildFailed
            | ErrorCode::ReleaseStripFailed
            | ErrorCode::ReleaseArtifactMissing => 20,
        }
    }
}

/// Translate universal POSIX exit codes only (no tool-specific hints).
fn posix_exit_hint(exit_code: i32) -> Option<&'static str> {
    match exit_code {
        127 => Some("Command not found. Check that the tool is installed and in PATH."),
        126 => Some("Permission denied. Check file permissions on the tool."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_to_stable_strings() {
        assert_eq!(ErrorCode::ReleaseBuildFailed.as_str(), "release.build_failed");
        assert_eq!(ErrorCode::ReleaseStripFailed.as_str(), "release.strip_failed");
        assert_eq!(
            ErrorCode::ReleaseArtifactMissing.as_str(),
            "release.artifact_missing"
        );
    }

    #[test]
    fn every_code_belongs_to_the_release_taxonomy() {
        let codes = [
            ErrorCode::ReleaseBuildFailed,
            ErrorCode::ReleaseStripFailed,
            ErrorCode::ReleaseArtifactMissing,
        ];

        for code in codes {
            assert!(code.as_str().starts_with("release."));
            let err = Error::new(code, "step failed", Value::Null);
            assert_eq!(err.exit_code(), 20);
        }
    }

    #[test]
    fn build_failed_propagates_collaborator_exit_code() {
        let err = Error::build_failed(StepFailedDetails {
            command: "cargo build --release".to_string(),
            exit_code: 101,
            error: None,
        });

        assert_eq!(err.code, ErrorCode::ReleaseBuildFailed);
        assert_eq!(err.exit_code(), 101);
        assert_eq!(err.details["exitCode"], 101);
    }

    #[test]
    fn non_positive_exit_code_falls_back_to_mapping() {
        let err = Error::strip_failed(StepFailedDetails {
            command: "strip target/release/terra-link".to_string(),
            exit_code: -1,
            error: Some("killed by signal".to_string()),
        });

        assert_eq!(err.exit_code(), 20);
    }

    #[test]
    fn artifact_missing_maps_to_exit_code_20() {
        let err = Error::artifact_missing("target/release/terra-link");

        assert_eq!(err.code, ErrorCode::ReleaseArtifactMissing);
        assert_eq!(err.exit_code(), 20);
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn command_not_found_gets_path_hint() {
        let err = Error::build_failed(StepFailedDetails {
            command: "cargo build --release".to_string(),
            exit_code: 127,
            error: Some("No such file or directory".to_string()),
        });

        assert_eq!(err.exit_code(), 127);
        assert!(err.hints[0].message.contains("PATH"));
    }

    #[test]
    fn step_details_serialize_camel_case() {
        let details = serde_json::to_value(StepFailedDetails {
            command: "strip bin".to_string(),
            exit_code: 2,
            error: None,
        })
        .unwrap();

        assert_eq!(details["exitCode"], 2);
        assert!(details.get("error").is_none());
    }
}
