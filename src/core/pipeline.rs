//! The release pipeline: build, strip, report.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::toolchain::Toolchain;
use crate::utils::artifact;

/// Record of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRun {
    pub artifact_path: PathBuf,
    pub notices: Vec<String>,
}

/// Sequences the release steps in strict order: build, strip, report.
/// Each step must complete before the next starts; the first failure
/// aborts the run with no cleanup (an unstripped binary left behind is
/// still a valid binary).
#[derive(Debug, Default)]
pub struct ReleasePipeline {
    toolchain: Toolchain,
}

impl ReleasePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toolchain(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }

    /// Run the full pipeline. Emits exactly three stdout notices on
    /// success, in fixed order: start, stripping-start, completion with
    /// the literal artifact path.
    pub fn run(&self) -> Result<ReleaseRun> {
        let mut notices = Vec::with_capacity(3);

        emit(
            &mut notices,
            format!("Building {} (release)...", self.toolchain.binary_name),
        );
        self.toolchain.build_release()?;

        emit(&mut notices, "Stripping debug symbols...".to_string());
        let artifact_path = artifact::resolve_artifact(&self.toolchain.artifact_path())?;
        self.toolchain.strip_binary(&artifact_path)?;

        emit(
            &mut notices,
            format!("Release build complete: {}", artifact_path.display()),
        );

        Ok(ReleaseRun {
            artifact_path,
            notices,
        })
    }
}

/// Print an operator notice to stdout and keep it on the run record.
fn emit(notices: &mut Vec<String>, notice: String) {
    println!("{}", notice);
    notices.push(notice);
}
