//! The two external collaborators: the Cargo build toolchain and the
//! symbol stripper.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, StepFailedDetails};
use crate::utils::artifact;
use crate::utils::command::{self, display_command};

/// Binary name Cargo gives the Terra-Link artifact.
pub const BINARY_NAME: &str = "terra-link";

/// Collaborator programs and path conventions for a release build.
///
/// The defaults resolve `cargo` and `strip` from PATH and treat the current
/// directory as the project root. Non-default values exist for tests; the
/// CLI always runs with the conventional setup.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub cargo: PathBuf,
    pub strip: PathBuf,
    pub project_root: PathBuf,
    pub binary_name: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cargo: PathBuf::from("cargo"),
            strip: PathBuf::from("strip"),
            project_root: PathBuf::from("."),
            binary_name: BINARY_NAME.to_string(),
        }
    }
}

impl Toolchain {
    /// Conventional release output location: `<root>/target/release/<binary>`.
    pub fn artifact_path(&self) -> PathBuf {
        artifact::release_artifact_path(&self.project_root, &self.binary_name)
    }

    /// Run `cargo build --release` in the project root, blocking until the
    /// toolchain finishes. Build graph, caching and dependency resolution
    /// are the toolchain's own business; only the exit status matters here.
    pub fn build_release(&self) -> Result<()> {
        let args = [OsStr::new("build"), OsStr::new("--release")];
        let output = command::run_step(&self.cargo, &args, &self.project_root);

        if output.success {
            return Ok(());
        }

        Err(Error::build_failed(StepFailedDetails {
            command: display_command(&self.cargo, &args),
            exit_code: output.exit_code,
            error: output.error,
        }))
    }

    /// Remove debug symbols from the artifact, in place.
    pub fn strip_binary(&self, artifact: &Path) -> Result<()> {
        let args = [artifact.as_os_str()];
        let output = command::run_step(&self.strip, &args, &self.project_root);

        if output.success {
            return Ok(());
        }

        Err(Error::strip_failed(StepFailedDetails {
            command: display_command(&self.strip, &args),
            exit_code: output.exit_code,
            error: output.error,
        }))
    }
}
