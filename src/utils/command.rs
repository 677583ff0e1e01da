//! Command execution primitives with consistent status reporting.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use serde::Serialize;

/// Outcome of running an external step with inherited stdio.
///
/// The child shares this process's stdout/stderr, so its diagnostics reach
/// the operator unmodified; only the exit status is captured here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    pub success: bool,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run a program with inherited stdio in a working directory.
///
/// Arguments are `OsStr` so non-UTF-8 paths pass through unmodified.
/// Never panics: a spawn failure is reported as an unsuccessful `StepOutput`.
/// A missing program maps to exit code 127 (shell convention), other spawn
/// errors to -1. A child killed by a signal also reports -1.
pub fn run_step(program: &Path, args: &[&OsStr], dir: &Path) -> StepOutput {
    match Command::new(program).args(args).current_dir(dir).status() {
        Ok(status) => StepOutput {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            error: None,
        },
        Err(e) => {
            let exit_code = if e.kind() == std::io::ErrorKind::NotFound {
                127
            } else {
                -1
            };
            StepOutput {
                success: false,
                exit_code,
                error: Some(format!("Failed to run {}: {}", program.display(), e)),
            }
        }
    }
}

/// Render a program and its arguments as a single display string for error details.
pub fn display_command(program: &Path, args: &[&OsStr]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
