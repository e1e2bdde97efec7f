use std::path::PathBuf;
use std::process::{Command, Output};

use crate::domain::{AppError, ApplyParams, ApplyReport};
use crate::ports::MigrateClient;

/// Runs the `atlas` CLI as a subprocess.
#[derive(Debug, Clone)]
pub struct AtlasCommandAdapter {
    working_dir: PathBuf,
    binary: PathBuf,
}

impl AtlasCommandAdapter {
    pub fn new(working_dir: PathBuf, binary: impl Into<PathBuf>) -> Self {
        Self { working_dir, binary: binary.into() }
    }

    fn tool(&self) -> String {
        self.binary.display().to_string()
    }

    fn run(&self, args: &[String]) -> Result<Output, AppError> {
        Command::new(&self.binary).args(args).current_dir(&self.working_dir).output().map_err(
            |e| AppError::ExecutionFailure {
                tool: self.tool(),
                details: format!("Failed to execute {}: {}", self.tool(), e),
            },
        )
    }
}

impl MigrateClient for AtlasCommandAdapter {
    fn apply(&self, params: &ApplyParams) -> Result<ApplyReport, AppError> {
        let output = self.run(&params.to_args())?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();

        if !output.status.success() {
            // atlas prints the report even when execution fails midway.
            if let Some(report) = decode_report(stdout).ok().filter(ApplyReport::has_error) {
                return Ok(report);
            }
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout.to_string()
            } else {
                format!("exited with {}", output.status)
            };
            return Err(AppError::ExecutionFailure { tool: self.tool(), details });
        }

        decode_report(stdout)
    }
}

/// Decode the last JSON line of `stdout`, ignoring any log lines before it.
fn decode_report(stdout: &str) -> Result<ApplyReport, AppError> {
    let line =
        stdout.lines().rev().find(|line| line.trim_start().starts_with('{')).unwrap_or(stdout);
    serde_json::from_str(line).map_err(|e| AppError::ParseError {
        what: "atlas migrate apply report".into(),
        details: e.to_string(),
    })
}
