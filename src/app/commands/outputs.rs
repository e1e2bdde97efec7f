use crate::domain::{AppError, ApplyReport};
use crate::ports::ActionOutput;

/// Every output the action sets.
pub const OUTPUT_NAMES: &[&str] = &["error", "current", "target", "pending_count", "applied_count"];

/// Publish the report as step outputs.
pub fn publish(report: &ApplyReport, outputs: &impl ActionOutput) -> Result<(), AppError> {
    outputs.set_output("error", &report.error)?;
    outputs.set_output("current", &report.current)?;
    outputs.set_output("target", &report.target)?;
    outputs.set_output("pending_count", &report.pending_count().to_string())?;
    outputs.set_output("applied_count", &report.applied_count().to_string())?;
    Ok(())
}
