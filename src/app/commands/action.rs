//! Complete action run: inputs in, step outputs out.

use crate::app::AppContext;
use crate::domain::{AppError, ApplyReport};
use crate::ports::{ActionLog, ActionOutput, InputSource, MigrateClient};

use super::{apply, load, outputs};

pub const DEPRECATION_NOTICE: &str = "This action is deprecated. Please use \
ariga/atlas-action/migrate/apply instead. For details see: \
https://github.com/ariga/atlas-action#arigaatlas-actionmigrateapply";

/// Load inputs, apply migrations and publish the report.
///
/// A report that carries an atlas error is published like any other report and
/// surfaced through the `error` output; the run itself still succeeds.
pub fn execute<I, C, L, O>(
    inputs: &I,
    ctx: &AppContext<C, L>,
    sink: &O,
) -> Result<ApplyReport, AppError>
where
    I: InputSource,
    C: MigrateClient,
    L: ActionLog,
    O: ActionOutput,
{
    ctx.log().warning(DEPRECATION_NOTICE);

    let input = load::load(inputs, ctx.log())?;
    let report = apply::run(ctx, &input)?;
    outputs::publish(&report, sink)?;
    if report.has_error() {
        ctx.log().warning(&format!("atlas reported an error: {}", report.error));
    }
    ctx.log().info(&format!("Run complete: {}", report.summary()));

    Ok(report)
}

/// Message shown in the error annotation for a failed run.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Input(_) => format!("failed to load input: {}", err),
        _ => format!("failed to run: {}", err),
    }
}
