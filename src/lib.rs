//! atlas-apply-action: apply database migrations from a GitHub workflow with the atlas CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{AtlasCommandAdapter, EnvInputSource, WorkflowCommands};
use app::{AppContext, commands::action};
use ports::ActionLog;

pub use app::commands::action::{DEPRECATION_NOTICE, failure_message};
pub use domain::{ActionInput, AppError, ApplyReport, InputError};

/// Process-level settings that are not action inputs.
#[derive(Debug, Clone)]
pub struct ActionOptions {
    /// atlas executable, looked up on `PATH` when it has no directory part.
    pub atlas_bin: PathBuf,
    /// Directory atlas runs in. Defaults to the current directory.
    pub working_dir: Option<PathBuf>,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self { atlas_bin: PathBuf::from("atlas"), working_dir: None }
    }
}

/// Run the action against the runner environment.
///
/// Inputs come from `INPUT_*` variables, outputs go to `GITHUB_OUTPUT`, and
/// failures are reported as an error annotation before being returned.
pub fn migrate_apply(options: ActionOptions) -> Result<ApplyReport, AppError> {
    let commands = WorkflowCommands::from_env();
    let result = run_with(&commands, options);
    if let Err(err) = &result {
        commands.error(&failure_message(err));
    }
    result
}

fn run_with(commands: &WorkflowCommands, options: ActionOptions) -> Result<ApplyReport, AppError> {
    let working_dir = match options.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let client = AtlasCommandAdapter::new(working_dir, options.atlas_bin);
    let ctx = AppContext::new(client, commands);

    action::execute(&EnvInputSource::new(), &ctx, commands)
}
