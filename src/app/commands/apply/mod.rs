//! `migrate apply` dispatch.

mod params;

use crate::adapters::ScopedConfigFile;
use crate::app::AppContext;
use crate::domain::{
    ActionInput, AppError, ApplyReport, CLOUD_CONFIG_EXTENSION, CLOUD_ENV_NAME, render_cloud_config,
};
use crate::ports::{ActionLog, MigrateClient};

pub(crate) use params::build_params;

/// Apply migrations for `input` and return atlas' report unchanged.
///
/// For cloud directories a project file is written to a temporary location for
/// the duration of the call; it is removed on every return path.
pub fn run<C, L>(ctx: &AppContext<C, L>, input: &ActionInput) -> Result<ApplyReport, AppError>
where
    C: MigrateClient,
    L: ActionLog,
{
    let mut params = build_params(input);

    // Must outlive the client call below.
    let _cloud_config = if input.uses_cloud() {
        let document = render_cloud_config(&input.cloud)?;
        let file = ScopedConfigFile::create(&document, CLOUD_CONFIG_EXTENSION)?;
        ctx.log().debug(&format!("Wrote cloud project file to {}", file.path().display()));
        params.config_url = Some(file.url().to_string());
        params.env = Some(CLOUD_ENV_NAME.to_string());
        Some(file)
    } else {
        None
    };

    ctx.log().debug(&format!("Running: atlas {}", params.display_args().join(" ")));
    ctx.client().apply(&params)
}
