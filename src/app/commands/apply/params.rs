use crate::domain::{ActionInput, ApplyParams, dir_url};

/// Map loaded inputs onto apply parameters, without any cloud project file.
pub(crate) fn build_params(input: &ActionInput) -> ApplyParams {
    ApplyParams {
        url: input.url.clone(),
        dir_url: input.dir.as_deref().map(dir_url),
        config_url: None,
        env: None,
        amount: input.amount,
        tx_mode: input.tx_mode,
        baseline_version: input.baseline.clone(),
        allow_dirty: input.allow_dirty,
        revisions_schema: input.revisions_schema.clone(),
    }
}
