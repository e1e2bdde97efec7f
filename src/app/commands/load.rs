//! Action input loading.

use crate::domain::input::{parse_amount, parse_bool, parse_service_url};
use crate::domain::{ActionInput, InputError, url_password};
use crate::ports::{ActionLog, InputSource};

/// Every input the loader reads, in the order it reads them.
pub const INPUT_NAMES: &[&str] = &[
    "url",
    "amount",
    "count",
    "tx-mode",
    "baseline",
    "allow-dirty",
    "revisions-schema",
    "dir",
    "cloud-dir",
    "cloud-token",
    "cloud-url",
    "cloud-tag",
];

/// Build a validated [`ActionInput`] from the action's inputs.
///
/// `amount` wins over its older alias `count` when both are set. The cloud token
/// and the database password are registered as secrets before any validation runs.
pub fn load(inputs: &impl InputSource, log: &impl ActionLog) -> Result<ActionInput, InputError> {
    let cloud_token = inputs.get("cloud-token");
    if let Some(token) = &cloud_token {
        log.add_mask(token);
    }

    let url =
        inputs.get("url").ok_or(InputError::MissingRequired { input: "url", condition: None })?;
    if let Some(password) = url_password(&url) {
        log.add_mask(&password);
    }
    let mut input = ActionInput { url, ..Default::default() };

    if let Some(value) = inputs.get("amount") {
        input.amount = parse_amount("amount", &value)?;
    } else if let Some(value) = inputs.get("count") {
        input.amount = parse_amount("count", &value)?;
    }
    if let Some(value) = inputs.get("tx-mode") {
        input.tx_mode = Some(value.parse()?);
    }
    input.baseline = inputs.get("baseline");
    if let Some(value) = inputs.get("allow-dirty") {
        input.allow_dirty = parse_bool("allow-dirty", &value)?;
    }
    input.revisions_schema = inputs.get("revisions-schema");
    input.dir = inputs.get("dir");
    input.cloud.dir = inputs.get("cloud-dir");
    input.cloud.token = cloud_token;
    input.cloud.url = inputs.get("cloud-url");
    input.cloud.tag = inputs.get("cloud-tag");

    input.validate()?;
    if let Some(url) = &input.cloud.url {
        parse_service_url("cloud-url", url)?;
    }

    log.debug(&format!(
        "Loaded inputs: amount={} tx-mode={} baseline={} allow-dirty={} source={}",
        input.amount,
        input.tx_mode.map(|m| m.label()).unwrap_or("<default>"),
        input.baseline.as_deref().unwrap_or("<none>"),
        input.allow_dirty,
        match (&input.dir, &input.cloud.dir) {
            (Some(dir), _) => format!("dir:{}", dir),
            (None, Some(dir)) => format!("cloud-dir:{}", dir),
            (None, None) => "<atlas default>".to_string(),
        }
    ));
    Ok(input)
}
