//! Validated action configuration.

mod error;
mod parse;
mod tx_mode;

pub use error::InputError;
pub use parse::{parse_amount, parse_bool, parse_service_url};
pub use tx_mode::TxMode;

/// Configuration record created from the action's `with:` inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInput {
    /// Target database connection URL.
    pub url: String,
    /// Maximum number of migration files to apply. `0` applies all pending files.
    pub amount: u64,
    pub tx_mode: Option<TxMode>,
    pub baseline: Option<String>,
    pub allow_dirty: bool,
    pub revisions_schema: Option<String>,
    /// Local migration directory.
    pub dir: Option<String>,
    pub cloud: CloudInput,
}

/// Atlas Cloud settings for a remotely managed migration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudInput {
    pub dir: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub tag: Option<String>,
}

impl ActionInput {
    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.url.is_empty() {
            return Err(InputError::MissingRequired { input: "url", condition: None });
        }
        if self.dir.is_some() && self.cloud.dir.is_some() {
            return Err(InputError::MutuallyExclusive { first: "dir", second: "cloud-dir" });
        }
        if self.cloud.dir.is_some() && self.cloud.token.is_none() {
            return Err(InputError::MissingRequired {
                input: "cloud-token",
                condition: Some("cloud-dir is set"),
            });
        }
        Ok(())
    }

    /// Whether the migration directory is served by Atlas Cloud.
    pub fn uses_cloud(&self) -> bool {
        self.cloud.dir.is_some()
    }
}
