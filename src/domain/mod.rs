pub mod apply_params;
pub mod cloud_config;
pub mod error;
pub mod input;
pub mod report;

pub use apply_params::{ApplyParams, CLOUD_ENV_NAME, dir_url, redact_password, url_password};
pub use cloud_config::{CLOUD_CONFIG_EXTENSION, render_cloud_config};
pub use error::AppError;
pub use input::{ActionInput, CloudInput, InputError, TxMode};
pub use report::{AppliedFile, ApplyReport, MigrationFile, StatementError};
