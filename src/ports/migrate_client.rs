use crate::domain::{AppError, ApplyParams, ApplyReport};

/// Client able to run `migrate apply` against a database.
pub trait MigrateClient {
    /// Apply pending migrations and return the structured report.
    ///
    /// A report carrying an error is returned as `Ok` so callers can still
    /// publish what atlas observed.
    fn apply(&self, params: &ApplyParams) -> Result<ApplyReport, AppError>;
}
