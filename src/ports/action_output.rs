use crate::domain::AppError;

/// Sink for step outputs consumed by later workflow steps.
pub trait ActionOutput {
    fn set_output(&self, name: &str, value: &str) -> Result<(), AppError>;
}
