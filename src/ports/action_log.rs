/// Logger for messages shown in the workflow run log.
pub trait ActionLog {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    /// Emit a warning annotation.
    fn warning(&self, message: &str);

    /// Emit an error annotation. Does not terminate the run.
    fn error(&self, message: &str);

    /// Register a secret so the host redacts it from all later log lines.
    fn add_mask(&self, secret: &str);
}

impl<T: ActionLog + ?Sized> ActionLog for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn add_mask(&self, secret: &str) {
        (**self).add_mask(secret)
    }
}
