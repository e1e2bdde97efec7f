use crate::ports::InputSource;

type Getenv = Box<dyn Fn(&str) -> Option<String>>;

/// Reads action inputs from the `INPUT_*` variables set by the runner.
pub struct EnvInputSource {
    getenv: Getenv,
}

impl EnvInputSource {
    /// Read from the process environment.
    pub fn new() -> Self {
        Self::with_getenv(|key| std::env::var(key).ok())
    }

    /// Read through a custom lookup, keyed by full variable name.
    pub fn with_getenv(getenv: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self { getenv: Box::new(getenv) }
    }

    /// Variable name the runner uses for an input.
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.to_uppercase().replace(' ', "_"))
    }
}

impl Default for EnvInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for EnvInputSource {
    fn get(&self, name: &str) -> Option<String> {
        (self.getenv)(&Self::variable_name(name))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
