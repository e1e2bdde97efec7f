/// Action input validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A required input is empty or was not provided.
    #[error("{input} is required{}", .condition.map(|c| format!(" when {c}")).unwrap_or_default())]
    MissingRequired { input: &'static str, condition: Option<&'static str> },

    /// An input could not be parsed as its declared type.
    #[error("invalid {input} {value:?}: {details}")]
    InvalidFormat { input: &'static str, value: String, details: String },

    /// An input holds a value outside its fixed set of choices.
    #[error("invalid {input} {value:?}: expected one of {}", .allowed.join(", "))]
    InvalidEnum { input: &'static str, value: String, allowed: &'static [&'static str] },

    /// Two inputs that cannot be combined were both provided.
    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusive { first: &'static str, second: &'static str },
}
