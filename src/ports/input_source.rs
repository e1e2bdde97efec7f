/// Source of named action inputs.
pub trait InputSource {
    /// Value of the input, or `None` when it is unset or empty.
    fn get(&self, name: &str) -> Option<String>;
}
