use std::collections::HashMap;

use crate::ports::InputSource;

/// In-memory inputs keyed by input name (`url`, `tx-mode`, ...).
#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    values: HashMap<String, String>,
}

impl MapInputs {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self { values: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
}

impl InputSource for MapInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }
}
