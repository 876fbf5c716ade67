use serde::{Deserialize, Serialize};

/// A named configuration value for a module.
///
/// Modules expose their settings as `Parameter<T>` fields so that hosts
/// can show the name alongside the value and report configuration errors
/// against it, e.g. `Parameter::new(1, "Const Number")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter<T> {
    value: T,
    name: String,
}

impl<T> Parameter<T> {
    pub fn new(value: T, name: impl Into<String>) -> Self {
        Parameter {
            value,
            name: name.into(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Clone> Parameter<T> {
    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<T: Default> Default for Parameter<T> {
    fn default() -> Self {
        Parameter {
            value: T::default(),
            name: String::new(),
        }
    }
}
