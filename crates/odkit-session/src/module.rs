use crate::session::ModellerSession;
use odkit_types::Result;
use serde::{Deserialize, Serialize};

/// What a module reports after a successful run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleReport {
    pub module: String,
    pub message: String,
}

impl ModuleReport {
    pub fn new(module: impl Into<String>, message: impl Into<String>) -> Self {
        ModuleReport {
            module: module.into(),
            message: message.into(),
        }
    }
}

/// A parameterized, invokable unit of toolkit functionality.
///
/// Modules are configured up front (plain struct fields, usually
/// `Parameter<T>`) and then invoked against a session. Failures propagate
/// as errors; there are no retries or partial results.
pub trait Module {
    /// Instance name, e.g. "Importer"
    fn name(&self) -> &str;

    fn invoke(&self, session: &mut ModellerSession) -> Result<ModuleReport>;
}
