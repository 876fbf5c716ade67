use crate::config::SessionConfig;
use crate::logbook::Logbook;
use crate::module::{Module, ModuleReport};
use odkit_bank::MemoryBank;
use odkit_types::Result;
use std::collections::BTreeMap;

/// A modelling session: the databank, logbook, and configuration a host
/// hands to modules when invoking them.
pub struct ModellerSession {
    config: SessionConfig,
    bank: MemoryBank,
    logbook: Logbook,
}

impl ModellerSession {
    pub fn new(config: SessionConfig) -> Self {
        let logbook = if config.enable_logbook {
            Logbook::new()
        } else {
            Logbook::disabled()
        };
        ModellerSession {
            config,
            bank: MemoryBank::new(),
            logbook,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bank(&self) -> &MemoryBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut MemoryBank {
        &mut self.bank
    }

    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    pub fn logbook_mut(&mut self) -> &mut Logbook {
        &mut self.logbook
    }

    /// Run a module against this session, wrapping the run in a logbook
    /// trace and a tracing span
    pub fn invoke(&mut self, module: &dyn Module) -> Result<ModuleReport> {
        let span = tracing::info_span!("module", name = module.name());
        let _guard = span.enter();

        let mut attributes = BTreeMap::new();
        attributes.insert("project".to_string(), self.config.project_name.clone());
        self.logbook.begin_trace(module.name(), attributes);

        let result = module.invoke(self);
        self.logbook.end_trace();

        match &result {
            Ok(report) => {
                tracing::info!(module = %report.module, "{}", report.message);
            }
            Err(err) => {
                tracing::error!(module = module.name(), "module failed: {err}");
                self.logbook.write(format!("Error: {err}"));
            }
        }
        result
    }
}

impl Default for ModellerSession {
    fn default() -> Self {
        ModellerSession::new(SessionConfig::default())
    }
}
