use crate::ImportBinaryMatrix;
use odkit_bank::Databank;
use odkit_network::fixtures;
use odkit_session::{ModellerSession, ModuleReport, Parameter, SessionConfig};
use odkit_types::{Result, ScenarioNumber};
use std::path::Path;

/// Thin facade over a session for hosts and test suites.
///
/// Bundles the common call sequences (load the fixed test network,
/// import a matrix file) so callers don't have to wire up the module
/// structs themselves; `modeller()` hands out the session for direct
/// module invocation.
pub struct Helper {
    session: ModellerSession,
}

impl Helper {
    pub fn new() -> Self {
        Helper::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Helper {
            session: ModellerSession::new(config),
        }
    }

    /// The underlying session, for invoking modules directly
    pub fn modeller(&mut self) -> &mut ModellerSession {
        &mut self.session
    }

    /// Construct a named module parameter
    pub fn create_parameter<T>(value: T, name: &str) -> Parameter<T> {
        Parameter::new(value, name)
    }

    /// Load the fixed Frabitztown test network into the given scenario
    /// slot, replacing whatever was there
    pub fn import_frabitztown_network(&mut self, scenario: ScenarioNumber) -> Result<()> {
        let network = fixtures::frabitztown();
        self.session
            .bank_mut()
            .replace_scenario(scenario, "Frabitztown", network)?;
        self.session
            .logbook_mut()
            .write(format!("Loaded Frabitztown network into scenario {scenario}"));
        Ok(())
    }

    /// Import a binary matrix file into a full-matrix slot of a scenario
    pub fn import_binary_matrix(
        &mut self,
        scenario: ScenarioNumber,
        matrix_number: u16,
        file: &Path,
    ) -> Result<ModuleReport> {
        let module = ImportBinaryMatrix {
            scenario_number: Parameter::new(scenario, "Scenario Number"),
            matrix_number: Parameter::new(matrix_number, "Matrix Number"),
            file_location: Parameter::new(file.to_path_buf(), "File Location"),
            ..ImportBinaryMatrix::default()
        };
        self.session.invoke(&module)
    }
}

impl Default for Helper {
    fn default() -> Self {
        Helper::new()
    }
}
