use odkit_bank::Databank;
use odkit_session::{ModellerSession, Module, ModuleReport, Parameter};
use odkit_types::{MatrixId, MatrixKind, OdkitError, Result, ScenarioNumber, ZoneSystem};
use std::path::PathBuf;

/// Imports a binary matrix file into a matrix slot of a scenario.
///
/// The file's zones must agree with the scenario's zone system; full
/// matrices must additionally be square. When zones disagree the
/// offending zones are listed in the logbook before the import fails.
#[derive(Debug, Clone)]
pub struct ImportBinaryMatrix {
    pub name: String,
    pub scenario_number: Parameter<ScenarioNumber>,
    pub matrix_number: Parameter<u16>,
    pub matrix_kind: Parameter<MatrixKind>,
    pub file_location: Parameter<PathBuf>,
    pub description: Parameter<String>,
}

impl Default for ImportBinaryMatrix {
    fn default() -> Self {
        ImportBinaryMatrix {
            name: "Import Binary Matrix".to_string(),
            scenario_number: Parameter::new(1, "Scenario Number"),
            matrix_number: Parameter::new(0, "Matrix Number"),
            matrix_kind: Parameter::new(MatrixKind::Full, "Matrix Type"),
            file_location: Parameter::new(PathBuf::new(), "File Location"),
            description: Parameter::new(String::new(), "Description"),
        }
    }
}

impl Module for ImportBinaryMatrix {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, session: &mut ModellerSession) -> Result<ModuleReport> {
        let kind = self.matrix_kind.value();
        let id = MatrixId::new(kind, self.matrix_number.value());
        let path = self.file_location.value();
        if path.as_os_str().is_empty() {
            return Err(OdkitError::Config(format!(
                "{} not specified",
                self.file_location.name()
            )));
        }

        let file = odkit_mtx::read_matrix(&path)?;
        tracing::debug!(path = %path.display(), kind = %file.kind, "matrix file read");
        if file.kind != kind {
            return Err(OdkitError::Format(format!(
                "{} contains '{}' data but slot {} was requested",
                path.display(),
                file.kind,
                id
            )));
        }
        if kind == MatrixKind::Full && !file.data.is_square() {
            return Err(OdkitError::AsymmetricMatrix(id.to_string()));
        }

        let scenario_number =
            crate::scenario::resolve_scenario(session, self.scenario_number.value())?;
        let scenario_zones = session
            .bank()
            .scenario(scenario_number)
            .map(|s| s.network.zone_system())
            .ok_or(OdkitError::ScenarioNotFound(scenario_number))?;

        let matrix_zones = file.data.origin_zones();
        if kind != MatrixKind::Scalar && !matrix_zones.matches(&scenario_zones) {
            log_zone_mismatch(session, &matrix_zones, &scenario_zones);
            return Err(OdkitError::ZoneMismatch(format!(
                "Matrix zones not compatible with scenario {scenario_number}. Check logbook for details."
            )));
        }

        let name = if file.name.is_empty() {
            id.to_string()
        } else {
            file.name.clone()
        };
        let description = if self.description.get().is_empty() {
            file.description.clone()
        } else {
            self.description.value()
        };

        let bank = session.bank_mut();
        bank.init_matrix(id, &name, &description)?;
        bank.set_matrix_data(id, file.data)?;

        session
            .logbook_mut()
            .write(format!("Imported {} into {}", path.display(), id));
        Ok(ModuleReport::new(
            self.name.clone(),
            "Done. Matrix is imported.",
        ))
    }
}

fn log_zone_mismatch(session: &mut ModellerSession, matrix: &ZoneSystem, scenario: &ZoneSystem) {
    let logbook = session.logbook_mut();
    logbook.write("Zones in matrix file but not in scenario:");
    for zone in matrix.missing_from(scenario) {
        logbook.write(zone.to_string());
    }
    logbook.write("Zones in scenario but not in file:");
    for zone in scenario.missing_from(matrix) {
        logbook.write(zone.to_string());
    }
}
