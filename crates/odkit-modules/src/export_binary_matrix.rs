use odkit_bank::Databank;
use odkit_mtx::MatrixFile;
use odkit_session::{ModellerSession, Module, ModuleReport, Parameter};
use odkit_types::{MatrixId, MatrixKind, OdkitError, Result, ScenarioNumber};
use std::path::PathBuf;

/// Exports the data of an existing matrix slot to a binary matrix file.
#[derive(Debug, Clone)]
pub struct ExportBinaryMatrix {
    pub name: String,
    pub scenario_number: Parameter<ScenarioNumber>,
    pub matrix_number: Parameter<u16>,
    pub matrix_kind: Parameter<MatrixKind>,
    pub file_location: Parameter<PathBuf>,
}

impl Default for ExportBinaryMatrix {
    fn default() -> Self {
        ExportBinaryMatrix {
            name: "Export Binary Matrix".to_string(),
            scenario_number: Parameter::new(1, "Scenario Number"),
            matrix_number: Parameter::new(0, "Matrix Number"),
            matrix_kind: Parameter::new(MatrixKind::Full, "Matrix Type"),
            file_location: Parameter::new(PathBuf::new(), "File Location"),
        }
    }
}

impl Module for ExportBinaryMatrix {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, session: &mut ModellerSession) -> Result<ModuleReport> {
        let id = MatrixId::new(self.matrix_kind.value(), self.matrix_number.value());
        let path = self.file_location.value();
        if path.as_os_str().is_empty() {
            return Err(OdkitError::Config(format!(
                "{} not specified",
                self.file_location.name()
            )));
        }

        let matrix = session
            .bank()
            .matrix(id)
            .ok_or_else(|| OdkitError::MatrixNotFound(id.to_string()))?;
        let data = matrix
            .data
            .clone()
            .ok_or_else(|| OdkitError::Module(format!("matrix {id} holds no data")))?;

        // Banks with divergent zone systems need a real scenario to pin
        // down which zones the exported values describe
        let scenario_number =
            crate::scenario::resolve_scenario(session, self.scenario_number.value())?;
        tracing::debug!(scenario = scenario_number, matrix = %id, "exporting matrix");

        let mut file = MatrixFile::new(id.kind, matrix.name.clone(), data);
        file.description = matrix.description.clone();
        odkit_mtx::write_matrix(&path, &file)?;

        session
            .logbook_mut()
            .write(format!("Exported {} to {}", id, path.display()));
        Ok(ModuleReport::new(
            self.name.clone(),
            format!("Done. Matrix {id} is exported."),
        ))
    }
}
