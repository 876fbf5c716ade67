use odkit_bank::Databank;
use odkit_network::NetworkPackage;
use odkit_session::{ModellerSession, Module, ModuleReport, Parameter};
use odkit_types::{OdkitError, Result, ScenarioNumber};
use std::path::PathBuf;

/// Exports a scenario's network to a network package file.
#[derive(Debug, Clone)]
pub struct ExportNetworkPackage {
    pub name: String,
    pub scenario_number: Parameter<ScenarioNumber>,
    pub file_location: Parameter<PathBuf>,
    /// Free-form comment stored in the package metadata
    pub comment: Parameter<String>,
}

impl Default for ExportNetworkPackage {
    fn default() -> Self {
        ExportNetworkPackage {
            name: "Export Network Package".to_string(),
            scenario_number: Parameter::new(1, "Scenario Number"),
            file_location: Parameter::new(PathBuf::new(), "File Location"),
            comment: Parameter::new(String::new(), "Export Comment"),
        }
    }
}

impl Module for ExportNetworkPackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, session: &mut ModellerSession) -> Result<ModuleReport> {
        let path = self.file_location.value();
        if path.as_os_str().is_empty() {
            return Err(OdkitError::Config(format!(
                "{} not specified",
                self.file_location.name()
            )));
        }

        let number = self.scenario_number.value();
        let scenario = session
            .bank()
            .scenario(number)
            .ok_or(OdkitError::ScenarioNotFound(number))?;

        let package = NetworkPackage::new(scenario.network.clone(), self.comment.value());
        package.save(&path)?;

        session.logbook_mut().write(format!(
            "Exported scenario {} to {}",
            number,
            path.display()
        ));
        Ok(ModuleReport::new(
            self.name.clone(),
            format!("Done. Scenario exported to {}.", path.display()),
        ))
    }
}
