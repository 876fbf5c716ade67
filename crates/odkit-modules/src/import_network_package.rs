use odkit_bank::Databank;
use odkit_network::NetworkPackage;
use odkit_session::{ModellerSession, Module, ModuleReport, Parameter};
use odkit_types::{OdkitError, Result, ScenarioNumber};
use std::path::PathBuf;

/// Loads a network package file into a scenario slot.
#[derive(Debug, Clone)]
pub struct ImportNetworkPackage {
    pub name: String,
    pub scenario_number: Parameter<ScenarioNumber>,
    pub file_location: Parameter<PathBuf>,
    /// Scenario title; the package's network title is used when empty
    pub scenario_title: Parameter<String>,
    pub overwrite: Parameter<bool>,
}

impl Default for ImportNetworkPackage {
    fn default() -> Self {
        ImportNetworkPackage {
            name: "Import Network Package".to_string(),
            scenario_number: Parameter::new(1, "Scenario Number"),
            file_location: Parameter::new(PathBuf::new(), "File Location"),
            scenario_title: Parameter::new(String::new(), "Scenario Title"),
            overwrite: Parameter::new(false, "Overwrite"),
        }
    }
}

impl Module for ImportNetworkPackage {
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

        let package = NetworkPackage::load(&path)?;
        let number = self.scenario_number.value();
        let title = if self.scenario_title.get().is_empty() {
            package.network.title.clone()
        } else {
            self.scenario_title.value()
        };

        let bank = session.bank_mut();
        if self.overwrite.value() {
            bank.replace_scenario(number, &title, package.network)?;
        } else {
            bank.create_scenario(number, &title, package.network)?;
        }

        session.logbook_mut().write(format!(
            "Loaded {} into scenario {}",
            path.display(),
            number
        ));
        Ok(ModuleReport::new(
            self.name.clone(),
            format!("Done. Network imported into scenario {number}."),
        ))
    }
}
