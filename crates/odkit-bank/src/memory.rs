use odkit_network::Network;
use odkit_types::{MatrixData, MatrixId, OdkitError, Result, ScenarioNumber};
use std::collections::BTreeMap;

use crate::bank::{BankSnapshot, Databank, Matrix, Scenario};

/// In-memory databank implementation
/// Suitable for testing and single-process sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryBank {
    scenarios: BTreeMap<ScenarioNumber, Scenario>,
    matrices: BTreeMap<MatrixId, Matrix>,
}

impl MemoryBank {
    /// Create a new empty in-memory databank
    pub fn new() -> Self {
        MemoryBank {
            scenarios: BTreeMap::new(),
            matrices: BTreeMap::new(),
        }
    }
}

impl Databank for MemoryBank {
    fn create_scenario(
        &mut self,
        number: ScenarioNumber,
        title: &str,
        network: Network,
    ) -> Result<()> {
        if self.scenarios.contains_key(&number) {
            return Err(OdkitError::ScenarioExists(number));
        }
        self.scenarios.insert(
            number,
            Scenario {
                number,
                title: title.to_string(),
                network,
            },
        );
        Ok(())
    }

    fn replace_scenario(
        &mut self,
        number: ScenarioNumber,
        title: &str,
        network: Network,
    ) -> Result<()> {
        self.scenarios.insert(
            number,
            Scenario {
                number,
                title: title.to_string(),
                network,
            },
        );
        Ok(())
    }

    fn scenario(&self, number: ScenarioNumber) -> Option<&Scenario> {
        self.scenarios.get(&number)
    }

    fn scenario_mut(&mut self, number: ScenarioNumber) -> Option<&mut Scenario> {
        self.scenarios.get_mut(&number)
    }

    fn scenarios(&self) -> Vec<ScenarioNumber> {
        self.scenarios.keys().copied().collect()
    }

    fn delete_scenario(&mut self, number: ScenarioNumber) -> Result<()> {
        self.scenarios
            .remove(&number)
            .map(|_| ())
            .ok_or(OdkitError::ScenarioNotFound(number))
    }

    fn init_matrix(&mut self, id: MatrixId, name: &str, description: &str) -> Result<()> {
        match self.matrices.get_mut(&id) {
            Some(matrix) => {
                if !description.is_empty() {
                    matrix.description = description.to_string();
                }
            }
            None => {
                self.matrices.insert(
                    id,
                    Matrix {
                        id,
                        name: name.to_string(),
                        description: description.to_string(),
                        data: None,
                    },
                );
            }
        }
        Ok(())
    }

    fn matrix(&self, id: MatrixId) -> Option<&Matrix> {
        self.matrices.get(&id)
    }

    fn matrices(&self) -> Vec<MatrixId> {
        self.matrices.keys().copied().collect()
    }

    fn set_matrix_data(&mut self, id: MatrixId, data: MatrixData) -> Result<()> {
        if !data.compatible_with(id.kind) {
            return Err(OdkitError::Format(format!(
                "data shape does not fit matrix slot {id}"
            )));
        }
        data.check_shape()?;

        let matrix = self
            .matrices
            .get_mut(&id)
            .ok_or_else(|| OdkitError::MatrixNotFound(id.to_string()))?;
        matrix.data = Some(data);
        Ok(())
    }

    fn matrix_data(&self, id: MatrixId) -> Option<&MatrixData> {
        self.matrices.get(&id).and_then(|m| m.data.as_ref())
    }

    fn has_different_zone_systems(&self) -> bool {
        let mut systems = self.scenarios.values().map(|s| s.network.zone_system());
        match systems.next() {
            Some(first) => systems.any(|zs| !zs.matches(&first)),
            None => false,
        }
    }

    fn snapshot(&self) -> BankSnapshot {
        BankSnapshot {
            scenarios: self.scenarios.clone(),
            matrices: self.matrices.clone(),
        }
    }

    fn restore(&mut self, snapshot: &BankSnapshot) -> Result<()> {
        self.scenarios = snapshot.scenarios.clone();
        self.matrices = snapshot.matrices.clone();
        Ok(())
    }
}
