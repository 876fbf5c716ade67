use odkit_network::Network;
use odkit_types::{MatrixData, MatrixId, Result, ScenarioNumber};
use serde::{Deserialize, Serialize};

/// A numbered scenario slot holding one network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub number: ScenarioNumber,
    pub title: String,
    pub network: Network,
}

/// A matrix slot: metadata plus the stored data, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub id: MatrixId,
    pub name: String,
    pub description: String,
    pub data: Option<MatrixData>,
}

/// Databank trait for scenario and matrix storage.
/// Provides an abstraction that can be implemented for in-memory,
/// file-backed, or remote storage.
pub trait Databank {
    /// Create a scenario in the given slot; fails if the slot is taken
    fn create_scenario(
        &mut self,
        number: ScenarioNumber,
        title: &str,
        network: Network,
    ) -> Result<()>;

    /// Replace or create a scenario in the given slot
    fn replace_scenario(
        &mut self,
        number: ScenarioNumber,
        title: &str,
        network: Network,
    ) -> Result<()>;

    fn scenario(&self, number: ScenarioNumber) -> Option<&Scenario>;

    fn scenario_mut(&mut self, number: ScenarioNumber) -> Option<&mut Scenario>;

    /// Scenario numbers in ascending order
    fn scenarios(&self) -> Vec<ScenarioNumber>;

    fn delete_scenario(&mut self, number: ScenarioNumber) -> Result<()>;

    /// Create a matrix slot if absent; if present, update the description
    /// when a non-empty one is given. Mirrors the initialize-matrix helper
    /// the import tools rely on.
    fn init_matrix(&mut self, id: MatrixId, name: &str, description: &str) -> Result<()>;

    fn matrix(&self, id: MatrixId) -> Option<&Matrix>;

    /// Matrix ids in ascending order
    fn matrices(&self) -> Vec<MatrixId>;

    /// Store data into an existing matrix slot; the data shape must fit
    /// the slot's kind
    fn set_matrix_data(&mut self, id: MatrixId, data: MatrixData) -> Result<()>;

    fn matrix_data(&self, id: MatrixId) -> Option<&MatrixData>;

    /// True when the stored scenarios disagree on their zone systems.
    /// Import tools must then be told which scenario to validate against.
    fn has_different_zone_systems(&self) -> bool;

    /// Get a snapshot of the whole bank (for checkpoint/restore)
    fn snapshot(&self) -> BankSnapshot;

    /// Restore from a snapshot
    fn restore(&mut self, snapshot: &BankSnapshot) -> Result<()>;
}

/// Snapshot of databank state for checkpoint/restore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSnapshot {
    pub scenarios: std::collections::BTreeMap<ScenarioNumber, Scenario>,
    pub matrices: std::collections::BTreeMap<MatrixId, Matrix>,
}
