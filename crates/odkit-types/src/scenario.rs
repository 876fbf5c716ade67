/// Scenario slot number within a databank
pub type ScenarioNumber = u32;
