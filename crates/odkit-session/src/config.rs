use odkit_types::ScenarioNumber;
use serde::{Deserialize, Serialize};

/// Configuration for a modeller session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Project name shown in logbook traces
    pub project_name: String,

    /// Scenario matrix modules fall back to when the requested scenario
    /// is absent, tried before the bank's first scenario
    pub default_scenario: Option<ScenarioNumber>,

    /// Record module activity in the in-session logbook
    pub enable_logbook: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            project_name: "odkit project".to_string(),
            default_scenario: None,
            enable_logbook: true,
        }
    }
}
