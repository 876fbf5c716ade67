use odkit_bank::Databank;
use odkit_session::ModellerSession;
use odkit_types::{OdkitError, Result, ScenarioNumber};

/// Resolve the scenario a matrix module operates against.
///
/// When every scenario shares one zone system any of them will do: the
/// requested scenario is taken if present, then the session's default
/// scenario, then the first in the bank. When zone systems diverge only
/// the requested scenario is acceptable and it must exist.
pub(crate) fn resolve_scenario(
    session: &ModellerSession,
    requested: ScenarioNumber,
) -> Result<ScenarioNumber> {
    let bank = session.bank();
    if bank.has_different_zone_systems() {
        if bank.scenario(requested).is_none() {
            return Err(OdkitError::ScenarioNotFound(requested));
        }
        return Ok(requested);
    }
    if bank.scenario(requested).is_some() {
        return Ok(requested);
    }
    if let Some(fallback) = session.config().default_scenario {
        if bank.scenario(fallback).is_some() {
            return Ok(fallback);
        }
    }
    bank.scenarios()
        .first()
        .copied()
        .ok_or(OdkitError::ScenarioNotFound(requested))
}
