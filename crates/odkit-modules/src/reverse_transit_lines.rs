use odkit_bank::Databank;
use odkit_network::{LineSelector, TransitLine};
use odkit_session::{ModellerSession, Module, ModuleReport, Parameter};
use odkit_types::{OdkitError, Result, ScenarioNumber};
use std::collections::BTreeSet;

/// Longest line id the allocator will produce
const MAX_LINE_ID_LEN: usize = 6;

/// Reverses the itineraries of a subset of transit lines.
///
/// Each selected line gets a reversed copy whose id preserves the
/// original id by appending or modifying the final character. The
/// logbook records which new lines are reversed copies of which.
#[derive(Debug, Clone)]
pub struct ReverseTransitLines {
    pub name: String,
    pub scenario_number: Parameter<ScenarioNumber>,
    pub line_selector_expression: Parameter<String>,
}

impl Default for ReverseTransitLines {
    fn default() -> Self {
        ReverseTransitLines {
            name: "Reverse Transit Lines".to_string(),
            scenario_number: Parameter::new(1, "Scenario Number"),
            line_selector_expression: Parameter::new("mode=r".to_string(), "Line Selector"),
        }
    }
}

impl Module for ReverseTransitLines {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, session: &mut ModellerSession) -> Result<ModuleReport> {
        let selector = LineSelector::parse(self.line_selector_expression.get())?;
        let number = self.scenario_number.value();

        let scenario = session
            .bank()
            .scenario(number)
            .ok_or(OdkitError::ScenarioNotFound(number))?;

        let mut taken: BTreeSet<String> = scenario
            .network
            .transit_lines()
            .map(|l| l.id.clone())
            .collect();
        let selected: Vec<TransitLine> = scenario
            .network
            .transit_lines()
            .filter(|l| selector.matches(l))
            .cloned()
            .collect();

        tracing::debug!(selected = selected.len(), "lines matched selector");

        let mut pairs = Vec::with_capacity(selected.len());
        let mut reversed_lines = Vec::with_capacity(selected.len());
        for line in &selected {
            let new_id = reversed_line_id(&line.id, &taken)?;
            taken.insert(new_id.clone());
            let mut itinerary = line.itinerary.clone();
            itinerary.reverse();
            reversed_lines.push(TransitLine {
                id: new_id.clone(),
                mode: line.mode,
                description: format!("Reversed copy of {}", line.id),
                headway_minutes: line.headway_minutes,
                itinerary,
            });
            pairs.push((line.id.clone(), new_id));
        }

        let scenario = session
            .bank_mut()
            .scenario_mut(number)
            .ok_or(OdkitError::ScenarioNotFound(number))?;
        for line in reversed_lines {
            scenario.network.add_transit_line(line)?;
        }

        let count = pairs.len();
        let logbook = session.logbook_mut();
        for (old, new) in &pairs {
            logbook.write(format!("{new} is a reversed copy of {old}"));
        }

        Ok(ModuleReport::new(
            self.name.clone(),
            format!("Done. {count} lines reversed."),
        ))
    }
}

/// Derive an unused id for the reversed copy of `id`.
///
/// Appends a character while the id is short enough, otherwise replaces
/// the final character, trying candidates until one is free.
fn reversed_line_id(id: &str, taken: &BTreeSet<String>) -> Result<String> {
    const CANDIDATES: &[char] = &[
        'r', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q',
        's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ];

    let stem = if id.len() < MAX_LINE_ID_LEN {
        id.to_string()
    } else {
        let mut chars: Vec<char> = id.chars().collect();
        chars.pop();
        chars.into_iter().collect()
    };

    for candidate in CANDIDATES {
        let new_id = format!("{stem}{candidate}");
        if new_id != id && !taken.contains(&new_id) {
            return Ok(new_id);
        }
    }
    Err(OdkitError::Module(format!(
        "no free line id available for a reversed copy of '{id}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_id_appends_when_short() {
        let taken = BTreeSet::from(["r1".to_string()]);
        assert_eq!(reversed_line_id("r1", &taken).unwrap(), "r1r");
    }

    #[test]
    fn test_reversed_id_skips_taken_candidates() {
        let taken = BTreeSet::from(["r1".to_string(), "r1r".to_string(), "r1a".to_string()]);
        assert_eq!(reversed_line_id("r1", &taken).unwrap(), "r1b");
    }

    #[test]
    fn test_reversed_id_replaces_final_char_when_long() {
        let taken = BTreeSet::from(["line01".to_string()]);
        assert_eq!(reversed_line_id("line01", &taken).unwrap(), "line0r");
    }

    #[test]
    fn test_reversed_id_exhaustion_is_an_error() {
        let mut taken = BTreeSet::from(["line01".to_string()]);
        for c in "rabcdefghijklmnopqstuvwxyz0123456789".chars() {
            taken.insert(format!("line0{c}"));
        }
        assert!(reversed_line_id("line01", &taken).is_err());
    }
}
