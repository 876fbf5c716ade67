use crate::network::TransitLine;
use odkit_types::{OdkitError, Result};

/// A parsed transit-line selector expression.
///
/// Supported forms: `all`, `mode=r`, `id=r1`, `headway<10`, `headway>10`,
/// and conjunctions joined with `and`, e.g. `mode=b and headway<15`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSelector {
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq)]
enum Clause {
    ModeEquals(char),
    IdEquals(String),
    HeadwayBelow(f64),
    HeadwayAbove(f64),
}

impl LineSelector {
    /// Selector matching every line
    pub fn all() -> Self {
        LineSelector { clauses: Vec::new() }
    }

    pub fn parse(expression: &str) -> Result<Self> {
        let expression = expression.trim();
        if expression.is_empty() || expression.eq_ignore_ascii_case("all") {
            return Ok(LineSelector::all());
        }

        let mut clauses = Vec::new();
        for term in expression.split(" and ") {
            clauses.push(Clause::parse(term.trim())?);
        }
        Ok(LineSelector { clauses })
    }

    pub fn matches(&self, line: &TransitLine) -> bool {
        self.clauses.iter().all(|clause| clause.matches(line))
    }
}

impl Clause {
    fn parse(term: &str) -> Result<Self> {
        let (attribute, op, value) = split_term(term)
            .ok_or_else(|| OdkitError::Selector(format!("cannot parse term '{term}'")))?;

        match (attribute, op) {
            ("mode", '=') => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Clause::ModeEquals(c)),
                    _ => Err(OdkitError::Selector(format!(
                        "mode selector needs a single character, got '{value}'"
                    ))),
                }
            }
            ("id", '=') => Ok(Clause::IdEquals(value.to_string())),
            ("headway", '<') | ("headway", '>') => {
                let minutes = value.parse::<f64>().map_err(|_| {
                    OdkitError::Selector(format!("invalid headway value '{value}'"))
                })?;
                if op == '<' {
                    Ok(Clause::HeadwayBelow(minutes))
                } else {
                    Ok(Clause::HeadwayAbove(minutes))
                }
            }
            _ => Err(OdkitError::Selector(format!(
                "unknown selector term '{term}'"
            ))),
        }
    }

    fn matches(&self, line: &TransitLine) -> bool {
        match self {
            Clause::ModeEquals(mode) => line.mode == *mode,
            Clause::IdEquals(id) => line.id == *id,
            Clause::HeadwayBelow(minutes) => line.headway_minutes < *minutes,
            Clause::HeadwayAbove(minutes) => line.headway_minutes > *minutes,
        }
    }
}

fn split_term(term: &str) -> Option<(&str, char, &str)> {
    let idx = term.find(['=', '<', '>'])?;
    let op = term[idx..].chars().next()?;
    let attribute = term[..idx].trim();
    let value = term[idx + op.len_utf8()..].trim();
    if attribute.is_empty() || value.is_empty() {
        return None;
    }
    Some((attribute, op, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, mode: char, headway: f64) -> TransitLine {
        TransitLine {
            id: id.to_string(),
            mode,
            description: String::new(),
            headway_minutes: headway,
            itinerary: vec![1, 2],
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let selector = LineSelector::parse("all").unwrap();
        assert!(selector.matches(&line("r1", 'r', 10.0)));
        assert!(selector.matches(&line("b2", 'b', 5.0)));
    }

    #[test]
    fn test_mode_selector() {
        let selector = LineSelector::parse("mode=r").unwrap();
        assert!(selector.matches(&line("r1", 'r', 10.0)));
        assert!(!selector.matches(&line("b2", 'b', 10.0)));
    }

    #[test]
    fn test_conjunction() {
        let selector = LineSelector::parse("mode=b and headway<15").unwrap();
        assert!(selector.matches(&line("b1", 'b', 10.0)));
        assert!(!selector.matches(&line("b2", 'b', 20.0)));
        assert!(!selector.matches(&line("r1", 'r', 10.0)));
    }

    #[test]
    fn test_id_selector() {
        let selector = LineSelector::parse("id=r1").unwrap();
        assert!(selector.matches(&line("r1", 'r', 10.0)));
        assert!(!selector.matches(&line("r2", 'r', 10.0)));
    }

    #[test]
    fn test_bad_terms_rejected() {
        assert!(LineSelector::parse("mode=rb").is_err());
        assert!(LineSelector::parse("colour=red").is_err());
        assert!(LineSelector::parse("headway<fast").is_err());
        assert!(LineSelector::parse("mode=").is_err());
    }
}
