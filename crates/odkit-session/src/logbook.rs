use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded logbook entry.
///
/// `depth` reflects trace nesting at the time of writing, so tools can
/// group their diagnostics under the trace that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookEntry {
    pub timestamp: DateTime<Utc>,
    pub depth: usize,
    pub title: String,
    pub attributes: BTreeMap<String, String>,
}

/// The session logbook: a flat list of entries with trace nesting.
///
/// Modules report what they did here; failure diagnostics such as the
/// zone listings of a rejected matrix import end up in the logbook, and
/// error messages tell the user to check it.
#[derive(Debug, Clone)]
pub struct Logbook {
    entries: Vec<LogbookEntry>,
    depth: usize,
    enabled: bool,
}

impl Default for Logbook {
    fn default() -> Self {
        Logbook {
            entries: Vec::new(),
            depth: 0,
            enabled: true,
        }
    }
}

impl Logbook {
    pub fn new() -> Self {
        Logbook::default()
    }

    /// A logbook that drops everything; tracing events still fire
    pub fn disabled() -> Self {
        Logbook {
            enabled: false,
            ..Logbook::default()
        }
    }

    /// Open a nested trace. Every subsequent write lands one level deeper
    /// until the matching `end_trace`.
    pub fn begin_trace(&mut self, title: &str, attributes: BTreeMap<String, String>) {
        tracing::info!(target: "odkit::logbook", title, "trace opened");
        if !self.enabled {
            return;
        }
        self.entries.push(LogbookEntry {
            timestamp: Utc::now(),
            depth: self.depth,
            title: title.to_string(),
            attributes,
        });
        self.depth += 1;
    }

    pub fn end_trace(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Record a single line under the current trace
    pub fn write(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: "odkit::logbook", "{line}");
        if !self.enabled {
            return;
        }
        self.entries.push(LogbookEntry {
            timestamp: Utc::now(),
            depth: self.depth,
            title: line,
            attributes: BTreeMap::new(),
        });
    }

    pub fn entries(&self) -> &[LogbookEntry] {
        &self.entries
    }

    /// Entries whose title contains `needle`, for test assertions and
    /// post-mortem digging
    pub fn find(&self, needle: &str) -> Vec<&LogbookEntry> {
        self.entries
            .iter()
            .filter(|e| e.title.contains(needle))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
