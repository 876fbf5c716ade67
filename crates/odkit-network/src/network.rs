use odkit_types::{OdkitError, Result, ZoneSystem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Network node identifier; centroid nodes double as traffic zones
pub type NodeId = u32;

/// Travel mode classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    /// Private vehicle modes
    Auto,
    /// Scheduled transit modes that carry lines
    Transit,
    /// Access/egress modes (walking, etc.)
    Auxiliary,
}

/// A travel mode, keyed by a single character as in network editors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub id: char,
    pub description: String,
    pub kind: ModeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub is_centroid: bool,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
    /// Mode characters permitted on this link, e.g. "cbr"
    pub modes: String,
}

/// A one-directional transit line and its stop sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitLine {
    pub id: String,
    pub mode: char,
    pub description: String,
    pub headway_minutes: f64,
    pub itinerary: Vec<NodeId>,
}

/// In-memory road and transit network for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub title: String,
    modes: BTreeMap<char, Mode>,
    nodes: BTreeMap<NodeId, Node>,
    // Keyed "from:to" so the map survives JSON serialization
    links: BTreeMap<String, Link>,
    transit_lines: BTreeMap<String, TransitLine>,
}

fn link_key(from: NodeId, to: NodeId) -> String {
    format!("{from}:{to}")
}

impl Network {
    pub fn new(title: impl Into<String>) -> Self {
        Network {
            title: title.into(),
            modes: BTreeMap::new(),
            nodes: BTreeMap::new(),
            links: BTreeMap::new(),
            transit_lines: BTreeMap::new(),
        }
    }

    pub fn add_mode(&mut self, mode: Mode) -> Result<()> {
        if self.modes.contains_key(&mode.id) {
            return Err(OdkitError::Network(format!(
                "mode '{}' already defined",
                mode.id
            )));
        }
        self.modes.insert(mode.id, mode);
        Ok(())
    }

    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(OdkitError::Network(format!(
                "node {} already defined",
                node.id
            )));
        }
        self.nodes.insert(node.id, node);
        Ok(())
    }

    pub fn add_link(&mut self, link: Link) -> Result<()> {
        for end in [link.from, link.to] {
            if !self.nodes.contains_key(&end) {
                return Err(OdkitError::Network(format!(
                    "link {}-{} references unknown node {}",
                    link.from, link.to, end
                )));
            }
        }
        for mode in link.modes.chars() {
            if !self.modes.contains_key(&mode) {
                return Err(OdkitError::Network(format!(
                    "link {}-{} references unknown mode '{}'",
                    link.from, link.to, mode
                )));
            }
        }
        let key = link_key(link.from, link.to);
        if self.links.contains_key(&key) {
            return Err(OdkitError::Network(format!(
                "link {}-{} already defined",
                link.from, link.to
            )));
        }
        self.links.insert(key, link);
        Ok(())
    }

    /// Add a transit line. The line's mode must be a transit mode and its
    /// itinerary must follow existing links that permit that mode.
    pub fn add_transit_line(&mut self, line: TransitLine) -> Result<()> {
        if self.transit_lines.contains_key(&line.id) {
            return Err(OdkitError::Network(format!(
                "transit line '{}' already defined",
                line.id
            )));
        }
        match self.modes.get(&line.mode) {
            Some(mode) if mode.kind == ModeKind::Transit => {}
            Some(_) => {
                return Err(OdkitError::Network(format!(
                    "mode '{}' of line '{}' is not a transit mode",
                    line.mode, line.id
                )))
            }
            None => {
                return Err(OdkitError::Network(format!(
                    "line '{}' references unknown mode '{}'",
                    line.id, line.mode
                )))
            }
        }
        if line.itinerary.len() < 2 {
            return Err(OdkitError::Network(format!(
                "line '{}' needs an itinerary of at least two nodes",
                line.id
            )));
        }
        for pair in line.itinerary.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let link = self.links.get(&link_key(from, to)).ok_or_else(|| {
                OdkitError::Network(format!(
                    "line '{}' itinerary uses missing link {}-{}",
                    line.id, from, to
                ))
            })?;
            if !link.modes.contains(line.mode) {
                return Err(OdkitError::Network(format!(
                    "line '{}' uses link {}-{} which does not permit mode '{}'",
                    line.id, from, to, line.mode
                )));
            }
        }
        self.transit_lines.insert(line.id.clone(), line);
        Ok(())
    }

    pub fn mode(&self, id: char) -> Option<&Mode> {
        self.modes.get(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn link(&self, from: NodeId, to: NodeId) -> Option<&Link> {
        self.links.get(&link_key(from, to))
    }

    pub fn transit_line(&self, id: &str) -> Option<&TransitLine> {
        self.transit_lines.get(id)
    }

    pub fn transit_lines(&self) -> impl Iterator<Item = &TransitLine> {
        self.transit_lines.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn transit_line_count(&self) -> usize {
        self.transit_lines.len()
    }

    /// The traffic zones of this network (its centroid nodes)
    pub fn zone_system(&self) -> ZoneSystem {
        self.nodes
            .values()
            .filter(|n| n.is_centroid)
            .map(|n| n.id)
            .collect()
    }
}
