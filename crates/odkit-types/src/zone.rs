use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Traffic zone number (a centroid node in the network)
pub type ZoneId = u32;

/// The set of traffic zones a scenario's network defines.
///
/// Matrix data is only valid against a scenario when both agree on the
/// zone system, so this type carries the set-difference queries the
/// import tools use for their diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSystem {
    zones: BTreeSet<ZoneId>,
}

impl ZoneSystem {
    pub fn new() -> Self {
        ZoneSystem {
            zones: BTreeSet::new(),
        }
    }

    pub fn from_zones(zones: impl IntoIterator<Item = ZoneId>) -> Self {
        ZoneSystem {
            zones: zones.into_iter().collect(),
        }
    }

    pub fn contains(&self, zone: ZoneId) -> bool {
        self.zones.contains(&zone)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones in ascending order
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().copied()
    }

    /// True when both systems define exactly the same zones
    pub fn matches(&self, other: &ZoneSystem) -> bool {
        self.zones == other.zones
    }

    /// Zones present here but absent from `other`
    pub fn missing_from(&self, other: &ZoneSystem) -> Vec<ZoneId> {
        self.zones.difference(&other.zones).copied().collect()
    }
}

impl Default for ZoneSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ZoneId> for ZoneSystem {
    fn from_iter<T: IntoIterator<Item = ZoneId>>(iter: T) -> Self {
        ZoneSystem::from_zones(iter)
    }
}
