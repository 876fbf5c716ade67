use crate::error::{OdkitError, Result};
use crate::zone::{ZoneId, ZoneSystem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four matrix shapes a databank can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatrixKind {
    Scalar,
    Origin,
    Destination,
    Full,
}

impl MatrixKind {
    /// Returns all matrix kinds
    pub fn all() -> &'static [MatrixKind] {
        &[
            MatrixKind::Scalar,
            MatrixKind::Origin,
            MatrixKind::Destination,
            MatrixKind::Full,
        ]
    }

    /// Two-letter identifier prefix (`ms`, `mo`, `md`, `mf`)
    pub fn code(&self) -> &'static str {
        match self {
            MatrixKind::Scalar => "ms",
            MatrixKind::Origin => "mo",
            MatrixKind::Destination => "md",
            MatrixKind::Full => "mf",
        }
    }

    /// Parse a two-letter identifier prefix
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ms" => Some(MatrixKind::Scalar),
            "mo" => Some(MatrixKind::Origin),
            "md" => Some(MatrixKind::Destination),
            "mf" => Some(MatrixKind::Full),
            _ => None,
        }
    }

    /// Numeric code used by module parameters (1 scalar, 2 origin,
    /// 3 destination, 4 full)
    pub fn type_number(&self) -> u8 {
        match self {
            MatrixKind::Scalar => 1,
            MatrixKind::Origin => 2,
            MatrixKind::Destination => 3,
            MatrixKind::Full => 4,
        }
    }

    /// Parse the numeric module-parameter code
    pub fn from_type_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(MatrixKind::Scalar),
            2 => Ok(MatrixKind::Origin),
            3 => Ok(MatrixKind::Destination),
            4 => Ok(MatrixKind::Full),
            _ => Err(OdkitError::InvalidMatrixKind(n.to_string())),
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A matrix slot identifier, e.g. `mf10`.
///
/// Serializes as its display string so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixId {
    pub kind: MatrixKind,
    pub number: u16,
}

impl Serialize for MatrixId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MatrixId {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MatrixId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl MatrixId {
    pub fn new(kind: MatrixKind, number: u16) -> Self {
        MatrixId { kind, number }
    }

    pub fn full(number: u16) -> Self {
        MatrixId::new(MatrixKind::Full, number)
    }

    /// Parse an identifier like `mf10`
    pub fn parse(s: &str) -> Result<Self> {
        // A multi-byte char straddling the prefix would make split_at panic
        if s.len() < 3 || !s.is_char_boundary(2) {
            return Err(OdkitError::InvalidMatrixId(s.to_string()));
        }
        let (code, number) = s.split_at(2);
        let kind = MatrixKind::from_code(code)
            .ok_or_else(|| OdkitError::InvalidMatrixId(s.to_string()))?;
        let number = number
            .parse::<u16>()
            .map_err(|_| OdkitError::InvalidMatrixId(s.to_string()))?;
        Ok(MatrixId { kind, number })
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.code(), self.number)
    }
}

/// Matrix values together with the zones that index them.
///
/// `Full` stores a row-major buffer of `origins.len() * destinations.len()`
/// values; `Vector` covers both origin and destination matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatrixData {
    Scalar(f64),
    Vector {
        zones: Vec<ZoneId>,
        values: Vec<f64>,
    },
    Full {
        origins: Vec<ZoneId>,
        destinations: Vec<ZoneId>,
        values: Vec<f64>,
    },
}

impl MatrixData {
    /// Full matrix with every cell produced by `f(origin, destination)`
    pub fn full_from_fn(
        zones: &[ZoneId],
        mut f: impl FnMut(ZoneId, ZoneId) -> f64,
    ) -> MatrixData {
        let mut values = Vec::with_capacity(zones.len() * zones.len());
        for &o in zones {
            for &d in zones {
                values.push(f(o, d));
            }
        }
        MatrixData::Full {
            origins: zones.to_vec(),
            destinations: zones.to_vec(),
            values,
        }
    }

    /// Square full matrix with the same value in every cell
    pub fn full_uniform(zones: &[ZoneId], value: f64) -> MatrixData {
        MatrixData::full_from_fn(zones, |_, _| value)
    }

    /// The kind of slot this data can be stored in.
    ///
    /// Vector data fits both origin and destination slots, so the caller
    /// decides between the two; `compatible_with` captures that rule.
    pub fn compatible_with(&self, kind: MatrixKind) -> bool {
        match self {
            MatrixData::Scalar(_) => kind == MatrixKind::Scalar,
            MatrixData::Vector { .. } => {
                kind == MatrixKind::Origin || kind == MatrixKind::Destination
            }
            MatrixData::Full { .. } => kind == MatrixKind::Full,
        }
    }

    /// Zones indexing the first dimension (origins for full matrices)
    pub fn origin_zones(&self) -> ZoneSystem {
        match self {
            MatrixData::Scalar(_) => ZoneSystem::new(),
            MatrixData::Vector { zones, .. } => ZoneSystem::from_zones(zones.iter().copied()),
            MatrixData::Full { origins, .. } => ZoneSystem::from_zones(origins.iter().copied()),
        }
    }

    /// For full matrices, whether origin and destination zone sets agree
    pub fn is_square(&self) -> bool {
        match self {
            MatrixData::Full {
                origins,
                destinations,
                ..
            } => {
                let o = ZoneSystem::from_zones(origins.iter().copied());
                let d = ZoneSystem::from_zones(destinations.iter().copied());
                o.matches(&d)
            }
            _ => true,
        }
    }

    /// Number of stored values
    pub fn value_count(&self) -> usize {
        match self {
            MatrixData::Scalar(_) => 1,
            MatrixData::Vector { values, .. } => values.len(),
            MatrixData::Full { values, .. } => values.len(),
        }
    }

    /// Validate that the value buffer matches the declared shape
    pub fn check_shape(&self) -> Result<()> {
        match self {
            MatrixData::Scalar(_) => Ok(()),
            MatrixData::Vector { zones, values } => {
                if zones.len() != values.len() {
                    return Err(OdkitError::Format(format!(
                        "vector matrix has {} zones but {} values",
                        zones.len(),
                        values.len()
                    )));
                }
                Ok(())
            }
            MatrixData::Full {
                origins,
                destinations,
                values,
            } => {
                let expected = origins.len() * destinations.len();
                if values.len() != expected {
                    return Err(OdkitError::Format(format!(
                        "full matrix has shape {}x{} but {} values",
                        origins.len(),
                        destinations.len(),
                        values.len()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Cell lookup for full matrices, `None` when either zone is unknown
    pub fn get(&self, origin: ZoneId, destination: ZoneId) -> Option<f64> {
        match self {
            MatrixData::Full {
                origins,
                destinations,
                values,
            } => {
                let row = origins.iter().position(|&z| z == origin)?;
                let col = destinations.iter().position(|&z| z == destination)?;
                values.get(row * destinations.len() + col).copied()
            }
            _ => None,
        }
    }
}
