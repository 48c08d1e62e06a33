use crate::consts::{BULLSEYE_SCORE, DARTBOARD_SEGMENTS, OUTER_BULL_SCORE};
use crate::error::{DartError, DcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The ring a section belongs to. Serialized in kebab-case (`outer-bull`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RingKind {
    Single,
    Double,
    Triple,
    Bullseye,
    OuterBull,
}

impl RingKind {
    pub fn multiplier(self) -> u32 {
        match self {
            Self::Double => 2,
            Self::Triple => 3,
            Self::Single | Self::Bullseye | Self::OuterBull => 1,
        }
    }

    pub fn is_bull(self) -> bool {
        matches!(self, Self::Bullseye | Self::OuterBull)
    }
}

/// One of the 62 scoring regions of the board.
///
/// Segment variants carry the printed segment number (1..=20). The identity
/// key is `"{ring}-{number}"`, e.g. `triple-20`, `bullseye-50`, `outer-bull-25`,
/// which is also the serialized form so ledgers can be keyed by section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DartboardSection {
    Single(u8),
    Double(u8),
    Triple(u8),
    Bullseye,
    OuterBull,
}

impl DartboardSection {
    /// Builds a section from its ring and number, rejecting impossible pairs.
    pub fn from_ring(ring: RingKind, number: u8) -> DcResult<Self> {
        let section = match ring {
            RingKind::Bullseye if number as u32 == BULLSEYE_SCORE => Self::Bullseye,
            RingKind::OuterBull if number as u32 == OUTER_BULL_SCORE => Self::OuterBull,
            RingKind::Bullseye | RingKind::OuterBull => {
                return Err(DartError::Validation(format!(
                    "{} cannot carry number {}",
                    ring, number
                )))
            }
            _ if !(1..=20).contains(&number) => {
                return Err(DartError::Validation(format!(
                    "Segment number {} is outside 1..=20",
                    number
                )))
            }
            RingKind::Single => Self::Single(number),
            RingKind::Double => Self::Double(number),
            RingKind::Triple => Self::Triple(number),
        };
        Ok(section)
    }

    /// Every section in planner order: each segment clockwise from the top as
    /// single, double, triple; then the bullseye and the outer bull.
    pub fn all() -> impl Iterator<Item = Self> {
        DARTBOARD_SEGMENTS
            .iter()
            .flat_map(|&n| [Self::Single(n), Self::Double(n), Self::Triple(n)])
            .chain([Self::Bullseye, Self::OuterBull])
    }

    pub fn ring(&self) -> RingKind {
        match self {
            Self::Single(_) => RingKind::Single,
            Self::Double(_) => RingKind::Double,
            Self::Triple(_) => RingKind::Triple,
            Self::Bullseye => RingKind::Bullseye,
            Self::OuterBull => RingKind::OuterBull,
        }
    }

    /// Segment number, or the fixed 50 / 25 for the bulls.
    pub fn number(&self) -> u8 {
        match *self {
            Self::Single(n) | Self::Double(n) | Self::Triple(n) => n,
            Self::Bullseye => BULLSEYE_SCORE as u8,
            Self::OuterBull => OUTER_BULL_SCORE as u8,
        }
    }

    /// Face value before the ring multiplier.
    pub fn base(&self) -> u32 {
        self.number() as u32
    }

    pub fn multiplier(&self) -> u32 {
        self.ring().multiplier()
    }

    /// Points scored by a dart landing in this section.
    pub fn value(&self) -> u32 {
        self.base() * self.multiplier()
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Single(n) => format!("Single {}", n),
            Self::Double(n) => format!("Double {}", n),
            Self::Triple(n) => format!("Triple {}", n),
            Self::Bullseye => "Bullseye".to_string(),
            Self::OuterBull => "Outer Bull (25)".to_string(),
        }
    }
}

impl fmt::Display for DartboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.ring(), self.number())
    }
}

impl FromStr for DartboardSection {
    type Err = DartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ring_str, number_str) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| DartError::Validation(format!("Malformed section key '{}'", s)))?;

        let ring = RingKind::from_str(ring_str)
            .map_err(|_| DartError::Validation(format!("Unknown ring '{}' in '{}'", ring_str, s)))?;
        let number: u8 = number_str
            .parse()
            .map_err(|_| DartError::Validation(format!("Bad number '{}' in '{}'", number_str, s)))?;

        Self::from_ring(ring, number)
    }
}

impl From<DartboardSection> for String {
    fn from(section: DartboardSection) -> Self {
        section.to_string()
    }
}

impl TryFrom<String> for DartboardSection {
    type Error = DartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
