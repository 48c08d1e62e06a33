use super::geometry::{band_for_distance, segment_number, Band, ImpactPoint};
use super::section::DartboardSection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a dart ended up: a scoring section, or off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landing {
    Section(DartboardSection),
    Miss,
}

impl Landing {
    pub fn score(&self) -> u32 {
        match self {
            Self::Section(section) => section.value(),
            Self::Miss => 0,
        }
    }

    pub fn section(&self) -> Option<DartboardSection> {
        match self {
            Self::Section(section) => Some(*section),
            Self::Miss => None,
        }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Section(section) => section.display_name(),
            Self::Miss => "Miss (Outside Board)".to_string(),
        }
    }
}

impl fmt::Display for Landing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(section) => write!(f, "{}", section),
            Self::Miss => f.write_str("miss-0"),
        }
    }
}

/// Symbolic region under a point.
pub fn section_for_point(point: ImpactPoint) -> Landing {
    let section = match band_for_distance(point.distance()) {
        Band::OffBoard => return Landing::Miss,
        Band::Bullseye => DartboardSection::Bullseye,
        Band::OuterBull => DartboardSection::OuterBull,
        Band::Triple => DartboardSection::Triple(segment_number(point)),
        Band::Double => DartboardSection::Double(segment_number(point)),
        Band::Single => DartboardSection::Single(segment_number(point)),
    };
    Landing::Section(section)
}

/// Points for a dart at `point`; 0 when it is off the board.
pub fn score_for_point(point: ImpactPoint) -> u32 {
    section_for_point(point).score()
}

/// A thrown dart. The score is always derived from the point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShotRepr", into = "ShotRepr")]
pub struct Shot {
    point: ImpactPoint,
    score: u32,
}

impl Shot {
    pub fn new(point: ImpactPoint) -> Self {
        Self {
            point,
            score: score_for_point(point),
        }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(ImpactPoint::new(x, y))
    }

    pub fn point(&self) -> ImpactPoint {
        self.point
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn landing(&self) -> Landing {
        section_for_point(self.point)
    }
}

#[derive(Serialize, Deserialize)]
struct ShotRepr {
    x: f64,
    y: f64,
    #[serde(default)]
    score: u32,
}

impl From<ShotRepr> for Shot {
    fn from(repr: ShotRepr) -> Self {
        Shot::at(repr.x, repr.y)
    }
}

impl From<Shot> for ShotRepr {
    fn from(shot: Shot) -> Self {
        Self {
            x: shot.point.x,
            y: shot.point.y,
            score: shot.score,
        }
    }
}
