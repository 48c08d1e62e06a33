use super::section::DartboardSection;
use crate::consts::*;
use serde::{Deserialize, Serialize};

/// Where a dart landed, in board-radius units. The origin is the centre of
/// the board and `y` grows downward (screen orientation).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactPoint {
    pub x: f64,
    pub y: f64,
}

impl ImpactPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline(always)]
    pub fn distance_to(&self, other: &ImpactPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Radial band of the board a distance falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    Bullseye,
    OuterBull,
    Single,
    Triple,
    Double,
    OffBoard,
}

#[inline(always)]
pub(crate) fn in_triple_band(distance: f64) -> bool {
    (TRIPLE_INNER_RADIUS..=TRIPLE_OUTER_RADIUS).contains(&distance)
}

#[inline(always)]
pub(crate) fn in_double_band(distance: f64) -> bool {
    (DOUBLE_INNER_RADIUS..=DOUBLE_OUTER_RADIUS).contains(&distance)
}

/// Non-finite distances count as off-board.
pub(crate) fn band_for_distance(distance: f64) -> Band {
    if !distance.is_finite() || distance > BOARD_RADIUS {
        Band::OffBoard
    } else if distance <= BULLSEYE_RADIUS {
        Band::Bullseye
    } else if distance <= OUTER_BULL_RADIUS {
        Band::OuterBull
    } else if in_triple_band(distance) {
        Band::Triple
    } else if in_double_band(distance) {
        Band::Double
    } else {
        Band::Single
    }
}

/// Angle in degrees, clockwise from the top of the board, in [0, 360).
pub fn board_angle(point: ImpactPoint) -> f64 {
    (point.y.atan2(point.x).to_degrees() + TOP_ROTATION_DEG).rem_euclid(360.0)
}

/// Index into `DARTBOARD_SEGMENTS` for the wedge containing the point.
pub(crate) fn segment_index(point: ImpactPoint) -> usize {
    let shifted = (board_angle(point) + SEGMENT_HALF_ARC_DEG).rem_euclid(360.0);
    // rem_euclid may round up to exactly 360.0 for tiny negative inputs.
    ((shifted / SEGMENT_ARC_DEG).floor() as usize) % DARTBOARD_SEGMENTS.len()
}

/// Printed number of the wedge containing the point (ignores rings).
pub fn segment_number(point: ImpactPoint) -> u8 {
    DARTBOARD_SEGMENTS[segment_index(point)]
}

/// Nominal aim point of a section: the bulls aim at the origin, segments at
/// the angular centre of the wedge on a representative radius of the ring.
pub fn aim_point(section: DartboardSection) -> ImpactPoint {
    let radius = match section {
        DartboardSection::Bullseye | DartboardSection::OuterBull => return ImpactPoint::default(),
        DartboardSection::Triple(_) => AIM_RADIUS_TRIPLE,
        DartboardSection::Double(_) => AIM_RADIUS_DOUBLE,
        DartboardSection::Single(_) => AIM_RADIUS_SINGLE,
    };

    let index = DARTBOARD_SEGMENTS
        .iter()
        .position(|&n| n == section.number())
        .unwrap_or(0);
    let theta = (index as f64 * SEGMENT_ARC_DEG).to_radians();

    ImpactPoint::new(theta.sin() * radius, -theta.cos() * radius)
}
