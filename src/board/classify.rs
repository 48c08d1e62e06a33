use super::geometry::{in_double_band, in_triple_band, segment_number, ImpactPoint};
use super::section::DartboardSection;
use crate::consts::{BOARD_RADIUS, BULLSEYE_RADIUS, OUTER_BULL_RADIUS};

/// Did a dart at `point` land inside `target`?
///
/// Region equality only: a dart in single 20 does not "hit" triple 20 even
/// though both are 20-segment darts.
pub fn is_hit(point: ImpactPoint, target: DartboardSection) -> bool {
    let distance = point.distance();
    if !distance.is_finite() || distance > BOARD_RADIUS {
        return false;
    }

    match target {
        DartboardSection::Bullseye => distance <= BULLSEYE_RADIUS,
        DartboardSection::OuterBull => distance > BULLSEYE_RADIUS && distance <= OUTER_BULL_RADIUS,
        DartboardSection::Single(n) | DartboardSection::Double(n) | DartboardSection::Triple(n) => {
            if distance <= OUTER_BULL_RADIUS || segment_number(point) != n {
                return false;
            }

            let triple = in_triple_band(distance);
            let double = in_double_band(distance);
            match target {
                DartboardSection::Triple(_) => triple,
                DartboardSection::Double(_) => double,
                _ => !triple && !double,
            }
        }
    }
}
