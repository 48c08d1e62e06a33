use crate::board::{ImpactPoint, Shot};
use crate::consts::TARGET_RADIUS_UNITS;
use serde::Serialize;

/// Headline numbers for a set of darts. Distances are reported in display
/// units (`TARGET_RADIUS_UNITS` per board radius).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub shot_count: usize,
    pub average_score: f64,
    pub missed_shots: usize,
    pub average_distance_from_center: f64,
    pub grouping_radius: f64,
}

impl SessionSummary {
    pub fn from_shots(shots: &[Shot]) -> Self {
        if shots.is_empty() {
            return Self::default();
        }

        let points: Vec<ImpactPoint> = shots.iter().map(Shot::point).collect();
        let scores: Vec<f64> = shots.iter().map(|s| s.score() as f64).collect();
        let distances: Vec<f64> = points
            .iter()
            .map(|p| p.distance() * TARGET_RADIUS_UNITS)
            .collect();

        Self {
            shot_count: shots.len(),
            average_score: mean(&scores),
            missed_shots: shots.iter().filter(|s| s.score() == 0).count(),
            average_distance_from_center: mean(&distances),
            grouping_radius: grouping_radius(&points),
        }
    }
}

/// Mean distance of the points from their own centroid, in display units.
/// A single dart has no spread.
pub fn grouping_radius(points: &[ImpactPoint]) -> f64 {
    if points.len() <= 1 {
        return 0.0;
    }

    let n = points.len() as f64;
    let centroid = ImpactPoint::new(
        points.iter().map(|p| p.x).sum::<f64>() / n,
        points.iter().map(|p| p.y).sum::<f64>() / n,
    );

    let spread: Vec<f64> = points
        .iter()
        .map(|p| p.distance_to(&centroid) * TARGET_RADIUS_UNITS)
        .collect();
    mean(&spread)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
