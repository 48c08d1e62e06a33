//! Where a player's misses go, per practised target.

use crate::board::{aim_point, section_for_point, DartboardSection, ImpactPoint, Landing};
use crate::config::TendencyParams;
use crate::game::Attempt;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalBias {
    pub too_high: u32,
    pub too_low: u32,
    pub too_left: u32,
    pub too_right: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonMiss {
    pub landing: String,
    pub display_name: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotTendency {
    pub target: DartboardSection,
    pub target_display_name: String,
    pub attempts: u32,
    pub hits: u32,
    /// Percentage, 0..=100.
    pub hit_rate: f64,
    pub directional_bias: DirectionalBias,
    pub common_misses: Vec<CommonMiss>,
}

/// Counts misses that strayed more than `threshold` from the target's aim
/// point along each axis. `y` grows downward, so a negative offset is high.
pub fn directional_bias(
    target: DartboardSection,
    misses: &[ImpactPoint],
    threshold: f64,
) -> DirectionalBias {
    let aim = aim_point(target);
    let mut bias = DirectionalBias::default();

    for miss in misses {
        let dx = miss.x - aim.x;
        let dy = miss.y - aim.y;

        if dy < -threshold {
            bias.too_high += 1;
        } else if dy > threshold {
            bias.too_low += 1;
        }

        if dx < -threshold {
            bias.too_left += 1;
        } else if dx > threshold {
            bias.too_right += 1;
        }
    }
    bias
}

/// Most frequent landing regions of `misses`, busiest first.
pub fn common_misses(misses: &[ImpactPoint], limit: usize) -> Vec<CommonMiss> {
    let mut counts: HashMap<Landing, u32> = HashMap::new();
    for &miss in misses {
        *counts.entry(section_for_point(miss)).or_default() += 1;
    }

    let mut ranked: Vec<(Landing, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.key().cmp(&b.0.key())));

    let total = misses.len() as f64;
    ranked
        .into_iter()
        .take(limit)
        .map(|(landing, count)| CommonMiss {
            landing: landing.key(),
            display_name: landing.display_name(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect()
}

/// What is known about one practised target: its counters and where the
/// misses landed. Stored counters may carry fewer miss points than misses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetSamples {
    pub attempts: u32,
    pub hits: u32,
    pub misses: Vec<ImpactPoint>,
}

impl TargetSamples {
    pub fn add_attempt(&mut self, attempt: &Attempt) {
        self.attempts += 1;
        if attempt.hit {
            self.hits += 1;
        } else {
            self.misses.push(attempt.point);
        }
    }

    pub fn absorb(&mut self, other: TargetSamples) {
        self.attempts += other.attempts;
        self.hits += other.hits;
        self.misses.extend(other.misses);
    }
}

/// Groups individual attempts by target.
pub fn group_attempts(attempts: &[Attempt]) -> BTreeMap<DartboardSection, TargetSamples> {
    let mut by_target: BTreeMap<DartboardSection, TargetSamples> = BTreeMap::new();
    for attempt in attempts {
        by_target.entry(attempt.target).or_default().add_attempt(attempt);
    }
    by_target
}

/// Per-target tendencies for every target practised at least
/// `tendency_min_attempts` times, most practised first.
pub fn analyze_tendencies(attempts: &[Attempt], params: &TendencyParams) -> Vec<ShotTendency> {
    analyze_samples(&group_attempts(attempts), params)
}

/// Same as [`analyze_tendencies`], over samples already grouped by target.
pub fn analyze_samples(
    samples: &BTreeMap<DartboardSection, TargetSamples>,
    params: &TendencyParams,
) -> Vec<ShotTendency> {
    let mut tendencies: Vec<ShotTendency> = samples
        .iter()
        .filter(|(_, s)| s.attempts > 0 && s.attempts >= params.tendency_min_attempts)
        .map(|(&target, s)| ShotTendency {
            target,
            target_display_name: target.display_name(),
            attempts: s.attempts,
            hits: s.hits,
            hit_rate: s.hits as f64 / s.attempts as f64 * 100.0,
            directional_bias: directional_bias(target, &s.misses, params.bias_threshold),
            common_misses: common_misses(&s.misses, params.common_miss_limit),
        })
        .collect();

    // BTreeMap order already breaks ties by section; the sort is stable.
    tendencies.sort_by(|a, b| b.attempts.cmp(&a.attempts));
    tendencies
}
