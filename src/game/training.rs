use crate::board::{is_hit, DartboardSection, ImpactPoint, Shot};
use crate::config::TrainingParams;
use crate::error::{DartError, DcResult};
use crate::ledger::AccuracyLedger;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One dart thrown at a specific target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AttemptRepr", into = "AttemptRepr")]
pub struct Attempt {
    pub target: DartboardSection,
    pub point: ImpactPoint,
    pub hit: bool,
}

// Stored form. `hit` is written for readers of the JSON but reclassified
// from the point on load.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttemptRepr {
    target: DartboardSection,
    point: ImpactPoint,
    #[serde(default)]
    hit: bool,
}

impl From<AttemptRepr> for Attempt {
    fn from(repr: AttemptRepr) -> Self {
        Attempt::new(repr.target, repr.point)
    }
}

impl From<Attempt> for AttemptRepr {
    fn from(attempt: Attempt) -> Self {
        Self {
            target: attempt.target,
            point: attempt.point,
            hit: attempt.hit,
        }
    }
}

impl Attempt {
    /// Classifies `point` against `target`.
    pub fn new(target: DartboardSection, point: ImpactPoint) -> Self {
        Self {
            target,
            point,
            hit: is_hit(point, target),
        }
    }

    pub fn shot(&self) -> Shot {
        Shot::new(self.point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub hit: bool,
    pub points: u32,
    pub spot_finished: bool,
    pub session_finished: bool,
}

#[derive(Debug, Clone)]
struct DartRecord {
    attempt: Attempt,
    points: u32,
    attempts_before: u8,
    closed_spot: bool,
}

/// A drill of random targets. Each target gets up to `attempts_per_spot`
/// darts; hitting it early earns more (full, half, quarter...).
#[derive(Debug, Clone)]
pub struct TrainingSession {
    params: TrainingParams,
    rng: fastrand::Rng,
    pool: Vec<DartboardSection>,
    target: Option<DartboardSection>,
    // Targets already drawn for spots whose closing darts were undone, most
    // recent last. Replayed before the rng is asked for anything new.
    pending: Vec<DartboardSection>,
    spots_completed: usize,
    attempts_on_spot: u8,
    total_score: u32,
    ledger: AccuracyLedger,
    log: Vec<DartRecord>,
}

/// Points for hitting `target` on the zero-based `attempt_index`.
pub fn points_for_hit(target: DartboardSection, attempt_index: u8) -> u32 {
    target.value().checked_shr(attempt_index as u32).unwrap_or(0)
}

impl TrainingSession {
    pub fn new(params: TrainingParams, seed: Option<u64>) -> Self {
        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        let pool: Vec<DartboardSection> = DartboardSection::all().collect();
        let target = if params.training_spots > 0 {
            Some(pool[rng.usize(..pool.len())])
        } else {
            None
        };

        Self {
            params,
            rng,
            pool,
            target,
            pending: Vec::new(),
            spots_completed: 0,
            attempts_on_spot: 0,
            total_score: 0,
            ledger: AccuracyLedger::new(),
            log: Vec::new(),
        }
    }

    pub fn current_target(&self) -> Option<DartboardSection> {
        self.target
    }

    pub fn attempts_left(&self) -> u8 {
        if self.target.is_none() {
            return 0;
        }
        self.params
            .attempts_per_spot
            .saturating_sub(self.attempts_on_spot)
    }

    pub fn spots_completed(&self) -> usize {
        self.spots_completed
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn ledger(&self) -> &AccuracyLedger {
        &self.ledger
    }

    pub fn is_finished(&self) -> bool {
        self.target.is_none()
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.log.iter().map(|r| r.attempt).collect()
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    pub fn throw(&mut self, point: ImpactPoint) -> DcResult<AttemptOutcome> {
        let target = self
            .target
            .ok_or_else(|| DartError::Game("the training session is finished".to_string()))?;

        let attempt = Attempt::new(target, point);
        self.ledger.record(target, attempt.hit);

        let attempts_before = self.attempts_on_spot;
        let points = if attempt.hit {
            points_for_hit(target, attempts_before)
        } else {
            0
        };
        self.total_score += points;
        self.attempts_on_spot += 1;

        let closed_spot = attempt.hit || self.attempts_on_spot >= self.params.attempts_per_spot;
        debug!(
            "Training dart at {}: hit={} points={} closed={}",
            target, attempt.hit, points, closed_spot
        );

        self.log.push(DartRecord {
            attempt,
            points,
            attempts_before,
            closed_spot,
        });

        if closed_spot {
            self.advance();
        }

        Ok(AttemptOutcome {
            hit: attempt.hit,
            points,
            spot_finished: closed_spot,
            session_finished: self.is_finished(),
        })
    }

    /// Ends the drill before all spots are played.
    pub fn end_early(&mut self) {
        self.target = None;
        self.pending.clear();
    }

    /// Takes back the most recent dart, restoring the ledger, the score and
    /// the target it was thrown at.
    pub fn undo(&mut self) -> Option<Attempt> {
        let record = self.log.pop()?;
        let attempt = record.attempt;

        self.ledger.unrecord(attempt.target, attempt.hit);
        self.total_score -= record.points;

        if record.closed_spot {
            self.spots_completed -= 1;
            if let Some(drawn) = self.target {
                self.pending.push(drawn);
            }
            self.target = Some(attempt.target);
        }
        self.attempts_on_spot = record.attempts_before;

        Some(attempt)
    }

    fn advance(&mut self) {
        self.spots_completed += 1;
        self.attempts_on_spot = 0;

        if self.spots_completed >= self.params.training_spots {
            self.target = None;
            return;
        }

        let next = match self.pending.pop() {
            Some(section) => section,
            None => self.pool[self.rng.usize(..self.pool.len())],
        };
        self.target = Some(next);
    }
}
