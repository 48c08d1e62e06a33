use crate::board::{ImpactPoint, Shot};
use crate::consts::{DARTS_PER_TURN, DEFAULT_STARTING_SCORE};
use crate::error::{DartError, DcResult};
use crate::ledger::AccuracyLedger;
use crate::planner::{CheckoutPlanner, CheckoutTarget};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A finalized scoring unit of up to three darts. A bust turn keeps its
/// darts for the record but contributes nothing to the leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub shots: Vec<Shot>,
    pub turn_score: u32,
    #[serde(default)]
    pub is_bust: bool,
}

impl Turn {
    /// Points this turn removed from the leg.
    pub fn applied_score(&self) -> u32 {
        if self.is_bust {
            0
        } else {
            self.turn_score
        }
    }
}

/// What happened after a dart was thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// The turn is still open and has darts left.
    InProgress { remaining: u32 },
    /// All darts are thrown; the turn waits for `confirm`.
    AwaitingConfirmation { remaining: u32 },
    /// The turn would have gone below zero and was finalized with no score.
    Bust,
    /// The leg reached exactly zero; the turn was confirmed automatically.
    Won,
}

/// A countdown leg from `starting_score` to exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    starting_score: u32,
    remaining: u32,
    turns: Vec<Turn>,
    current: Vec<Shot>,
    finished: bool,
}

impl Default for Leg {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_SCORE)
    }
}

impl Leg {
    pub fn new(starting_score: u32) -> Self {
        Self {
            starting_score,
            remaining: starting_score,
            turns: Vec::new(),
            current: Vec::new(),
            finished: starting_score == 0,
        }
    }

    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    /// Remaining score of the leg, counting darts already thrown this turn.
    pub fn remaining(&self) -> u32 {
        self.remaining.saturating_sub(self.current_score())
    }

    /// Remaining score as of the last finalized turn.
    pub fn committed_remaining(&self) -> u32 {
        self.remaining
    }

    pub fn darts_left(&self) -> u8 {
        if self.finished {
            0
        } else {
            DARTS_PER_TURN - self.current.len() as u8
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn current_shots(&self) -> &[Shot] {
        &self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn current_score(&self) -> u32 {
        self.current.iter().map(Shot::score).sum()
    }

    pub fn throw(&mut self, point: ImpactPoint) -> DcResult<ThrowOutcome> {
        if self.finished {
            return Err(DartError::Game("the leg is already finished".to_string()));
        }
        if self.current.len() >= DARTS_PER_TURN as usize {
            return Err(DartError::Game(
                "all darts of this turn are thrown; confirm the turn first".to_string(),
            ));
        }

        let shot = Shot::new(point);
        self.current.push(shot);
        let turn_score = self.current_score();
        debug!("Dart scored {} (turn total {})", shot.score(), turn_score);

        if turn_score > self.remaining {
            info!("Bust: {} exceeds remaining {}", turn_score, self.remaining);
            self.finalize(true);
            return Ok(ThrowOutcome::Bust);
        }
        if turn_score == self.remaining {
            self.finalize(false);
            self.finished = true;
            info!("Leg won after {} turns", self.turns.len());
            return Ok(ThrowOutcome::Won);
        }

        let remaining = self.remaining - turn_score;
        if self.current.len() == DARTS_PER_TURN as usize {
            Ok(ThrowOutcome::AwaitingConfirmation { remaining })
        } else {
            Ok(ThrowOutcome::InProgress { remaining })
        }
    }

    /// Finalizes the open turn and applies its score.
    pub fn confirm(&mut self) -> DcResult<&Turn> {
        if self.finished {
            return Err(DartError::Game("the leg is already finished".to_string()));
        }
        if self.current.is_empty() {
            return Err(DartError::Game("no darts thrown this turn".to_string()));
        }
        self.finalize(false);
        self.turns
            .last()
            .ok_or_else(|| DartError::Game("turn was not recorded".to_string()))
    }

    /// Takes back the last dart of the open turn.
    pub fn undo(&mut self) -> Option<Shot> {
        if self.finished {
            return None;
        }
        self.current.pop()
    }

    /// Recommended next target for the live state of the turn.
    pub fn recommendation(
        &self,
        planner: &CheckoutPlanner,
        ledger: &AccuracyLedger,
    ) -> Option<CheckoutTarget> {
        planner.recommend_next(self.remaining(), self.darts_left(), ledger)
    }

    fn finalize(&mut self, is_bust: bool) {
        let shots = std::mem::take(&mut self.current);
        let turn_score: u32 = shots.iter().map(Shot::score).sum();
        if !is_bust {
            self.remaining -= turn_score;
        }
        self.turns.push(Turn {
            shots,
            turn_score,
            is_bust,
        });
    }
}
