//! Plain-data model of stored sessions, as handed over by whatever
//! persistence layer the application uses, and the folds that rebuild
//! accuracy ledgers from it.

use crate::board::{DartboardSection, ImpactPoint, Shot};
use crate::error::{DartError, DcResult};
use crate::game::{Attempt, Turn};
use crate::ledger::{AccuracyLedger, SectionAccuracy};
use crate::tendency::{group_attempts, TargetSamples};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Competition,
    Training,
}

/// A shot as stored. Older records may lack coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredShot {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub score: u32,
}

impl StoredShot {
    /// Rebuilds the shot from its coordinates (missing ones read as 0.0).
    /// The score is always recomputed.
    pub fn to_shot(&self) -> Shot {
        let point = ImpactPoint::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0));
        let shot = Shot::new(point);
        if shot.score() != self.score {
            warn!(
                "Stored score {} disagrees with {} at ({:.3}, {:.3}); using the recomputed value",
                self.score,
                shot.score(),
                point.x,
                point.y
            );
        }
        shot
    }
}

impl From<Shot> for StoredShot {
    fn from(shot: Shot) -> Self {
        let p = shot.point();
        Self {
            x: Some(p.x),
            y: Some(p.y),
            score: shot.score(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTurn {
    #[serde(default)]
    pub shots: Vec<StoredShot>,
    #[serde(default)]
    pub turn_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bust: Option<bool>,
}

impl StoredTurn {
    pub fn to_turn(&self) -> Turn {
        Turn {
            shots: self.shots.iter().map(StoredShot::to_shot).collect(),
            turn_score: self.turn_score,
            is_bust: self.is_bust.unwrap_or(false),
        }
    }
}

impl From<&Turn> for StoredTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            shots: turn.shots.iter().copied().map(StoredShot::from).collect(),
            turn_score: turn.turn_score,
            is_bust: turn.is_bust.then_some(true),
        }
    }
}

/// Stored counters for one section, plus where the misses landed when the
/// recorder kept them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSectionAccuracy {
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missed_shots: Vec<StoredShot>,
}

/// A session's `trainingAccuracy` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredAccuracy {
    #[serde(default)]
    pub sections: BTreeMap<DartboardSection, StoredSectionAccuracy>,
}

impl StoredAccuracy {
    /// Counters and miss points folded from individual attempts.
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut sections: BTreeMap<DartboardSection, StoredSectionAccuracy> = BTreeMap::new();
        for attempt in attempts {
            let entry = sections.entry(attempt.target).or_default();
            entry.attempts += 1;
            if attempt.hit {
                entry.hits += 1;
            } else {
                entry.missed_shots.push(StoredShot::from(attempt.shot()));
            }
        }
        Self { sections }
    }

    pub fn to_ledger(&self) -> AccuracyLedger {
        AccuracyLedger::from_counters(self.sections.iter().map(|(section, acc)| {
            (
                *section,
                SectionAccuracy {
                    attempts: acc.attempts,
                    hits: acc.hits,
                },
            )
        }))
    }

    /// Per-target samples; miss points come from the stored missed shots.
    pub fn to_samples(&self) -> BTreeMap<DartboardSection, TargetSamples> {
        self.sections
            .iter()
            .filter(|(_, acc)| acc.attempts > 0)
            .map(|(section, acc)| {
                let samples = TargetSamples {
                    attempts: acc.attempts,
                    hits: acc.hits,
                    misses: acc
                        .missed_shots
                        .iter()
                        .map(|shot| shot.to_shot().point())
                        .collect(),
                };
                (*section, samples)
            })
            .collect()
    }

    /// Checks `hits <= attempts` for every section.
    pub fn validate(&self) -> DcResult<()> {
        for (section, acc) in &self.sections {
            if acc.hits > acc.attempts {
                return Err(DartError::Validation(format!(
                    "{} records {} hits in {} attempts",
                    section, acc.hits, acc.attempts
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_mode: Option<GameMode>,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default)]
    pub shots: Vec<StoredShot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<Vec<StoredTurn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_accuracy: Option<StoredAccuracy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attempts: Vec<Attempt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionRecord {
    pub fn is_training(&self) -> bool {
        self.game_mode == Some(GameMode::Training)
    }

    pub fn shots(&self) -> Vec<Shot> {
        self.shots.iter().map(StoredShot::to_shot).collect()
    }

    pub fn turns(&self) -> Vec<Turn> {
        self.turns
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(StoredTurn::to_turn)
            .collect()
    }

    /// The session's accuracy ledger: folded from individual attempts when
    /// they were kept, otherwise the stored counters.
    pub fn ledger(&self) -> AccuracyLedger {
        if !self.attempts.is_empty() {
            return AccuracyLedger::from_observations(
                self.attempts.iter().map(|a| (a.target, a.hit)),
            );
        }
        self.training_accuracy
            .as_ref()
            .map(StoredAccuracy::to_ledger)
            .unwrap_or_default()
    }

    /// Per-target samples for tendency analysis, from the attempts when they
    /// were kept, otherwise from the stored counters and missed shots.
    pub fn tendency_samples(&self) -> BTreeMap<DartboardSection, TargetSamples> {
        if !self.attempts.is_empty() {
            return group_attempts(&self.attempts);
        }
        self.training_accuracy
            .as_ref()
            .map(StoredAccuracy::to_samples)
            .unwrap_or_default()
    }

    /// Packs a finished (or abandoned) training drill for storage.
    pub fn from_training(
        id: impl Into<String>,
        created_at: impl Into<String>,
        session: &crate::game::TrainingSession,
    ) -> Self {
        let attempts = session.attempts();
        Self {
            id: id.into(),
            created_at: created_at.into(),
            game_mode: Some(GameMode::Training),
            total_score: session.total_score(),
            shots: attempts.iter().map(|a| StoredShot::from(a.shot())).collect(),
            training_accuracy: Some(StoredAccuracy::from_attempts(&attempts)),
            attempts,
            ..Default::default()
        }
    }

    /// Packs a competition leg for storage.
    pub fn from_leg(
        id: impl Into<String>,
        created_at: impl Into<String>,
        leg: &crate::game::Leg,
    ) -> Self {
        let turns: Vec<StoredTurn> = leg.turns().iter().map(StoredTurn::from).collect();
        let shots = leg
            .turns()
            .iter()
            .flat_map(|t| t.shots.iter().copied())
            .map(StoredShot::from)
            .collect();
        Self {
            id: id.into(),
            created_at: created_at.into(),
            game_mode: Some(GameMode::Competition),
            total_score: leg.starting_score() - leg.committed_remaining(),
            shots,
            turns: Some(turns),
            starting_score: Some(leg.starting_score()),
            ..Default::default()
        }
    }
}

/// Reads a JSON array of session records.
pub fn load_history<P: AsRef<Path>>(path: P) -> DcResult<Vec<SessionRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records: Vec<SessionRecord> = serde_json::from_str(&content)?;
    for record in &records {
        if let Some(accuracy) = &record.training_accuracy {
            accuracy.validate()?;
        }
    }
    info!("Loaded {} sessions from {}", records.len(), path.display());
    Ok(records)
}

pub fn save_history<P: AsRef<Path>>(path: P, records: &[SessionRecord]) -> DcResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// All-time ledger over every training session in `records`.
pub fn aggregate_ledger(records: &[SessionRecord]) -> AccuracyLedger {
    let ledgers: Vec<AccuracyLedger> = records
        .iter()
        .filter(|r| r.is_training())
        .map(SessionRecord::ledger)
        .collect();
    AccuracyLedger::merge(&ledgers)
}

/// Every individual training attempt in `records`, in record order.
pub fn all_attempts(records: &[SessionRecord]) -> Vec<Attempt> {
    records
        .iter()
        .filter(|r| r.is_training())
        .flat_map(|r| r.attempts.iter().copied())
        .collect()
}

/// Tendency samples over every training session in `records`, per target.
pub fn tendency_samples(records: &[SessionRecord]) -> BTreeMap<DartboardSection, TargetSamples> {
    let mut merged: BTreeMap<DartboardSection, TargetSamples> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_training()) {
        for (section, samples) in record.tendency_samples() {
            merged.entry(section).or_default().absorb(samples);
        }
    }
    merged
}
