use crate::board::{DartboardSection, RingKind};
use crate::error::{DartError, DcResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Attempt / hit counters for one section. Invariant: `hits <= attempts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAccuracy {
    pub attempts: u32,
    pub hits: u32,
}

impl SectionAccuracy {
    /// Hit rate in [0, 1], or `None` when nothing has been attempted.
    pub fn rate(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.hits as f64 / self.attempts as f64)
        }
    }

    fn absorb(&mut self, other: &SectionAccuracy) {
        self.attempts += other.attempts;
        self.hits += other.hits;
    }
}

/// Per-section accuracy over one analysis window (a session, or an
/// aggregate of many). Serializes as `{"sections": {"triple-20": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyLedger {
    #[serde(default)]
    sections: BTreeMap<DartboardSection, SectionAccuracy>,
}

/// Accuracy split by ring, as shown on the training metrics panel.
/// Bull attempts count towards `overall` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBreakdown {
    pub overall: SectionAccuracy,
    pub single: SectionAccuracy,
    pub double: SectionAccuracy,
    pub triple: SectionAccuracy,
}

impl AccuracyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a sequence of `(target, hit)` observations into a fresh ledger.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (DartboardSection, bool)>,
    {
        let mut ledger = Self::new();
        for (target, hit) in observations {
            ledger.record(target, hit);
        }
        ledger
    }

    /// Builds a ledger from stored per-section counters. Entries with no
    /// attempts are dropped; repeated sections are summed.
    pub fn from_counters<I>(counters: I) -> Self
    where
        I: IntoIterator<Item = (DartboardSection, SectionAccuracy)>,
    {
        let mut ledger = Self::new();
        for (section, acc) in counters {
            if acc.attempts > 0 {
                ledger.sections.entry(section).or_default().absorb(&acc);
            }
        }
        ledger
    }

    pub fn record(&mut self, target: DartboardSection, hit: bool) {
        let entry = self.sections.entry(target).or_default();
        entry.attempts += 1;
        if hit {
            entry.hits += 1;
        }
    }

    /// Reverses one `record(target, hit)`. Entries that drop back to zero
    /// attempts are removed so the ledger matches its state before the record.
    pub fn unrecord(&mut self, target: DartboardSection, hit: bool) {
        let Some(entry) = self.sections.get_mut(&target) else {
            warn!("unrecord({}, {}) with no recorded attempts; ignoring", target, hit);
            return;
        };

        entry.attempts = entry.attempts.saturating_sub(1);
        if hit {
            entry.hits = entry.hits.saturating_sub(1);
        }
        entry.hits = entry.hits.min(entry.attempts);

        if entry.attempts == 0 {
            self.sections.remove(&target);
        }
    }

    /// Hit rate for `target`, or `None` when there is no data for it.
    pub fn accuracy_of(&self, target: DartboardSection) -> Option<f64> {
        self.sections.get(&target).and_then(SectionAccuracy::rate)
    }

    pub fn get(&self, target: DartboardSection) -> Option<&SectionAccuracy> {
        self.sections.get(&target)
    }

    pub fn attempts(&self, target: DartboardSection) -> u32 {
        self.get(target).map_or(0, |s| s.attempts)
    }

    pub fn hits(&self, target: DartboardSection) -> u32 {
        self.get(target).map_or(0, |s| s.hits)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DartboardSection, &SectionAccuracy)> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn total(&self) -> SectionAccuracy {
        let mut total = SectionAccuracy::default();
        for acc in self.sections.values() {
            total.absorb(acc);
        }
        total
    }

    pub fn ring_breakdown(&self) -> RingBreakdown {
        let mut out = RingBreakdown::default();
        for (section, acc) in &self.sections {
            out.overall.absorb(acc);
            match section.ring() {
                RingKind::Single => out.single.absorb(acc),
                RingKind::Double => out.double.absorb(acc),
                RingKind::Triple => out.triple.absorb(acc),
                RingKind::Bullseye | RingKind::OuterBull => {}
            }
        }
        out
    }

    /// Adds every counter of `other` into `self`.
    pub fn absorb(&mut self, other: &AccuracyLedger) {
        for (section, acc) in &other.sections {
            self.sections.entry(*section).or_default().absorb(acc);
        }
    }

    /// Sums attempts and hits per section across `ledgers`.
    ///
    /// Merging is commutative and associative, so the reduction runs in
    /// parallel for large histories.
    pub fn merge(ledgers: &[AccuracyLedger]) -> AccuracyLedger {
        debug!("Merging {} ledgers", ledgers.len());
        ledgers
            .par_iter()
            .fold(AccuracyLedger::new, |mut acc, ledger| {
                acc.absorb(ledger);
                acc
            })
            .reduce(AccuracyLedger::new, |mut a, b| {
                a.absorb(&b);
                a
            })
    }

    /// Checks the `hits <= attempts` invariant on data that came from outside.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creates_entry_lazily() {
        let mut ledger = AccuracyLedger::new();
        assert_eq!(ledger.accuracy_of(DartboardSection::Triple(20)), None);

        ledger.record(DartboardSection::Triple(20), false);
        assert_eq!(ledger.accuracy_of(DartboardSection::Triple(20)), Some(0.0));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unrecord_missing_entry_is_noop() {
        let mut ledger = AccuracyLedger::new();
        ledger.unrecord(DartboardSection::Bullseye, true);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_from_counters_skips_empty_entries() {
        let ledger = AccuracyLedger::from_counters([
            (DartboardSection::Triple(20), SectionAccuracy { attempts: 3, hits: 1 }),
            (DartboardSection::Double(16), SectionAccuracy::default()),
        ]);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.accuracy_of(DartboardSection::Double(16)), None);
        assert_eq!(ledger.hits(DartboardSection::Triple(20)), 1);
    }

    #[test]
    fn test_ring_breakdown_ignores_bulls_per_ring() {
        let mut ledger = AccuracyLedger::new();
        ledger.record(DartboardSection::Bullseye, true);
        ledger.record(DartboardSection::Double(16), false);
        ledger.record(DartboardSection::Double(8), true);

        let rings = ledger.ring_breakdown();
        assert_eq!(rings.overall.attempts, 3);
        assert_eq!(rings.double.rate(), Some(0.5));
        assert_eq!(rings.single.rate(), None);
    }
}
