pub mod search;
pub mod types;

use self::search::{FinishTable, PathSearch};
pub use self::types::{CheckoutPath, CheckoutTarget};
use crate::board::DartboardSection;
use crate::config::PlannerParams;
use crate::consts::{CHECKOUT_CEILING, DARTS_PER_TURN};
use crate::ledger::AccuracyLedger;
use tracing::debug;

/// Recommends which section to aim at next during a competition turn.
///
/// The planner never mutates the ledger it is given. Sections without data
/// are assumed to be hit with `PlannerParams::default_accuracy` (1.0 unless
/// configured) so untried targets are not penalised.
#[derive(Debug, Clone)]
pub struct CheckoutPlanner {
    params: PlannerParams,
    finish: FinishTable,
}

impl Default for CheckoutPlanner {
    fn default() -> Self {
        Self::new(PlannerParams::default())
    }
}

impl CheckoutPlanner {
    pub fn new(params: PlannerParams) -> Self {
        let values: Vec<u32> = DartboardSection::all().map(|s| s.value()).collect();
        Self {
            params,
            finish: FinishTable::build(&values),
        }
    }

    pub fn params(&self) -> &PlannerParams {
        &self.params
    }

    /// Whether some sequence of at most `darts` darts reaches exactly zero.
    pub fn is_checkable(&self, score: u32, darts: u8) -> bool {
        self.finish.is_finishable(score, darts)
    }

    /// All 62 sections annotated with score and accuracy, in search order.
    pub fn candidates(&self, ledger: &AccuracyLedger) -> Vec<CheckoutTarget> {
        DartboardSection::all()
            .map(|section| CheckoutTarget {
                section,
                score: section.value(),
                accuracy: ledger
                    .accuracy_of(section)
                    .unwrap_or(self.params.default_accuracy),
            })
            .collect()
    }

    /// The best-ranked path for `remaining_score` with `darts_left` darts.
    ///
    /// `None` when there is nothing to throw for, when the score is above
    /// the three-dart ceiling, or when a full turn faces a score no three
    /// darts can finish. Mid-turn, and whenever the darts left cannot
    /// finish, the path that leaves the lowest score is returned instead.
    pub fn best_path(
        &self,
        remaining_score: u32,
        darts_left: u8,
        ledger: &AccuracyLedger,
    ) -> Option<CheckoutPath> {
        if darts_left == 0 || remaining_score == 0 || remaining_score > CHECKOUT_CEILING {
            return None;
        }
        if darts_left >= DARTS_PER_TURN && !self.is_checkable(remaining_score, DARTS_PER_TURN) {
            debug!("{} has no checkout in {} darts", remaining_score, DARTS_PER_TURN);
            return None;
        }

        let candidates = self.candidates(ledger);
        let outcome = PathSearch::new(&candidates, self.params.accuracy_tolerance)
            .run(remaining_score, darts_left);
        debug!(
            "Checkout search for {} with {} darts visited {} paths",
            remaining_score, darts_left, outcome.paths_visited
        );
        outcome.best
    }

    /// The section to aim at with the next dart, if any.
    ///
    /// If the best path's first dart would leave a residual the remaining
    /// darts cannot finish, the search is re-run with every such dart pruned
    /// and the recommendation comes from that result. When the pruned search
    /// finds nothing, the first dart of the best path stands.
    pub fn recommend_next(
        &self,
        remaining_score: u32,
        darts_left: u8,
        ledger: &AccuracyLedger,
    ) -> Option<CheckoutTarget> {
        let darts_left = darts_left.min(DARTS_PER_TURN);
        let path = self.best_path(remaining_score, darts_left, ledger)?;
        let first = *path.first()?;

        let residual = remaining_score - first.score;
        if residual == 0 || darts_left <= 1 || self.is_checkable(residual, darts_left - 1) {
            return Some(first);
        }

        debug!(
            "{} leaves {} which {} darts cannot finish; searching safe paths",
            first.section,
            residual,
            darts_left - 1
        );
        let candidates = self.candidates(ledger);
        let safe = PathSearch::new(&candidates, self.params.accuracy_tolerance)
            .pruned_by(&self.finish)
            .run(remaining_score, darts_left)
            .best;

        match safe.as_ref().and_then(CheckoutPath::first) {
            Some(target) => Some(*target),
            None => Some(first),
        }
    }
}
