use super::types::{CheckoutPath, CheckoutTarget};
use crate::consts::{CHECKOUT_CEILING, DARTS_PER_TURN};
use std::cmp::Ordering;

const MAX_DEPTH: usize = DARTS_PER_TURN as usize;
const TABLE_WIDTH: usize = CHECKOUT_CEILING as usize + 1;

/// Memo of which `(score, darts)` pairs can reach exactly zero.
///
/// Depends only on the set of section values, never on accuracy, so one
/// table serves every ledger.
#[derive(Debug, Clone)]
pub struct FinishTable {
    reachable: [[bool; TABLE_WIDTH]; MAX_DEPTH + 1],
}

impl FinishTable {
    pub fn build(values: &[u32]) -> Self {
        let mut reachable = [[false; TABLE_WIDTH]; MAX_DEPTH + 1];
        for row in reachable.iter_mut() {
            row[0] = true;
        }
        for darts in 1..=MAX_DEPTH {
            for score in 1..TABLE_WIDTH {
                reachable[darts][score] = values.iter().any(|&v| {
                    v as usize <= score && reachable[darts - 1][score - v as usize]
                });
            }
        }
        Self { reachable }
    }

    /// Can `score` be finished exactly with at most `darts` darts?
    pub fn is_finishable(&self, score: u32, darts: u8) -> bool {
        let darts = (darts as usize).min(MAX_DEPTH);
        match self.reachable[darts].get(score as usize) {
            Some(&ok) => ok,
            None => false,
        }
    }
}

/// A path under construction, stored by candidate index to avoid
/// allocating while the search runs.
#[derive(Debug, Clone, Copy)]
struct PathStub {
    picks: [u8; MAX_DEPTH],
    len: u8,
    accuracy: f64,
    remaining: u32,
}

impl PathStub {
    fn empty() -> Self {
        Self {
            picks: [0; MAX_DEPTH],
            len: 0,
            accuracy: 1.0,
            remaining: 0,
        }
    }

    fn push(mut self, index: usize, accuracy: f64) -> Self {
        self.picks[self.len as usize] = index as u8;
        self.len += 1;
        self.accuracy *= accuracy;
        self
    }

    fn materialize(&self, candidates: &[CheckoutTarget]) -> CheckoutPath {
        CheckoutPath {
            targets: self.picks[..self.len as usize]
                .iter()
                .map(|&i| candidates[i as usize])
                .collect(),
            total_accuracy: self.accuracy,
            remaining_score: self.remaining,
        }
    }
}

/// Ranks two paths; `Less` means `a` is the better recommendation.
///
/// 1. finishing paths first, 2. higher accuracy (outside `tolerance`),
/// 3. lower remaining score.
pub fn compare_paths(
    a_remaining: u32,
    a_accuracy: f64,
    b_remaining: u32,
    b_accuracy: f64,
    tolerance: f64,
) -> Ordering {
    match (a_remaining == 0, b_remaining == 0) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }
    if (a_accuracy - b_accuracy).abs() > tolerance {
        return b_accuracy.partial_cmp(&a_accuracy).unwrap_or(Ordering::Equal);
    }
    a_remaining.cmp(&b_remaining)
}

/// Outcome of one exhaustive search.
pub struct SearchOutcome {
    pub best: Option<CheckoutPath>,
    pub paths_visited: usize,
}

/// Depth-first enumeration of every path of at most `darts` candidates
/// that never overshoots, keeping the best-ranked one.
///
/// Paths are produced in candidate order and a later path only replaces
/// the current best when it ranks strictly better, so among exact ties the
/// first discovered wins. With `finish` set, any dart that would leave a
/// positive residual the remaining darts cannot finish is pruned.
pub struct PathSearch<'a> {
    candidates: &'a [CheckoutTarget],
    tolerance: f64,
    finish: Option<&'a FinishTable>,
    best: Option<PathStub>,
    visited: usize,
}

impl<'a> PathSearch<'a> {
    pub fn new(candidates: &'a [CheckoutTarget], tolerance: f64) -> Self {
        Self {
            candidates,
            tolerance,
            finish: None,
            best: None,
            visited: 0,
        }
    }

    pub fn pruned_by(mut self, finish: &'a FinishTable) -> Self {
        self.finish = Some(finish);
        self
    }

    pub fn run(mut self, score: u32, darts: u8) -> SearchOutcome {
        let darts = darts.min(DARTS_PER_TURN);
        self.explore(score, darts, PathStub::empty());
        SearchOutcome {
            best: self.best.map(|stub| stub.materialize(self.candidates)),
            paths_visited: self.visited,
        }
    }

    fn explore(&mut self, score: u32, darts: u8, prefix: PathStub) {
        if darts == 0 {
            return;
        }

        for (index, target) in self.candidates.iter().enumerate() {
            if target.score > score {
                continue;
            }
            let residual = score - target.score;

            if let Some(finish) = self.finish {
                if residual > 0 && darts > 1 && !finish.is_finishable(residual, darts - 1) {
                    continue;
                }
            }

            let path = prefix.push(index, target.accuracy);
            if residual == 0 || darts == 1 {
                // Terminal: finished the leg, or out of darts.
                self.offer(PathStub { remaining: residual, ..path });
            } else {
                self.explore(residual, darts - 1, path);
            }
        }
    }

    fn offer(&mut self, path: PathStub) {
        self.visited += 1;
        let better = match &self.best {
            None => true,
            Some(best) => {
                compare_paths(
                    path.remaining,
                    path.accuracy,
                    best.remaining,
                    best.accuracy,
                    self.tolerance,
                ) == Ordering::Less
            }
        };
        if better {
            self.best = Some(path);
        }
    }
}
