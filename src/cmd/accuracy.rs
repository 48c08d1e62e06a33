use crate::reports;
use clap::Args;
use dartcoach::board::Shot;
use dartcoach::history::{self, SessionRecord};
use dartcoach::stats::SessionSummary;

#[derive(Args, Debug, Clone)]
pub struct AccuracyArgs {
    /// Only list sections with at least this many attempts.
    #[arg(long, default_value_t = 1)]
    pub min_attempts: u32,
}

pub fn run(args: AccuracyArgs, records: &[SessionRecord]) {
    let shots: Vec<Shot> = records.iter().flat_map(SessionRecord::shots).collect();
    if !shots.is_empty() {
        reports::print_session_summary(&SessionSummary::from_shots(&shots));
    }

    let ledger = history::aggregate_ledger(records);
    if ledger.is_empty() {
        println!("No training data recorded.");
        return;
    }
    reports::print_accuracy_table(&ledger, args.min_attempts);
    reports::print_ring_breakdown(&ledger.ring_breakdown());
}
