use crate::reports;
use clap::Args;
use dartcoach::config::Config;
use dartcoach::consts::DARTS_PER_TURN;
use dartcoach::history::{self, SessionRecord};
use dartcoach::planner::CheckoutPlanner;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CheckoutArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub remaining: u32,

    #[arg(short, long, default_value_t = DARTS_PER_TURN)]
    pub darts: u8,
}

pub fn run(args: CheckoutArgs, config: &Config, records: &[SessionRecord]) {
    let ledger = history::aggregate_ledger(records);
    info!("Planning with {} recorded sections", ledger.len());

    let planner = CheckoutPlanner::new(config.planner.clone());
    let next = planner.recommend_next(args.remaining, args.darts, &ledger);
    let path = planner.best_path(args.remaining, args.darts, &ledger);

    println!(
        "\n=== CHECKOUT: {} with {} darts ===",
        args.remaining,
        args.darts.min(DARTS_PER_TURN)
    );
    match (next, path) {
        (Some(target), Some(path)) => {
            println!("Aim at: {} ({})", target.section.display_name(), target.section);
            reports::print_checkout_path(&path);
        }
        _ => println!("No checkout available."),
    }
}
