use crate::reports;
use clap::Args;
use dartcoach::config::Config;
use dartcoach::history::{self, SessionRecord};
use dartcoach::tendency::analyze_samples;

#[derive(Args, Debug, Clone)]
pub struct TendencyArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config, records: &[SessionRecord]) {
    let samples = history::tendency_samples(records);
    let tendencies = analyze_samples(&samples, &config.tendency);
    if tendencies.is_empty() {
        println!(
            "Not enough attempts: each target needs at least {}.",
            config.tendency.tendency_min_attempts
        );
        return;
    }
    reports::print_tendency_table(&tendencies);
}
