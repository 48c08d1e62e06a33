use crate::reports;
use clap::Args;
use dartcoach::board::{board_angle, ImpactPoint, Shot};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Horizontal coordinate, board radius = 1.0, positive to the right.
    #[arg(short, long, allow_hyphen_values = true)]
    pub x: f64,

    /// Vertical coordinate, positive downward.
    #[arg(short, long, allow_hyphen_values = true)]
    pub y: f64,
}

pub fn run(args: ScoreArgs) {
    let point = ImpactPoint::new(args.x, args.y);
    let shot = Shot::new(point);
    reports::print_shot(&shot, board_angle(point));
}
