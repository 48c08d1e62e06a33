pub mod leg;
pub mod training;

pub use self::leg::{Leg, ThrowOutcome, Turn};
pub use self::training::{points_for_hit, Attempt, AttemptOutcome, TrainingSession};
