use crate::error::{DartError, DcResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub planner: PlannerParams,
    #[command(flatten)]
    pub tendency: TendencyParams,
    #[command(flatten)]
    pub training: TrainingParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerParams {
    /// Accuracy assumed for sections with no recorded attempts.
    #[arg(long, default_value_t = 1.0)]
    pub default_accuracy: f64,

    /// Paths whose accuracies differ by less than this are ranked by remaining score.
    #[arg(long, default_value_t = 0.0001)]
    pub accuracy_tolerance: f64,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            default_accuracy: 1.0,
            accuracy_tolerance: 0.0001,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TendencyParams {
    #[arg(long, default_value_t = 3)]
    pub tendency_min_attempts: u32,

    // Board-radius units; smaller offsets are not counted as a bias.
    #[arg(long, default_value_t = 0.05)]
    pub bias_threshold: f64,

    #[arg(long, default_value_t = 3)]
    pub common_miss_limit: usize,
}

impl Default for TendencyParams {
    fn default() -> Self {
        Self {
            tendency_min_attempts: 3,
            bias_threshold: 0.05,
            common_miss_limit: 3,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainingParams {
    #[arg(long, default_value_t = 10)]
    pub training_spots: usize,

    #[arg(long, default_value_t = 3)]
    pub attempts_per_spot: u8,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            training_spots: 10,
            attempts_per_spot: 3,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DcResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> DcResult<()> {
        let p = &self.planner;
        if !(0.0..=1.0).contains(&p.default_accuracy) {
            return Err(DartError::Config(format!(
                "default_accuracy must be within [0, 1], got {}",
                p.default_accuracy
            )));
        }
        if !p.accuracy_tolerance.is_finite() || p.accuracy_tolerance < 0.0 {
            return Err(DartError::Config(format!(
                "accuracy_tolerance must be a non-negative number, got {}",
                p.accuracy_tolerance
            )));
        }
        if self.tendency.bias_threshold.is_nan() || self.tendency.bias_threshold < 0.0 {
            return Err(DartError::Config(format!(
                "bias_threshold must be non-negative, got {}",
                self.tendency.bias_threshold
            )));
        }
        if self.training.attempts_per_spot == 0 {
            return Err(DartError::Config(
                "attempts_per_spot must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlays flags the user typed on the command line onto `self`,
    /// leaving file-provided values for everything left at its default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(planner, default_accuracy);
        update_if_present!(planner, accuracy_tolerance);

        update_if_present!(tendency, tendency_min_attempts);
        update_if_present!(tendency, bias_threshold);
        update_if_present!(tendency, common_miss_limit);

        update_if_present!(training, training_spots);
        update_if_present!(training, attempts_per_spot);
    }
}
