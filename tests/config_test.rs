use clap::{CommandFactory, FromArgMatches, Parser};
use dartcoach::config::{Config, PlannerParams};
use dartcoach::error::DartError;
use std::fs;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.planner.default_accuracy, 1.0);
    assert_eq!(config.planner.accuracy_tolerance, 0.0001);
    assert_eq!(config.tendency.tendency_min_attempts, 3);
    assert_eq!(config.training.attempts_per_spot, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (config, _) = parse(&["test"]);
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"planner": {"default_accuracy": 0.8}}"#).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.planner.default_accuracy, 0.8);
    assert_eq!(config.planner.accuracy_tolerance, 0.0001);
    assert_eq!(config.training.training_spots, 10);
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"planner": {"default_accuracy": 1.5}}"#).unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(DartError::Config(_))
    ));

    fs::write(&path, r#"{"training": {"attempts_per_spot": 0}}"#).unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_cli_overrides_only_what_was_typed() {
    let mut file_config = Config {
        planner: PlannerParams {
            default_accuracy: 0.8,
            accuracy_tolerance: 0.01,
        },
        ..Default::default()
    };

    let (cli_config, matches) = parse(&[
        "test",
        "--default-accuracy",
        "0.5",
        "--common-miss-limit",
        "5",
    ]);
    file_config.merge_from_cli(&cli_config, &matches);

    assert_eq!(file_config.planner.default_accuracy, 0.5);
    assert_eq!(file_config.planner.accuracy_tolerance, 0.01);
    assert_eq!(file_config.tendency.common_miss_limit, 5);
    assert_eq!(file_config.tendency.tendency_min_attempts, 3);
}
