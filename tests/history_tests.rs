use dartcoach::board::{DartboardSection, ImpactPoint};
use dartcoach::config::{TendencyParams, TrainingParams};
use dartcoach::error::DartError;
use dartcoach::game::{Leg, TrainingSession};
use dartcoach::history::{
    aggregate_ledger, all_attempts, load_history, save_history, tendency_samples, GameMode,
    SessionRecord,
};
use dartcoach::tendency::analyze_samples;
use std::fs;
use tempfile::tempdir;

const HISTORY: &str = r#"[
  {
    "id": "s1",
    "createdAt": "2026-03-01T19:00:00Z",
    "gameMode": "training",
    "totalScore": 60,
    "shots": [{"x": 0.0, "y": -0.585, "score": 60}],
    "trainingAccuracy": {"sections": {"triple-20": {"attempts": 3, "hits": 1}}}
  },
  {
    "id": "s2",
    "createdAt": "2026-03-02T19:00:00Z",
    "gameMode": "training",
    "attempts": [
      {"target": "triple-20", "point": {"x": 0.0, "y": -0.585}, "hit": true},
      {"target": "double-16", "point": {"x": 0.0, "y": 1.5}, "hit": false}
    ],
    "trainingAccuracy": {"sections": {"triple-20": {"attempts": 9, "hits": 9}}}
  },
  {
    "id": "c1",
    "createdAt": "2026-03-03T19:00:00Z",
    "gameMode": "competition",
    "shots": [{"score": 20}, {"x": 0.0, "y": -0.965, "score": 40}],
    "turns": [{"shots": [{"x": 0.0, "y": -0.965, "score": 40}], "turnScore": 40}],
    "startingScore": 501
  }
]"#;

fn write_history(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("history.json");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_load_and_aggregate() {
    let (_dir, path) = write_history(HISTORY);
    let records = load_history(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].game_mode, Some(GameMode::Competition));

    // s2 keeps its attempts, which win over the stored counters.
    let ledger = aggregate_ledger(&records);
    assert_eq!(ledger.attempts(DartboardSection::Triple(20)), 4);
    assert_eq!(ledger.hits(DartboardSection::Triple(20)), 2);
    assert_eq!(ledger.attempts(DartboardSection::Double(16)), 1);
    assert_eq!(ledger.hits(DartboardSection::Double(16)), 0);

    assert_eq!(all_attempts(&records).len(), 2);
}

#[test]
fn test_stored_shots_rebuild_scores() {
    let (_dir, path) = write_history(HISTORY);
    let records = load_history(&path).unwrap();

    // Missing coordinates read as the centre.
    let shots = records[2].shots();
    assert_eq!(shots[0].point(), ImpactPoint::new(0.0, 0.0));
    assert_eq!(shots[0].score(), 50);
    assert_eq!(shots[1].score(), 40);

    let turns = records[2].turns();
    assert_eq!(turns.len(), 1);
    assert!(!turns[0].is_bust);
    assert_eq!(turns[0].turn_score, 40);
}

#[test]
fn test_inconsistent_ledger_is_rejected() {
    let (_dir, path) = write_history(
        r#"[{"id": "bad", "gameMode": "training",
             "trainingAccuracy": {"sections": {"single-1": {"attempts": 1, "hits": 4}}}}]"#,
    );
    match load_history(&path) {
        Err(DartError::Validation(_)) => {}
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_an_error() {
    let (_dir, path) = write_history("[{\"id\": ");
    assert!(matches!(load_history(&path), Err(DartError::Json(_))));
    assert!(matches!(
        load_history("/definitely/not/here.json"),
        Err(DartError::Io(_))
    ));
}

#[test]
fn test_training_round_trip() {
    let mut session = TrainingSession::new(
        TrainingParams {
            training_spots: 3,
            attempts_per_spot: 2,
        },
        Some(9),
    );
    while !session.is_finished() {
        session.throw(ImpactPoint::new(0.0, -0.585)).unwrap();
    }

    let record = SessionRecord::from_training("t1", "2026-04-01T10:00:00Z", &session);
    assert!(record.is_training());
    assert_eq!(record.ledger(), *session.ledger());

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    save_history(&path, &[record.clone()]).unwrap();
    let loaded = load_history(&path).unwrap();
    assert_eq!(loaded, vec![record]);
    assert_eq!(aggregate_ledger(&loaded), *session.ledger());
}

#[test]
fn test_tendencies_from_stored_missed_shots() {
    // Counters only, with the miss points kept alongside.
    let (_dir, path) = write_history(
        r#"[{"id": "old", "gameMode": "training",
             "trainingAccuracy": {"sections": {"triple-20": {
               "attempts": 4, "hits": 1,
               "missedShots": [
                 {"x": 0.0, "y": -0.3, "score": 20},
                 {"x": 0.0, "y": -0.35, "score": 20},
                 {"x": 0.0, "y": -0.8, "score": 20}
               ]}}}}]"#,
    );
    let records = load_history(&path).unwrap();
    assert!(all_attempts(&records).is_empty());

    let report = analyze_samples(&tendency_samples(&records), &TendencyParams::default());
    assert_eq!(report.len(), 1);
    let t20 = &report[0];
    assert_eq!(t20.target, DartboardSection::Triple(20));
    assert_eq!(t20.attempts, 4);
    assert_eq!(t20.hits, 1);
    assert_eq!(t20.directional_bias.too_low, 2);
    assert_eq!(t20.directional_bias.too_high, 1);
    assert_eq!(t20.common_misses[0].landing, "single-20");
    assert_eq!(t20.common_misses[0].count, 3);

    let ledger = aggregate_ledger(&records);
    assert_eq!(ledger.attempts(DartboardSection::Triple(20)), 4);
    assert_eq!(ledger.hits(DartboardSection::Triple(20)), 1);
}

#[test]
fn test_saved_training_keeps_missed_shots() {
    let mut session = TrainingSession::new(
        TrainingParams {
            training_spots: 2,
            attempts_per_spot: 3,
        },
        Some(5),
    );
    while !session.is_finished() {
        session.throw(ImpactPoint::new(0.0, -1.5)).unwrap();
    }

    let mut record = SessionRecord::from_training("t2", "2026-04-03T10:00:00Z", &session);
    let stored = record.training_accuracy.clone().unwrap();
    let kept: usize = stored.sections.values().map(|s| s.missed_shots.len()).sum();
    assert_eq!(kept, 6);

    // Without the attempts, the stored block alone still feeds tendencies.
    record.attempts.clear();
    let samples = tendency_samples(&[record]);
    let misses: usize = samples.values().map(|s| s.misses.len()).sum();
    assert_eq!(misses, 6);
}

#[test]
fn test_stored_attempts_are_reclassified() {
    let (_dir, path) = write_history(
        r#"[{"id": "s3", "gameMode": "training", "attempts": [
              {"target": "triple-20", "point": {"x": 0.0, "y": -0.585}, "hit": false},
              {"target": "double-16", "point": {"x": 0.0, "y": 1.5}, "hit": true},
              {"target": "single-20", "point": {"x": 0.0, "y": -0.3}}
            ]}]"#,
    );
    let records = load_history(&path).unwrap();
    let hits: Vec<bool> = records[0].attempts.iter().map(|a| a.hit).collect();
    assert_eq!(hits, vec![true, false, true]);

    let ledger = aggregate_ledger(&records);
    assert_eq!(ledger.hits(DartboardSection::Triple(20)), 1);
    assert_eq!(ledger.hits(DartboardSection::Double(16)), 0);
}

#[test]
fn test_leg_record() {
    let mut leg = Leg::new(301);
    leg.throw(ImpactPoint::new(0.0, -0.585)).unwrap();
    leg.throw(ImpactPoint::new(0.0, -0.585)).unwrap();
    leg.confirm().unwrap();

    let record = SessionRecord::from_leg("c9", "2026-04-02T10:00:00Z", &leg);
    assert_eq!(record.game_mode, Some(GameMode::Competition));
    assert_eq!(record.total_score, 120);
    assert_eq!(record.starting_score, Some(301));
    assert_eq!(record.shots.len(), 2);
    assert!(aggregate_ledger(&[record]).is_empty());
}
