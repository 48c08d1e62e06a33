use dartcoach::board::{aim_point, DartboardSection, ImpactPoint};
use dartcoach::game::{Leg, ThrowOutcome};
use dartcoach::ledger::AccuracyLedger;
use dartcoach::planner::CheckoutPlanner;

fn at(section: DartboardSection) -> ImpactPoint {
    aim_point(section)
}

const T20: DartboardSection = DartboardSection::Triple(20);
const D20: DartboardSection = DartboardSection::Double(20);

#[test]
fn test_full_turn_waits_for_confirmation() {
    let mut leg = Leg::default();
    assert_eq!(leg.remaining(), 501);

    assert_eq!(
        leg.throw(at(T20)).unwrap(),
        ThrowOutcome::InProgress { remaining: 441 }
    );
    assert_eq!(
        leg.throw(at(T20)).unwrap(),
        ThrowOutcome::InProgress { remaining: 381 }
    );
    assert_eq!(
        leg.throw(at(T20)).unwrap(),
        ThrowOutcome::AwaitingConfirmation { remaining: 321 }
    );
    assert_eq!(leg.darts_left(), 0);
    assert!(leg.throw(at(T20)).is_err());

    let turn = leg.confirm().unwrap();
    assert_eq!(turn.turn_score, 180);
    assert!(!turn.is_bust);
    assert_eq!(leg.remaining(), 321);
    assert_eq!(leg.committed_remaining(), 321);
    assert_eq!(leg.darts_left(), 3);
}

#[test]
fn test_early_confirmation() {
    let mut leg = Leg::new(301);
    leg.throw(at(D20)).unwrap();
    let turn = leg.confirm().unwrap();
    assert_eq!(turn.shots.len(), 1);
    assert_eq!(leg.remaining(), 261);
}

#[test]
fn test_confirm_without_darts_fails() {
    let mut leg = Leg::new(301);
    assert!(leg.confirm().is_err());
}

#[test]
fn test_bust_restores_score() {
    let mut leg = Leg::new(100);
    leg.throw(at(T20)).unwrap();
    assert_eq!(leg.throw(at(T20)).unwrap(), ThrowOutcome::Bust);

    assert_eq!(leg.remaining(), 100);
    assert_eq!(leg.darts_left(), 3);
    let turn = leg.turns().last().unwrap();
    assert!(turn.is_bust);
    assert_eq!(turn.turn_score, 120);
    assert_eq!(turn.applied_score(), 0);
}

#[test]
fn test_exact_zero_wins() {
    let mut leg = Leg::new(100);
    leg.throw(at(T20)).unwrap();
    assert_eq!(leg.throw(at(D20)).unwrap(), ThrowOutcome::Won);

    assert!(leg.is_finished());
    assert_eq!(leg.remaining(), 0);
    assert_eq!(leg.darts_left(), 0);
    assert_eq!(leg.turns().len(), 1);
    assert!(leg.throw(at(T20)).is_err());
    assert!(leg.undo().is_none());
}

#[test]
fn test_undo_takes_back_last_dart() {
    let mut leg = Leg::new(501);
    leg.throw(at(T20)).unwrap();
    leg.throw(ImpactPoint::new(0.0, -1.5)).unwrap();
    assert_eq!(leg.current_shots().len(), 2);

    let undone = leg.undo().unwrap();
    assert_eq!(undone.score(), 0);
    assert_eq!(leg.remaining(), 441);
    assert_eq!(leg.darts_left(), 2);
}

#[test]
fn test_recommendation_follows_the_turn() {
    let planner = CheckoutPlanner::default();
    let ledger = AccuracyLedger::new();
    let mut leg = Leg::new(170);

    assert_eq!(leg.recommendation(&planner, &ledger).unwrap().section, T20);
    leg.throw(at(T20)).unwrap();
    assert_eq!(leg.recommendation(&planner, &ledger).unwrap().section, T20);
    leg.throw(at(T20)).unwrap();
    assert_eq!(
        leg.recommendation(&planner, &ledger).unwrap().section,
        DartboardSection::Bullseye
    );
}

#[test]
fn test_leg_serializes_for_storage() {
    let mut leg = Leg::new(60);
    leg.throw(at(D20)).unwrap();
    leg.confirm().unwrap();

    let json = serde_json::to_string(&leg).unwrap();
    let back: Leg = serde_json::from_str(&json).unwrap();
    assert_eq!(back, leg);
    assert_eq!(back.remaining(), 20);
}
