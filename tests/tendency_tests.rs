use dartcoach::board::{aim_point, DartboardSection, ImpactPoint, Shot};
use dartcoach::config::TendencyParams;
use dartcoach::game::Attempt;
use dartcoach::stats::{grouping_radius, SessionSummary};
use dartcoach::tendency::{analyze_tendencies, common_misses, directional_bias};

const T20: DartboardSection = DartboardSection::Triple(20);

fn attempt(target: DartboardSection, x: f64, y: f64) -> Attempt {
    Attempt::new(target, ImpactPoint::new(x, y))
}

#[test]
fn test_directional_bias_uses_screen_orientation() {
    let aim = aim_point(T20);
    let misses = [
        ImpactPoint::new(aim.x - 0.2, aim.y - 0.2), // High and left
        ImpactPoint::new(aim.x + 0.2, aim.y + 0.2), // Low and right
        ImpactPoint::new(aim.x + 0.01, aim.y - 0.3), // High only
    ];
    let bias = directional_bias(T20, &misses, 0.05);
    assert_eq!(bias.too_high, 2);
    assert_eq!(bias.too_low, 1);
    assert_eq!(bias.too_left, 1);
    assert_eq!(bias.too_right, 1);
}

#[test]
fn test_common_misses_ranked_by_count() {
    let misses = [
        ImpactPoint::new(0.0, -0.3), // single-20
        ImpactPoint::new(0.0, -0.8), // single-20
        ImpactPoint::new(0.0, -1.5), // off the board
        ImpactPoint::new(0.0, -0.965), // double-20
        ImpactPoint::new(0.0, -1.2), // off the board
        ImpactPoint::new(0.0, -0.25), // single-20
    ];
    let ranked = common_misses(&misses, 2);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].landing, "single-20");
    assert_eq!(ranked[0].count, 3);
    assert!((ranked[0].percentage - 50.0).abs() < 1e-9);
    assert_eq!(ranked[1].landing, "miss-0");
    assert_eq!(ranked[1].display_name, "Miss (Outside Board)");
}

#[test]
fn test_analyze_tendencies() {
    let mut attempts = vec![
        attempt(T20, 0.0, -0.585),
        attempt(T20, 0.0, -0.3),
        attempt(T20, 0.0, -0.35),
        attempt(T20, 0.0, -0.8),
    ];
    // Too few to report.
    attempts.push(attempt(DartboardSection::Double(16), 0.0, 0.0));
    attempts.push(attempt(DartboardSection::Double(16), 0.0, 0.0));

    let params = TendencyParams::default();
    let report = analyze_tendencies(&attempts, &params);
    assert_eq!(report.len(), 1);

    let t20 = &report[0];
    assert_eq!(t20.target, T20);
    assert_eq!(t20.target_display_name, "Triple 20");
    assert_eq!(t20.attempts, 4);
    assert_eq!(t20.hits, 1);
    assert!((t20.hit_rate - 25.0).abs() < 1e-9);
    // Two fell short towards the bull, one went long.
    assert_eq!(t20.directional_bias.too_low, 2);
    assert_eq!(t20.directional_bias.too_high, 1);
    assert_eq!(t20.common_misses[0].landing, "single-20");
    assert_eq!(t20.common_misses[0].count, 3);
}

#[test]
fn test_tendencies_sorted_by_volume() {
    let mut attempts = Vec::new();
    for _ in 0..3 {
        attempts.push(attempt(DartboardSection::Double(16), 0.0, 0.0));
    }
    for _ in 0..5 {
        attempts.push(attempt(T20, 0.0, 0.0));
    }
    for _ in 0..3 {
        attempts.push(attempt(DartboardSection::Single(1), 0.0, 0.0));
    }

    let report = analyze_tendencies(&attempts, &TendencyParams::default());
    let order: Vec<DartboardSection> = report.iter().map(|t| t.target).collect();
    assert_eq!(
        order,
        vec![T20, DartboardSection::Single(1), DartboardSection::Double(16)]
    );
}

#[test]
fn test_session_summary() {
    let shots = [
        Shot::at(0.0, -0.585),
        Shot::at(0.0, -0.3),
        Shot::at(0.0, -1.5),
    ];
    let summary = SessionSummary::from_shots(&shots);
    assert_eq!(summary.shot_count, 3);
    assert_eq!(summary.missed_shots, 1);
    assert!((summary.average_score - 80.0 / 3.0).abs() < 1e-9);
    assert!((summary.average_distance_from_center - 7.95).abs() < 1e-9);
    assert!(summary.grouping_radius > 0.0);
}

#[test]
fn test_grouping_radius() {
    assert_eq!(grouping_radius(&[]), 0.0);
    assert_eq!(grouping_radius(&[ImpactPoint::new(0.3, 0.3)]), 0.0);

    let pair = [ImpactPoint::new(-0.1, 0.0), ImpactPoint::new(0.1, 0.0)];
    assert!((grouping_radius(&pair) - 1.0).abs() < 1e-9);
}

#[test]
fn test_empty_summary() {
    assert_eq!(SessionSummary::from_shots(&[]), SessionSummary::default());
}
