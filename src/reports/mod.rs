use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dartcoach::board::Shot;
use dartcoach::ledger::{AccuracyLedger, RingBreakdown, SectionAccuracy};
use dartcoach::planner::CheckoutPath;
use dartcoach::stats::SessionSummary;
use dartcoach::tendency::ShotTendency;

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "-".to_string(),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_shot(shot: &Shot, angle: f64) {
    let landing = shot.landing();
    let point = shot.point();
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("X").add_attribute(Attribute::Bold),
        Cell::new("Y").add_attribute(Attribute::Bold),
        Cell::new("Angle"),
        Cell::new("Landing"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.3}", point.x)),
        Cell::new(format!("{:.3}", point.y)),
        Cell::new(format!("{:.1}", angle)),
        Cell::new(landing.display_name()),
        Cell::new(shot.score()),
    ]);
    align_right(&mut table, 0..=4);
    println!("{}", table);
    println!("Score: {}", shot.score());
    println!("Landing: {}", landing);
}

pub fn print_checkout_path(path: &CheckoutPath) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Dart").add_attribute(Attribute::Bold),
        Cell::new("Target"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Accuracy"),
    ]);
    for (i, target) in path.targets.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(target.section.display_name()),
            Cell::new(target.score),
            Cell::new(percent(Some(target.accuracy))),
        ]);
    }
    align_right(&mut table, 2..=3);
    println!("{}", table);

    let status = if path.is_checkout() {
        "checkout".to_string()
    } else {
        format!("leaves {}", path.remaining_score)
    };
    println!(
        "Path accuracy: {} | {}",
        percent(Some(path.total_accuracy)),
        status
    );
}

pub fn print_session_summary(summary: &SessionSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Darts").add_attribute(Attribute::Bold),
        Cell::new("Avg").fg(Color::Cyan),
        Cell::new("Missed").fg(Color::Red),
        Cell::new("Avg dist"),
        Cell::new("Grouping"),
    ]);
    table.add_row(vec![
        Cell::new(summary.shot_count),
        Cell::new(format!("{:.2}", summary.average_score)),
        Cell::new(summary.missed_shots),
        Cell::new(format!("{:.2}", summary.average_distance_from_center)),
        Cell::new(format!("{:.2}", summary.grouping_radius)),
    ]);
    align_right(&mut table, 0..=4);
    println!("{}", table);
}

pub fn print_accuracy_table(ledger: &AccuracyLedger, min_attempts: u32) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Section").add_attribute(Attribute::Bold),
        Cell::new("Attempts"),
        Cell::new("Hits"),
        Cell::new("Accuracy").fg(Color::Cyan),
    ]);

    let mut rows: Vec<_> = ledger
        .iter()
        .filter(|(_, acc)| acc.attempts >= min_attempts)
        .collect();
    rows.sort_by(|a, b| {
        let ra = a.1.rate().unwrap_or(0.0);
        let rb = b.1.rate().unwrap_or(0.0);
        rb.total_cmp(&ra).then_with(|| a.0.cmp(b.0))
    });

    for (section, acc) in rows {
        let rate = acc.rate();
        let color = match rate {
            Some(r) if r >= 0.5 => Color::Green,
            Some(r) if r >= 0.2 => Color::Yellow,
            _ => Color::Red,
        };
        table.add_row(vec![
            Cell::new(section.display_name()),
            Cell::new(acc.attempts),
            Cell::new(acc.hits),
            Cell::new(percent(rate)).fg(color),
        ]);
    }
    align_right(&mut table, 1..=3);
    println!("{}", table);
}

pub fn print_ring_breakdown(breakdown: &RingBreakdown) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Ring").add_attribute(Attribute::Bold),
        Cell::new("Attempts"),
        Cell::new("Accuracy").fg(Color::Cyan),
    ]);
    let rows: [(&str, &SectionAccuracy); 4] = [
        ("Overall", &breakdown.overall),
        ("Singles", &breakdown.single),
        ("Doubles", &breakdown.double),
        ("Trebles", &breakdown.triple),
    ];
    for (name, acc) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(acc.attempts),
            Cell::new(percent(acc.rate())),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("{}", table);
}

pub fn print_tendency_table(tendencies: &[ShotTendency]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Att"),
        Cell::new("Hit%").fg(Color::Cyan),
        Cell::new("High"),
        Cell::new("Low"),
        Cell::new("Left"),
        Cell::new("Right"),
        Cell::new("Common misses").fg(Color::Red),
    ]);

    for t in tendencies {
        let misses = t
            .common_misses
            .iter()
            .map(|m| format!("{} ({:.0}%)", m.display_name, m.percentage))
            .collect::<Vec<_>>()
            .join(", ");
        let b = &t.directional_bias;
        table.add_row(vec![
            Cell::new(&t.target_display_name),
            Cell::new(t.attempts),
            Cell::new(format!("{:.1}", t.hit_rate)),
            Cell::new(b.too_high),
            Cell::new(b.too_low),
            Cell::new(b.too_left),
            Cell::new(b.too_right),
            Cell::new(misses),
        ]);
    }
    align_right(&mut table, 1..=6);
    println!("{}", table);
}
