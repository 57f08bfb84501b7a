use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use targetface::end::EndSummary;
use targetface::scorer::{Hit, RingColor, SpotType};
use targetface::session::{ReplayEntry, ReplayLog};

fn score_color(label: &str) -> Color {
    match label.parse() {
        Ok(score) => match RingColor::for_score(score) {
            RingColor::Gold => Color::Yellow,
            RingColor::Red => Color::Red,
            RingColor::Blue => Color::Blue,
            RingColor::Black => Color::DarkGrey,
            RingColor::White => Color::White,
        },
        Err(_) => Color::Reset,
    }
}

pub fn print_hit(spot: SpotType, hit: &Hit) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Face", "Score", "X %", "Y %", "Distance"]);
    let label = hit.score.to_string();
    table.add_row(vec![
        Cell::new(spot.to_string()),
        Cell::new(&label)
            .fg(score_color(&label))
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", hit.x_pct)),
        Cell::new(format!("{:.2}", hit.y_pct)),
        Cell::new(format!("{:.2}", hit.distance)),
    ]);
    println!("{}", table);
}

pub fn print_event_log(entries: &[ReplayEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("t (ms)").add_attribute(Attribute::Bold),
        Cell::new("Event"),
        Cell::new("Outcome"),
        Cell::new("Face"),
    ]);

    for e in entries {
        let outcome = e.outcome.clone().unwrap_or_else(|| "-".to_string());
        let color = if outcome.starts_with("accepted") {
            Color::Green
        } else if outcome == "-" {
            Color::Reset
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(format!("{:.0}", e.at_ms)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:?}", e.event)),
            Cell::new(outcome).fg(color),
            Cell::new(e.active_face).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_end_summaries(log: &ReplayLog) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("End").add_attribute(Attribute::Bold),
        Cell::new("Arrows"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Hits"),
        Cell::new("10s"),
        Cell::new("Xs").fg(Color::Yellow),
        Cell::new("M").fg(Color::Red),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, end) in log.ends.iter().enumerate() {
        let scores: Vec<String> = end.iter().map(|a| a.score.to_string()).collect();
        let s = EndSummary::from_arrows(end);
        table.add_row(summary_row(format!("{} [{}]", i + 1, scores.join(" ")), &s));
    }

    let total = log.total();
    let mut last = summary_row("Total".to_string(), &total);
    last[0] = Cell::new("Total").add_attribute(Attribute::Bold);
    table.add_row(last);

    println!("\n{}", table);
}

fn summary_row(label: String, s: &EndSummary) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(s.arrows),
        Cell::new(s.total).fg(Color::Cyan),
        Cell::new(s.hits),
        Cell::new(s.tens),
        Cell::new(s.x_count).fg(Color::Yellow),
        Cell::new(s.misses).fg(Color::Red),
    ]
}
