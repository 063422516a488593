use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lockforge::api::Evaluation;
use lockforge::config::ScoringWeights;
use lockforge::consts::GRID_SIZE;
use lockforge::estimator::format_count;
use lockforge::pattern::Pattern;
use lockforge::scorer::{RadarProfile, StrengthRating};
use lockforge::store::SavedEntry;

fn rating_color(rating: StrengthRating) -> Color {
    match rating {
        StrengthRating::Strong => Color::Green,
        StrengthRating::Medium => Color::Yellow,
        StrengthRating::Weak | StrengthRating::VeryWeak => Color::Red,
    }
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Draws the 3x3 pad with each visited node labelled by its step number.
pub fn print_pattern_grid(name: &str, pattern: &Pattern) {
    println!("\nPattern: {}  [{}]", name, pattern);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..GRID_SIZE {
        let cells: Vec<Cell> = (0..GRID_SIZE)
            .map(|col| {
                let idx = (row * GRID_SIZE + col) as u8;
                let label = match pattern.nodes().iter().position(|&n| n == idx) {
                    Some(step) => (step + 1).to_string(),
                    None => "·".to_string(),
                };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_feature_report(eval: &Evaluation) {
    let f = &eval.features;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Len").add_attribute(Attribute::Bold),
        Cell::new("Turns"),
        Cell::new("X-ings"),
        Cell::new("AngVar"),
        Cell::new("Start"),
        Cell::new("Symmetry"),
        Cell::new("Mirrors"),
    ]);

    let start = f.start.map_or("-".to_string(), |s| s.to_string());
    let mirrors = if f.matched_reflections.is_empty() {
        "-".to_string()
    } else {
        f.matched_reflections
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    table.add_row(vec![
        Cell::new(f.length).add_attribute(Attribute::Bold),
        Cell::new(f.turns),
        Cell::new(f.intersections),
        Cell::new(format!("{:.2}", f.angle_variance)),
        Cell::new(start),
        Cell::new(f.symmetry),
        Cell::new(mirrors),
    ]);
    println!("{}", table);
}

pub fn print_score_report(eval: &Evaluation) {
    let Some(d) = eval.details else {
        println!(
            "\nScore: 0 ({}), pattern needs at least 4 nodes",
            eval.rating
        );
        return;
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Base"),
        Cell::new("Len").fg(Color::Green),
        Cell::new("Turn").fg(Color::Green),
        Cell::new("X").fg(Color::Green),
        Cell::new("Ang").fg(Color::Green),
        Cell::new("Start").fg(Color::Red),
        Cell::new("Sym").fg(Color::Red),
        Cell::new("Rating"),
    ]);
    right_align(&mut table, 0..=7);

    table.add_row(vec![
        Cell::new(d.score).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", d.base)),
        Cell::new(format!("{:.1}", d.length_bonus)),
        Cell::new(format!("{:.1}", d.turn_bonus)),
        Cell::new(format!("{:.1}", d.intersection_bonus)),
        Cell::new(format!("{:.1}", d.angle_bonus)),
        Cell::new(format!("{:.1}", -d.start_penalty)),
        Cell::new(format!("{:.1}", -d.symmetry_penalty)),
        Cell::new(eval.rating).fg(rating_color(eval.rating)),
    ]);
    println!("\n{}", table);
}

pub fn print_radar_report(radar: &RadarProfile) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for (label, v) in RadarProfile::LABELS.iter().zip(radar.axes()) {
        let bar = "#".repeat((v * 20.0).round() as usize);
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.2}", v)).set_alignment(CellAlignment::Right),
            Cell::new(bar),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_attack_report(eval: &Evaluation) {
    match &eval.attack {
        Some(a) => println!(
            "\n🔓 Estimated tries: {}  |  ETA @ {}/s: {}",
            format_count(a.tries),
            format_count(a.attempts_per_second),
            a.duration
        ),
        None => println!("\n🔓 Estimated tries: -  |  ETA: -"),
    }
}

pub fn print_preset_report(results: &[(String, Evaluation)], w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Pattern").add_attribute(Attribute::Bold),
        Cell::new("Sequence"),
        Cell::new(format!("Len\n{:+.1}", w.weight_length)),
        Cell::new(format!("Turn\n{:+.1}", w.weight_turns)),
        Cell::new(format!("X\n{:+.1}", w.weight_intersections)),
        Cell::new(format!("AngV\n{:+.1}", w.weight_angle_variance)),
        Cell::new(format!("Start\n{:+.1}", w.weight_start)),
        Cell::new(format!("Sym\n{:+.1}", w.weight_symmetry)),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Tries"),
    ]);
    right_align(&mut table, 2..=9);

    for (name, e) in results {
        let f = &e.features;
        let tries = e.attack.as_ref().map_or("-".to_string(), |a| format_count(a.tries));
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(
                e.sequence
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join("-"),
            ),
            Cell::new(f.length),
            Cell::new(f.turns),
            Cell::new(f.intersections),
            Cell::new(format!("{:.2}", f.angle_variance)),
            Cell::new(f.start.map_or("-".to_string(), |s| s.to_string())),
            Cell::new(f.symmetry),
            Cell::new(e.score).fg(rating_color(e.rating)),
            Cell::new(tries),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_saved_list(entries: &[SavedEntry]) {
    if entries.is_empty() {
        println!("\nNo saved patterns.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Sequence"),
        Cell::new("Len"),
        Cell::new("Score"),
    ]);
    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&e.name).add_attribute(Attribute::Bold),
            Cell::new(
                e.seq
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join("-"),
            ),
            Cell::new(e.len),
            Cell::new(e.score),
        ]);
    }
    println!("\n{}", table);
}
