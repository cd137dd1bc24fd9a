use beamscore_core::SurfaceStats;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn stats(stats: &SurfaceStats) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Peak Beam").fg(Color::Cyan),
        Cell::new("Peak Object").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new(stats.min),
        Cell::new(stats.max),
        Cell::new(format!("{:.2}", stats.mean)),
        Cell::new(format!("{:.1}", stats.peak_beam)),
        Cell::new(format!("{:.1}", stats.peak_object)),
    ]);

    for i in 0..5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n{}", table);
}

pub fn sweep(rows: &[(f64, SurfaceStats)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Penalty").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Mean").fg(Color::Cyan),
        Cell::new("Peak Beam"),
        Cell::new("Peak Object"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (factor, s) in rows {
        table.add_row(vec![
            Cell::new(format!("{:.2}", factor)).add_attribute(Attribute::Bold),
            Cell::new(s.min),
            Cell::new(s.max),
            Cell::new(format!("{:.2}", s.mean)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", s.peak_beam)),
            Cell::new(format!("{:.1}", s.peak_object)),
        ]);
    }

    println!("\n{}", table);
}
