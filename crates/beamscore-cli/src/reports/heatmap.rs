use beamscore_core::{RadiusGrid, ScoreSurface};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

/// Picks `cells` evenly spaced indices out of `0..n`, first and last
/// included, so every printed value is an exact surface cell.
fn display_indices(n: usize, cells: usize) -> Vec<usize> {
    let cells = cells.clamp(2, n);
    (0..cells).map(|i| i * (n - 1) / (cells - 1)).collect()
}

pub fn print_surface(
    grid: &RadiusGrid,
    surface: &ScoreSurface,
    penalty_factor: f64,
    display_cells: usize,
) {
    println!("\nScore Surface (Penalty Factor = {:.1})", penalty_factor);
    println!("Rows: Object Radius | Columns: Beam Radius | Cells: Score");

    let idx = display_indices(surface.samples(), display_cells);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("obj \\ beam")];
    header.extend(idx.iter().map(|&col| {
        Cell::new(format!("{:.0}", grid.beam_at(0, col))).set_alignment(CellAlignment::Right)
    }));
    table.add_row(header);

    for &row in &idx {
        let mut cells = vec![Cell::new(format!("{:.1}", grid.object_at(row, 0)))];
        cells.extend(idx.iter().map(|&col| {
            Cell::new(surface.at(row, col)).set_alignment(CellAlignment::Right)
        }));
        table.add_row(cells);
    }

    println!("{}", table);
}
