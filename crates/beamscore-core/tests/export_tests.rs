use beamscore_core::export::{write_csv, write_json, SurfaceExport};
use beamscore_core::{RadiusDomain, RadiusGrid, SurfaceScorer};

fn small_setup() -> (RadiusGrid, SurfaceScorer) {
    let domain = RadiusDomain::new(20.0, 75.0).unwrap();
    let grid = RadiusGrid::new(domain, 5).unwrap();
    let scorer = SurfaceScorer::new(domain, 2.0).unwrap();
    (grid, scorer)
}

#[test]
fn csv_matrix_has_axis_header_and_one_record_per_object_row() {
    let (grid, scorer) = small_setup();
    let surface = scorer.compute(&grid);

    let mut buf = Vec::new();
    write_csv(&mut buf, &grid, &surface).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6); // header + 5 object rows
    assert!(lines[0].starts_with("object_radius,20.000,"));
    assert!(lines[0].ends_with("75.000"));

    // First data row is the min-object row; its first cell is the clamped peak.
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first.len(), 6);
    assert_eq!(first[0], "20.000");
    assert_eq!(first[1], "250");
}

#[test]
fn json_export_round_trips() {
    let (grid, scorer) = small_setup();
    let surface = scorer.compute(&grid);
    let export = SurfaceExport::new(&grid, &surface, 2.0);

    let mut buf = Vec::new();
    write_json(&mut buf, &export).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.contains("\"penaltyFactor\": 2.0"));

    let parsed: SurfaceExport = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed, export);
    assert_eq!(parsed.scores.len(), 5);
    assert!(parsed.scores.iter().all(|row| row.len() == 5));
    assert_eq!(parsed.beam_radii, grid.beam_axis());
    assert_eq!(parsed.object_radii, grid.object_axis());
}
