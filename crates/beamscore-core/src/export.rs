use crate::error::BsResult;
use crate::grid::RadiusGrid;
use crate::surface::ScoreSurface;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use strum_macros::Display;

/// Output encodings for a rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Table,
    Csv,
    Json,
}

/// The render contract: two coordinate axes, the score matrix, and the
/// control value that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceExport {
    pub penalty_factor: f64,
    pub beam_radii: Vec<f64>,
    pub object_radii: Vec<f64>,
    pub scores: Vec<Vec<u16>>,
}

impl SurfaceExport {
    pub fn new(grid: &RadiusGrid, surface: &ScoreSurface, penalty_factor: f64) -> Self {
        let n = surface.samples();
        let scores = (0..n)
            .map(|row| (0..n).map(|col| surface.at(row, col)).collect())
            .collect();

        Self {
            penalty_factor,
            beam_radii: grid.beam_axis().to_vec(),
            object_radii: grid.object_axis().to_vec(),
            scores,
        }
    }
}

/// Full-resolution matrix: header row carries the beam axis, the first
/// column the object axis.
pub fn write_csv<W: Write>(writer: W, grid: &RadiusGrid, surface: &ScoreSurface) -> BsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["object_radius".to_string()];
    header.extend(grid.beam_axis().iter().map(|b| format!("{:.3}", b)));
    wtr.write_record(&header)?;

    for row in 0..surface.samples() {
        let mut record = vec![format!("{:.3}", grid.object_at(row, 0))];
        record.extend((0..surface.samples()).map(|col| surface.at(row, col).to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, export: &SurfaceExport) -> BsResult<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}
