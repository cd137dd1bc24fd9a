use crate::reports;
use beamscore_core::config::SurfaceConfig;
use beamscore_core::export::{self, ExportFormat, SurfaceExport};
use beamscore_core::{BsResult, RadiusDomain, RadiusGrid, SurfaceScorer};
use clap::Args;
use std::fs::File;
use std::io::Write;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: SurfaceConfig,

    /// Output encoding for the surface
    #[arg(long, value_enum, default_value_t = ExportFormat::Table)]
    pub format: ExportFormat,

    /// Destination file for csv/json output; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Cells per axis in the terminal heatmap
    #[arg(long, default_value_t = 16)]
    pub display_cells: usize,
}

pub fn run(args: &RenderArgs, config: &SurfaceConfig) -> BsResult<()> {
    let domain = RadiusDomain::new(config.radius_min, config.radius_max)?;
    let grid = RadiusGrid::new(domain, config.samples)?;
    let scorer = SurfaceScorer::new(domain, config.penalty_factor)?;

    info!(
        "🧮 Evaluating {}x{} surface (penalty factor {:.1})",
        config.samples, config.samples, config.penalty_factor
    );
    let surface = scorer.compute(&grid);

    match args.format {
        ExportFormat::Table => {
            reports::print_heatmap(&grid, &surface, config.penalty_factor, args.display_cells);
            reports::print_stats(&surface.stats(&grid));
        }
        ExportFormat::Csv => {
            export::write_csv(open_sink(&args.output)?, &grid, &surface)?;
            log_written(&args.format, &args.output);
        }
        ExportFormat::Json => {
            let payload = SurfaceExport::new(&grid, &surface, config.penalty_factor);
            export::write_json(open_sink(&args.output)?, &payload)?;
            log_written(&args.format, &args.output);
        }
    }

    Ok(())
}

fn open_sink(path: &Option<String>) -> BsResult<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(std::io::stdout().lock()),
    })
}

fn log_written(format: &ExportFormat, path: &Option<String>) {
    if let Some(p) = path {
        info!("💾 Surface written as {} to {}", format, p);
    }
}
