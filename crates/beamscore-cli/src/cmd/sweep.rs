use crate::reports;
use beamscore_core::config::SurfaceConfig;
use beamscore_core::consts::{PENALTY_FACTOR_MAX, PENALTY_FACTOR_MIN, PENALTY_FACTOR_STEP};
use beamscore_core::{
    BeamScoreError, BsResult, RadiusDomain, RadiusGrid, SurfaceScorer, SurfaceStats,
};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: SurfaceConfig,

    /// Sweep start; defaults to the control minimum
    #[arg(long, default_value_t = PENALTY_FACTOR_MIN)]
    pub from: f64,

    /// Sweep end, inclusive; defaults to the control maximum
    #[arg(long, default_value_t = PENALTY_FACTOR_MAX)]
    pub to: f64,

    /// Increment between evaluations
    #[arg(long, default_value_t = PENALTY_FACTOR_STEP)]
    pub step: f64,

    /// Optional JSON destination for the sweep summary
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub penalty_factor: f64,
    pub stats: SurfaceStats,
}

/// The batch counterpart of a slider drag: one full re-evaluation per step
/// of the control range.
pub fn run(args: &SweepArgs, config: &SurfaceConfig) -> BsResult<()> {
    if !args.step.is_finite() || args.step <= 0.0 {
        return Err(BeamScoreError::Validation(format!(
            "sweep step must be positive, got {}",
            args.step
        )));
    }
    if args.from > args.to || args.from < PENALTY_FACTOR_MIN || args.to > PENALTY_FACTOR_MAX {
        return Err(BeamScoreError::Validation(format!(
            "sweep range [{}, {}] must sit inside the control range [{}, {}]",
            args.from, args.to, PENALTY_FACTOR_MIN, PENALTY_FACTOR_MAX
        )));
    }

    let domain = RadiusDomain::new(config.radius_min, config.radius_max)?;
    let grid = RadiusGrid::new(domain, config.samples)?;

    info!(
        "🔁 Sweeping penalty factor {:.1}..={:.1} (step {:.2}, {}x{} grid per step)",
        args.from, args.to, args.step, config.samples, config.samples
    );

    let mut rows = Vec::new();
    let mut i = 0usize;
    loop {
        let factor = args.from + i as f64 * args.step;
        if factor > args.to + args.step * 1e-6 {
            break;
        }

        let surface = SurfaceScorer::new(domain, factor)?.compute(&grid);
        rows.push(SweepRow {
            penalty_factor: factor,
            stats: surface.stats(&grid),
        });
        i += 1;
    }

    let view: Vec<(f64, SurfaceStats)> = rows.iter().map(|r| (r.penalty_factor, r.stats)).collect();
    reports::print_sweep_report(&view);

    if let Some(path) = &args.output {
        serde_json::to_writer_pretty(File::create(path)?, &rows)?;
        info!("💾 Sweep summary written to {}", path);
    }

    Ok(())
}
