mod heatmap;
mod tables;

pub use self::heatmap::print_surface as print_heatmap;
pub use self::tables::{stats as print_stats, sweep as print_sweep_report};
