// Internal Modules
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod grid;
pub mod surface;

// Re-export the working set so callers reach everything via beamscore_core::*
pub use config::SurfaceConfig;
pub use error::{BeamScoreError, BsResult};
pub use grid::{linspace, RadiusDomain, RadiusGrid};
pub use surface::{ScoreSurface, SurfaceScorer, SurfaceStats};
