use crate::consts::{
    GRID_SAMPLES, MAX_BEAM_RADIUS, MIN_BEAM_RADIUS, PENALTY_FACTOR_DEFAULT, PENALTY_FACTOR_MAX,
    PENALTY_FACTOR_MIN,
};
use crate::error::{BeamScoreError, BsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Every knob of a surface evaluation. Field defaults reproduce the stock
/// surface; a JSON file can override them and command-line flags win over
/// the file.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Oversize penalty factor
    #[arg(long, default_value_t = PENALTY_FACTOR_DEFAULT)]
    pub penalty_factor: f64,

    /// Samples per grid axis
    #[arg(long, default_value_t = GRID_SAMPLES)]
    pub samples: usize,

    /// Lower bound of the radius domain
    #[arg(long, default_value_t = MIN_BEAM_RADIUS)]
    pub radius_min: f64,

    /// Upper bound of the radius domain
    #[arg(long, default_value_t = MAX_BEAM_RADIUS)]
    pub radius_max: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            penalty_factor: PENALTY_FACTOR_DEFAULT,
            samples: GRID_SAMPLES,
            radius_min: MIN_BEAM_RADIUS,
            radius_max: MAX_BEAM_RADIUS,
        }
    }
}

impl SurfaceConfig {
    /// Checks every invariant once, then snaps the penalty factor onto the
    /// control's 0.1 step lattice. Callers get either a usable config or a
    /// fatal `Config` error; nothing downstream re-validates.
    pub fn validate(&mut self) -> BsResult<()> {
        if !self.radius_min.is_finite()
            || !self.radius_max.is_finite()
            || self.radius_min >= self.radius_max
        {
            return Err(BeamScoreError::Config(format!(
                "degenerate radius domain [{}, {}]: min must lie strictly below max",
                self.radius_min, self.radius_max
            )));
        }

        if self.samples < 2 {
            return Err(BeamScoreError::Config(format!(
                "grid needs at least 2 samples per axis, got {}",
                self.samples
            )));
        }

        if !self.penalty_factor.is_finite()
            || self.penalty_factor < PENALTY_FACTOR_MIN
            || self.penalty_factor > PENALTY_FACTOR_MAX
        {
            return Err(BeamScoreError::Config(format!(
                "penalty factor {} outside the control range [{}, {}]",
                self.penalty_factor, PENALTY_FACTOR_MIN, PENALTY_FACTOR_MAX
            )));
        }

        self.penalty_factor = snap_to_step(self.penalty_factor);
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BsResult<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "config loaded");
        Ok(config)
    }

    pub fn merge_from_cli(&mut self, cli_config: &SurfaceConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field.clone();
                }
            };
        }

        update_if_present!(penalty_factor, "penalty_factor");
        update_if_present!(samples, "samples");
        update_if_present!(radius_min, "radius_min");
        update_if_present!(radius_max, "radius_max");
    }
}

/// The control only ever produces multiples of 0.1.
fn snap_to_step(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
