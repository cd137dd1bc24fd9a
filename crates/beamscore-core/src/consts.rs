// ===== beamscore/crates/beamscore-core/src/consts.rs =====
/// Lower bound of the shared radius domain. Both the beam axis and the
/// object axis sample the same closed interval.
pub const MIN_BEAM_RADIUS: f64 = 20.0;

/// Upper bound of the shared radius domain.
pub const MAX_BEAM_RADIUS: f64 = 75.0;

/// Floor of the clamped score range.
pub const MIN_SCORE: u16 = 1;

/// Ceiling of the clamped score range.
pub const MAX_SCORE: u16 = 250;

/// Multiplier applied to match quality before quantization.
pub const BASE_SCORE: f64 = 250.0;

/// Samples per axis of the default evaluation grid.
pub const GRID_SAMPLES: usize = 100;

/// Lower bound of the oversize penalty factor control.
pub const PENALTY_FACTOR_MIN: f64 = 0.1;

/// Upper bound of the oversize penalty factor control.
pub const PENALTY_FACTOR_MAX: f64 = 5.0;

/// Default value of the oversize penalty factor control.
pub const PENALTY_FACTOR_DEFAULT: f64 = 2.0;

/// Step size of the oversize penalty factor control. Supplied values are
/// snapped onto this lattice.
pub const PENALTY_FACTOR_STEP: f64 = 0.1;
