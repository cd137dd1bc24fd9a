use crate::consts::{BASE_SCORE, MAX_SCORE, MIN_SCORE};
use crate::error::{BeamScoreError, BsResult};
use crate::grid::{RadiusDomain, RadiusGrid};
use itertools::{Itertools, MinMaxResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Elementwise scorer for beam/object radius pairings.
///
/// Stateless over its two fields; safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceScorer {
    domain: RadiusDomain,
    penalty_factor: f64,
}

impl SurfaceScorer {
    /// The formula is total for any positive finite factor; the [0.1, 5.0]
    /// control range is enforced one layer up, in `SurfaceConfig`.
    pub fn new(domain: RadiusDomain, penalty_factor: f64) -> BsResult<Self> {
        if !penalty_factor.is_finite() || penalty_factor <= 0.0 {
            return Err(BeamScoreError::Validation(format!(
                "penalty factor must be a positive finite number, got {}",
                penalty_factor
            )));
        }
        Ok(Self {
            domain,
            penalty_factor,
        })
    }

    pub fn domain(&self) -> RadiusDomain {
        self.domain
    }

    pub fn penalty_factor(&self) -> f64 {
        self.penalty_factor
    }

    /// Scores one (beam, object) pairing.
    ///
    /// Oversized beams (beam percent above object percent) pay an
    /// exponential penalty scaled by the factor; undersized beams pay their
    /// linear mismatch, independent of the factor. Smaller objects earn a
    /// linear early bonus regardless of beam size.
    #[inline(always)]
    pub fn score_cell(&self, beam: f64, object: f64) -> u16 {
        let beam_percent = self.domain.percent_of(beam);
        let object_percent = self.domain.percent_of(object);
        let diff = beam_percent - object_percent;

        let penalty = if diff > 0.0 {
            (self.penalty_factor * diff).exp() - 1.0
        } else {
            diff.abs()
        };

        let match_quality = (1.0 - penalty).max(0.0);
        let early_bonus = 1.0 - object_percent;

        // Quantization order is load-bearing: floor runs after the offset
        // is added and before the clamp.
        let raw = (BASE_SCORE * match_quality * early_bonus + f64::from(MIN_SCORE)).floor();
        raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u16
    }

    /// Evaluates the full surface. Rows carry no cross-dependencies, so the
    /// map runs one row per rayon task.
    pub fn compute(&self, grid: &RadiusGrid) -> ScoreSurface {
        let n = grid.samples();
        let mut scores = vec![0u16; n * n];

        scores.par_chunks_mut(n).enumerate().for_each(|(row, out)| {
            let object = grid.object_at(row, 0);
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.score_cell(grid.beam_at(row, col), object);
            }
        });

        debug!(
            samples = n,
            penalty_factor = self.penalty_factor,
            "surface evaluated"
        );
        ScoreSurface { samples: n, scores }
    }
}

/// A computed score surface, flattened row-major. Row index = object
/// sample, column index = beam sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSurface {
    samples: usize,
    scores: Vec<u16>,
}

impl ScoreSurface {
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn scores(&self) -> &[u16] {
        &self.scores
    }

    #[inline(always)]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.samples + col
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> u16 {
        self.scores[self.idx(row, col)]
    }

    /// Summary statistics, with the peak cell resolved back to its radii.
    pub fn stats(&self, grid: &RadiusGrid) -> SurfaceStats {
        debug_assert_eq!(grid.samples(), self.samples);

        let (min, max) = match self.scores.iter().copied().minmax() {
            MinMaxResult::NoElements => (MIN_SCORE, MIN_SCORE),
            MinMaxResult::OneElement(s) => (s, s),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };

        let mean =
            self.scores.iter().map(|&s| f64::from(s)).sum::<f64>() / self.scores.len() as f64;

        let peak = self.scores.iter().position(|&s| s == max).unwrap_or(0);
        let (row, col) = (peak / self.samples, peak % self.samples);

        SurfaceStats {
            min,
            max,
            mean,
            peak_beam: grid.beam_at(row, col),
            peak_object: grid.object_at(row, col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStats {
    pub min: u16,
    pub max: u16,
    pub mean: f64,
    pub peak_beam: f64,
    pub peak_object: f64,
}
