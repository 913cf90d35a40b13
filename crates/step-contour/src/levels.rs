//! The fixed list of iso-depth thresholds to contour.

use crate::{ContourError, ContourResult};

/// An ordered set of strictly-decreasing, finite depth thresholds.
///
/// Level `0` is the deepest threshold; later levels are strictly
/// shallower. The set is fixed for the lifetime of the pipeline while the
/// per-level graphs are rebuilt every frame.
#[derive(Debug, Clone)]
pub struct LevelSet {
    thresholds: Vec<f64>,
}

impl LevelSet {
    /// Uniformly spaced thresholds descending from `max_depth`.
    ///
    /// `thresholds[0] = max_depth`, each following level one
    /// `max_depth / step_count` step shallower. A zero `step_count`
    /// yields an empty set (and, downstream, no contours).
    pub fn descending(max_depth: f64, step_count: usize) -> Self {
        let mut thresholds = Vec::with_capacity(step_count);
        if step_count > 0 {
            let dist = max_depth / step_count as f64;
            thresholds.push(max_depth);
            for i in 1..step_count {
                thresholds.push(thresholds[i - 1] - dist);
            }
        }
        Self { thresholds }
    }

    /// Build from explicit thresholds, validating finiteness and strict
    /// descent.
    pub fn from_thresholds(thresholds: Vec<f64>) -> ContourResult<Self> {
        for pair in thresholds.windows(2) {
            if pair[1] >= pair[0] {
                return Err(ContourError::InvalidLevels(format!(
                    "thresholds must be strictly decreasing, got {} then {}",
                    pair[0], pair[1]
                )));
            }
        }
        if let Some(bad) = thresholds.iter().find(|t| !t.is_finite()) {
            return Err(ContourError::InvalidLevels(format!(
                "thresholds must be finite, got {}",
                bad
            )));
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn get(&self, level: usize) -> Option<f64> {
        self.thresholds.get(level).copied()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}
