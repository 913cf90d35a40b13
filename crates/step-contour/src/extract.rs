//! The per-frame extraction pipeline.

use crate::{crossings_between, ContourResult, Crossing, LevelSet, StepGraph};
use rayon::prelude::*;
use steps_common::{SampleGrid, SceneConfig};
use tracing::debug;

/// Frame-level contour extraction context.
///
/// Owns the fixed level set and pipeline parameters; all per-frame state
/// lives in the returned graphs, so one extractor can serve the whole
/// session while the field mutates underneath it between frames.
#[derive(Debug, Clone)]
pub struct ContourExtractor {
    levels: LevelSet,
    spacing: f64,
    rounding_passes: u32,
}

impl ContourExtractor {
    pub fn new(levels: LevelSet, spacing: f64, rounding_passes: u32) -> Self {
        Self {
            levels,
            spacing,
            rounding_passes,
        }
    }

    /// Derive the extractor from a scene configuration.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            LevelSet::descending(config.simulation.max_depth, config.contour.step_count),
            config.simulation.spacing,
            config.contour.rounding_passes,
        )
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    /// Run the full pipeline over one frame of the field.
    ///
    /// Sweeps every grid edge once, bucketing crossings per level, then
    /// builds, connects, and smooths each level's graph independently.
    /// The graphs are returned as one batch; callers never observe a
    /// partially built frame.
    pub fn extract(&self, grid: &SampleGrid) -> ContourResult<Vec<StepGraph>> {
        let mut buckets: Vec<Vec<Crossing>> = vec![Vec::new(); self.levels.len()];

        grid.for_each_grid_edge(|a, b| {
            crossings_between(a, b, &self.levels, |c| buckets[c.level].push(c));
        });

        let rounding_passes = self.rounding_passes;
        let graphs: Vec<StepGraph> = buckets
            .into_par_iter()
            .enumerate()
            .map(|(level, crossings)| {
                let threshold = self.levels.thresholds()[level];
                let mut graph = StepGraph::new(threshold, self.spacing);
                for c in &crossings {
                    graph.add_vertex(c.base_x, c.base_y, c.x, c.y)?;
                }
                graph.calculate_edges();
                graph.round_edges_n_times(rounding_passes);
                Ok(graph)
            })
            .collect::<ContourResult<_>>()?;

        debug!(
            levels = graphs.len(),
            vertices = graphs.iter().map(StepGraph::vertex_count).sum::<usize>(),
            edges = graphs.iter().map(StepGraph::edge_count).sum::<usize>(),
            "extracted step graphs"
        );

        Ok(graphs)
    }
}
