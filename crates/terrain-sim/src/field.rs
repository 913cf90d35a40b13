//! Probe field initialisation and per-frame advancement.

use rand::Rng;
use steps_common::{Probe, SampleGrid, SceneConfig, SimulationSettings};
use tracing::debug;

/// Impulses weaker than this are snapped to zero instead of decaying
/// forever.
const IMPULSE_SNAP: f64 = 0.05;

/// The animated depth field.
///
/// Probes sit at fixed planar positions; only their depths move. Depth
/// advances by the steady drift velocity plus any pointer-induced
/// impulse, and reflects off the `[0, max_depth]` bounds.
#[derive(Debug, Clone)]
pub struct ProbeField {
    pub(crate) grid: SampleGrid,
    pub(crate) settings: SimulationSettings,
}

impl ProbeField {
    /// A field of `columns x rows` randomly seeded probes.
    pub fn new<R: Rng>(
        columns: usize,
        rows: usize,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Self {
        let settings = config.simulation.clone();
        let max_depth = settings.max_depth;
        let grid = SampleGrid::from_fn(columns, rows, settings.spacing, |_, _, x, y| {
            Probe::new(
                x,
                y,
                rng.gen::<f64>() * max_depth,
                rng.gen::<f64>() * 2.0 - 1.0,
            )
        });

        debug!(columns, rows, "initialised probe field");
        Self { grid, settings }
    }

    /// Size the field to cover a `width x height` pixel canvas.
    pub fn from_config<R: Rng>(
        width: u32,
        height: u32,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Self {
        let spacing = config.simulation.spacing;
        let columns = (width as f64 / spacing).ceil() as usize;
        let rows = (height as f64 / spacing).ceil() as usize;
        Self::new(columns, rows, config, rng)
    }

    /// Read-only view for the contour pipeline and debug overlays.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Advance the field by one frame.
    pub fn step(&mut self) {
        let drift_scale = self.settings.speed / self.settings.fps;
        let slow_down = self.settings.slow_down;
        let max_depth = self.settings.max_depth;

        for probe in self.grid.probes_mut() {
            probe.depth += probe.velocity * drift_scale + probe.impulse;

            if probe.impulse.abs() >= IMPULSE_SNAP {
                probe.impulse *= slow_down;
            } else {
                probe.impulse = 0.0;
            }

            // Reflect only components still pushing outward.
            if probe.depth < 0.0 {
                if probe.velocity < 0.0 {
                    probe.velocity = -probe.velocity;
                }
                if probe.impulse < 0.0 {
                    probe.impulse = -probe.impulse;
                }
            }
            if probe.depth > max_depth {
                if probe.velocity > 0.0 {
                    probe.velocity = -probe.velocity;
                }
                if probe.impulse > 0.0 {
                    probe.impulse = -probe.impulse;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn seeded_field(columns: usize, rows: usize) -> ProbeField {
        let mut rng = StdRng::seed_from_u64(7);
        ProbeField::new(columns, rows, &SceneConfig::default(), &mut rng)
    }

    #[test]
    fn test_initial_probes_within_ranges() {
        let field = seeded_field(10, 10);
        let max_depth = field.settings().max_depth;
        for probe in field.grid().probes() {
            assert!(probe.depth >= 0.0 && probe.depth < max_depth);
            assert!(probe.velocity >= -1.0 && probe.velocity < 1.0);
            assert_eq!(probe.impulse, 0.0);
        }
    }

    #[test]
    fn test_from_config_covers_the_canvas() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SceneConfig::default(); // spacing 64
        let field = ProbeField::from_config(1920, 1080, &config, &mut rng);
        assert_eq!(field.grid().columns(), 30);
        assert_eq!(field.grid().rows(), 17);
    }

    #[test]
    fn test_step_advances_depth_by_drift_and_impulse() {
        let mut field = seeded_field(2, 2);
        {
            let probe = field.grid.get_mut(0, 0).unwrap();
            probe.depth = 50.0;
            probe.velocity = 0.6;
            probe.impulse = 2.0;
        }

        field.step();

        let drift = 0.6 * 10.0 / 60.0;
        let probe = field.grid().get(0, 0).unwrap();
        assert!((probe.depth - (50.0 + drift + 2.0)).abs() < 1e-12);
        // Impulse decays by the slow-down factor.
        assert!((probe.impulse - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weak_impulse_snaps_to_zero() {
        let mut field = seeded_field(1, 1);
        {
            let probe = field.grid.get_mut(0, 0).unwrap();
            probe.depth = 50.0;
            probe.velocity = 0.0;
            probe.impulse = 0.04;
        }

        field.step();
        assert_eq!(field.grid().get(0, 0).unwrap().impulse, 0.0);
    }

    #[test]
    fn test_bounce_at_zero_reflects_inward() {
        let mut field = seeded_field(1, 1);
        {
            let probe = field.grid.get_mut(0, 0).unwrap();
            probe.depth = 0.1;
            probe.velocity = -0.9;
            probe.impulse = -2.0;
        }

        field.step();
        let probe = field.grid().get(0, 0).unwrap();
        assert!(probe.depth < 0.0);
        assert!(probe.velocity > 0.0);
        assert!(probe.impulse > 0.0);
    }

    #[test]
    fn test_bounce_at_max_depth_reflects_inward() {
        let mut field = seeded_field(1, 1);
        {
            let probe = field.grid.get_mut(0, 0).unwrap();
            probe.depth = 149.9;
            probe.velocity = 0.9;
            probe.impulse = 2.0;
        }

        field.step();
        let probe = field.grid().get(0, 0).unwrap();
        assert!(probe.depth > 150.0);
        assert!(probe.velocity < 0.0);
        assert!(probe.impulse < 0.0);
    }

    #[test]
    fn test_depth_stays_bounded_over_many_frames() {
        let mut field = seeded_field(6, 6);
        let max_depth = field.settings().max_depth;
        for _ in 0..2000 {
            field.step();
        }
        // One frame of overshoot is possible; the band is max_depth plus
        // the largest per-frame drift.
        let slack = 10.0 / 60.0;
        for probe in field.grid().probes() {
            assert!(probe.depth > -slack - 1e-9);
            assert!(probe.depth < max_depth + slack + 1e-9);
        }
    }
}
