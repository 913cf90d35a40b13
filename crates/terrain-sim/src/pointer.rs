//! Pointer-drag perturbation of the probe field.

use crate::ProbeField;

/// One pointer movement event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    /// Pointer position after the movement.
    pub x: f64,
    pub y: f64,
    /// Movement delta since the previous event.
    pub dx: f64,
    pub dy: f64,
}

impl PointerDrag {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// Magnitude of the pointer movement.
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl ProbeField {
    /// Kick probes near the pointer toward the surface.
    ///
    /// Distance to the pointer is measured in 3D, with the probe's depth
    /// as the z offset, so deep probes feel less of a nearby drag.
    /// Falloff is quadratic in the normalised distance. A kick only lands
    /// while the probe's current impulse is weaker than the kick itself,
    /// which keeps rapid pointer movement from winding impulses up
    /// without bound.
    pub fn apply_drag(&mut self, drag: &PointerDrag) {
        let radius = self.settings.drag_radius;
        if radius <= 0.0 {
            return;
        }

        let intensity = self.settings.drag_intensity;
        let magnitude = drag.magnitude();

        for probe in self.grid.probes_mut() {
            let dx = probe.x - drag.x;
            let dy = probe.y - drag.y;
            let dist = (dx * dx + dy * dy + probe.depth * probe.depth).sqrt();
            if dist >= radius {
                continue;
            }

            let rad_perc = 1.0 - dist / radius;
            let kick = -magnitude * intensity * rad_perc * rad_perc;
            if probe.impulse.abs() < kick.abs() {
                probe.impulse += kick;
            }
        }
    }
}
