//! RGBA canvas rendering of step graphs.

use crate::{RenderError, RenderResult};
use step_contour::StepGraph;
use steps_common::{SampleGrid, SceneConfig};
use tiny_skia::{
    Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};
use tracing::debug;

/// Dot radius for the probe and vertex debug overlays.
const OVERLAY_DOT_RADIUS: f32 = 2.0;

/// Per-level dot colours for the vertex overlay, cycled by level index.
const OVERLAY_PALETTE: [(u8, u8, u8); 6] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (0, 255, 255),
    (255, 0, 255),
];

/// Renders extracted step graphs onto an RGBA canvas.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    width: u32,
    height: u32,
    background: (u8, u8, u8, u8),
    border: (u8, u8, u8, u8),
    border_thickness: f32,
    max_depth: f64,
}

impl FrameRenderer {
    pub fn new(width: u32, height: u32, config: &SceneConfig) -> Self {
        Self {
            width,
            height,
            background: config.style.colour.to_rgba(),
            border: config.style.border_colour.to_rgba(),
            border_thickness: config.style.border_thickness as f32,
            max_depth: config.simulation.max_depth,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render one frame: background fill plus every graph's step edges.
    ///
    /// Returns the RGBA pixel buffer (4 bytes per pixel).
    pub fn render(&self, graphs: &[StepGraph]) -> RenderResult<Vec<u8>> {
        let mut pixmap = self.new_pixmap()?;
        self.stroke_steps(&mut pixmap, graphs);
        Ok(pixmap.data().to_vec())
    }

    /// Render one frame with the probe and vertex diagnostic overlays.
    pub fn render_debug(
        &self,
        graphs: &[StepGraph],
        grid: &SampleGrid,
    ) -> RenderResult<Vec<u8>> {
        let mut pixmap = self.new_pixmap()?;
        self.stroke_steps(&mut pixmap, graphs);
        self.draw_probes(&mut pixmap, grid);
        self.draw_step_vertices(&mut pixmap, graphs);
        Ok(pixmap.data().to_vec())
    }

    fn new_pixmap(&self) -> RenderResult<Pixmap> {
        let mut pixmap =
            Pixmap::new(self.width, self.height).ok_or(RenderError::CanvasCreation {
                width: self.width,
                height: self.height,
            })?;

        let (r, g, b, a) = self.background;
        pixmap.fill(Color::from_rgba8(r, g, b, a));
        Ok(pixmap)
    }

    fn stroke_steps(&self, pixmap: &mut Pixmap, graphs: &[StepGraph]) {
        let mut paint = Paint::default();
        let (r, g, b, a) = self.border;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let mut stroke = Stroke::default();
        stroke.width = self.border_thickness;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        let mut segments = 0usize;
        for graph in graphs {
            let mut pb = PathBuilder::new();
            for (from, to) in graph.segments() {
                pb.move_to(from.x as f32, from.y as f32);
                pb.line_to(to.x as f32, to.y as f32);
                segments += 1;
            }

            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }

        debug!(graphs = graphs.len(), segments, "stroked step edges");
    }

    /// Overlay: one dot per probe, fading out with depth.
    fn draw_probes(&self, pixmap: &mut Pixmap, grid: &SampleGrid) {
        let (r, g, b, _) = self.border;

        for probe in grid.probes() {
            let depth_perc = (1.0 - probe.depth / self.max_depth).clamp(0.0, 1.0);
            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, (depth_perc * 255.0) as u8);
            paint.anti_alias = true;

            if let Some(path) = PathBuilder::from_circle(
                probe.x as f32,
                probe.y as f32,
                OVERLAY_DOT_RADIUS,
            ) {
                pixmap.fill_path(
                    &path,
                    &paint,
                    tiny_skia::FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
    }

    /// Overlay: one dot per raw step vertex, coloured by level.
    fn draw_step_vertices(&self, pixmap: &mut Pixmap, graphs: &[StepGraph]) {
        for (level, graph) in graphs.iter().enumerate() {
            let (r, g, b) = OVERLAY_PALETTE[level % OVERLAY_PALETTE.len()];
            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, 255);
            paint.anti_alias = true;

            for vertex in graph.vertices() {
                let pos = vertex.pos();
                if let Some(path) =
                    PathBuilder::from_circle(pos.x as f32, pos.y as f32, OVERLAY_DOT_RADIUS)
                {
                    pixmap.fill_path(
                        &path,
                        &paint,
                        tiny_skia::FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }
}
