//! Per-level step graph: crossing vertices and their reconstructed
//! connectivity.

use crate::{ContourError, ContourResult};
use std::collections::HashMap;
use steps_common::Point2;

pub type VertexId = usize;
pub type EdgeId = usize;

/// Fraction of the grid spacing used as the base-coordinate tolerance.
///
/// Calibrated so bases from the same grid cell (differing only by
/// floating-point noise) match while bases one cell away cannot.
const BASE_TOLERANCE_FACTOR: f64 = 1e-3;

/// Compass orientation of a crossing vertex relative to its base probe,
/// in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Orientation {
    /// Derive the orientation of position `pos` relative to `base`.
    ///
    /// West when the base lies right of the position, East when left;
    /// otherwise North when the base lies below, else South. The
    /// degenerate `base == pos` case therefore lands on South.
    pub fn of(base: Point2, pos: Point2) -> Orientation {
        if base.x > pos.x {
            Orientation::West
        } else if base.x < pos.x {
            Orientation::East
        } else if base.y > pos.y {
            Orientation::North
        } else {
            Orientation::South
        }
    }

    fn from_index(index: u8) -> Orientation {
        match index % 4 {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Rotate by `steps` quarter turns (positive = clockwise through
    /// N -> E -> S -> W), normalised modulo 4.
    pub fn rotated(self, steps: i8) -> Orientation {
        let mut index = self as i8 + steps;
        while index < 0 {
            index += 4;
        }
        Orientation::from_index(index as u8)
    }

    /// Outward unit step away from the base, toward the crossing.
    pub fn direction(self) -> (f64, f64) {
        match self {
            Orientation::North => (0.0, -1.0),
            Orientation::East => (1.0, 0.0),
            Orientation::South => (0.0, 1.0),
            Orientation::West => (-1.0, 0.0),
        }
    }

    /// Unit step 90 degrees clockwise from `direction`.
    pub fn side(self) -> (f64, f64) {
        match self {
            Orientation::North => (1.0, 0.0),
            Orientation::East => (0.0, 1.0),
            Orientation::South => (-1.0, 0.0),
            Orientation::West => (0.0, -1.0),
        }
    }
}

/// One vertex of a step graph.
///
/// Crossing vertices carry the base coordinate of the probe pair that
/// produced them; replacement vertices generated by smoothing carry none
/// and never participate in base-coordinate lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepVertex {
    pos: Point2,
    base: Option<Point2>,
}

impl StepVertex {
    pub(crate) fn crossing(base: Point2, pos: Point2) -> Self {
        Self {
            pos,
            base: Some(base),
        }
    }

    pub(crate) fn replacement(pos: Point2) -> Self {
        Self { pos, base: None }
    }

    pub fn pos(&self) -> Point2 {
        self.pos
    }

    pub fn base(&self) -> Option<Point2> {
        self.base
    }

    /// Derived orientation; `None` for smoothing replacement vertices.
    pub fn orientation(&self) -> Option<Orientation> {
        self.base.map(|base| Orientation::of(base, self.pos))
    }
}

/// A directed edge between two vertices of the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEdge {
    pub from: VertexId,
    pub to: VertexId,
}

/// Neighbour candidates probed by [`StepGraph::calculate_edges`], in
/// priority order: `(direction scale, side scale, orientation rotation)`.
///
/// The offsets are expressed in the vertex's local frame and scaled by one
/// grid spacing. The first three entries cover shared-base corner turns,
/// straight continuations, and convex (hill) turns; the last connects the
/// crossing pair of a saddle cell, which none of the first three can
/// reach.
const NEIGHBOUR_CANDIDATES: [(f64, f64, i8); 4] = [
    (0.0, 0.0, -1),
    (0.0, -1.0, 0),
    (1.0, -1.0, 1),
    (1.0, 1.0, -1),
];

/// The per-level contour graph.
///
/// Rebuilt from scratch every frame: crossing vertices are inserted as the
/// field sweep finds them, [`Self::calculate_edges`] reconstructs the
/// directed connectivity, and smoothing replaces both sets wholesale.
#[derive(Debug, Clone)]
pub struct StepGraph {
    level: f64,
    spacing: f64,
    pub(crate) vertices: Vec<StepVertex>,
    pub(crate) edges: Vec<StepEdge>,
    pub(crate) index: HashMap<(i64, i64, u8), VertexId>,
}

impl StepGraph {
    /// An empty graph for the given threshold level and grid spacing.
    pub fn new(level: f64, spacing: f64) -> Self {
        Self {
            level,
            spacing,
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The threshold depth this graph contours.
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn vertices(&self) -> &[StepVertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[StepEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge endpoint positions, for stroking.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.vertices[e.from].pos(), self.vertices[e.to].pos()))
    }

    /// Default tolerance for base-coordinate matching.
    pub fn base_tolerance(&self) -> f64 {
        self.spacing * BASE_TOLERANCE_FACTOR
    }

    fn key(&self, x: f64, y: f64, orientation: Orientation) -> (i64, i64, u8) {
        let quantum = self.base_tolerance();
        (
            (x / quantum).round() as i64,
            (y / quantum).round() as i64,
            orientation.index(),
        )
    }

    /// Insert a crossing vertex.
    ///
    /// All four coordinates must be finite; anything else is a programmer
    /// error upstream and is rejected outright rather than allowed to
    /// corrupt adjacency lookups.
    pub fn add_vertex(
        &mut self,
        base_x: f64,
        base_y: f64,
        x: f64,
        y: f64,
    ) -> ContourResult<VertexId> {
        if !(base_x.is_finite() && base_y.is_finite() && x.is_finite() && y.is_finite()) {
            return Err(ContourError::NonFiniteCoordinate {
                base_x,
                base_y,
                x,
                y,
            });
        }

        let base = Point2::new(base_x, base_y);
        let pos = Point2::new(x, y);
        let id = self.vertices.len();
        self.vertices.push(StepVertex::crossing(base, pos));

        // First occurrence wins, matching the scan order of lookups.
        let key = self.key(base_x, base_y, Orientation::of(base, pos));
        self.index.entry(key).or_insert(id);

        Ok(id)
    }

    /// Insert a directed edge between two existing vertices.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> ContourResult<EdgeId> {
        let len = self.vertices.len();
        for id in [from, to] {
            if id >= len {
                return Err(ContourError::InvalidVertexRef { id, len });
            }
        }
        let id = self.edges.len();
        self.edges.push(StepEdge { from, to });
        Ok(id)
    }

    /// All crossing vertices whose base coordinate matches `(x, y)` within
    /// `tolerance` on both axes (strict inequality).
    pub fn find_vertices(&self, x: f64, y: f64, tolerance: f64) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| {
                v.base
                    .map(|b| (b.x - x).abs() < tolerance && (b.y - y).abs() < tolerance)
                    .unwrap_or(false)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// The first vertex whose base matches `(x, y)` and whose derived
    /// orientation equals `orientation`.
    ///
    /// Lookup goes through the quantised base index, so the result is
    /// deterministic and independent of insertion order beyond
    /// first-occurrence-wins.
    pub fn find_vertex(&self, x: f64, y: f64, orientation: Orientation) -> Option<VertexId> {
        self.index.get(&self.key(x, y, orientation)).copied()
    }

    /// Edges whose source endpoint is `v`.
    pub fn directed_neighbours(&self, v: VertexId) -> impl Iterator<Item = &StepEdge> {
        self.edges.iter().filter(move |e| e.from == v)
    }

    /// Reconstruct the directed connectivity between crossing vertices.
    ///
    /// For every vertex the candidate neighbour cells are probed in the
    /// fixed [`NEIGHBOUR_CANDIDATES`] priority order; the first that
    /// resolves becomes the single outgoing neighbour. A vertex with no
    /// resolving candidate simply gets no outgoing edge — the expected
    /// outcome at chain endpoints and the field boundary.
    pub fn calculate_edges(&mut self) {
        let mut edges = Vec::new();

        for (id, vertex) in self.vertices.iter().enumerate() {
            let (base, orientation) = match (vertex.base, vertex.orientation()) {
                (Some(base), Some(orientation)) => (base, orientation),
                _ => continue,
            };

            let (dx, dy) = orientation.direction();
            let (sx, sy) = orientation.side();

            for &(d, s, rot) in &NEIGHBOUR_CANDIDATES {
                let x = base.x + (d * dx + s * sx) * self.spacing;
                let y = base.y + (d * dy + s * sy) * self.spacing;
                if let Some(neighbour) = self.find_vertex(x, y, orientation.rotated(rot)) {
                    edges.push(StepEdge {
                        from: id,
                        to: neighbour,
                    });
                    break;
                }
            }
        }

        self.edges = edges;
    }

    /// Drop all vertices, edges, and the base index.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.index.clear();
    }
}
