//! Chaikin corner-cutting over the directed step graph.

use crate::graph::{StepEdge, StepGraph, StepVertex, VertexId};

impl StepGraph {
    /// One corner-cutting pass.
    ///
    /// Every directed edge `(v, w)` is replaced by the pair
    /// `q = 0.75*v + 0.25*w`, `r = 0.25*v + 0.75*w` joined by an edge.
    /// Each original vertex that ends up with exactly two replacement
    /// points — one incoming, one outgoing — gets a closing edge between
    /// them, rounding the cut corner. Chain endpoints (zero or one
    /// replacement) contribute nothing. The previous vertex and edge sets
    /// are discarded wholesale; replacement points carry no base
    /// coordinate, so the base index empties with them.
    pub fn round_edges(&mut self) {
        let mut vertices = Vec::with_capacity(self.edges.len() * 2);
        let mut edges = Vec::with_capacity(self.edges.len() * 2);
        let mut replaced_by: Vec<Vec<VertexId>> = vec![Vec::new(); self.vertices.len()];

        for edge in &self.edges {
            let v = self.vertices[edge.from].pos();
            let w = self.vertices[edge.to].pos();

            let q = vertices.len();
            vertices.push(StepVertex::replacement(v.blend(0.75, &w, 0.25)));
            let r = vertices.len();
            vertices.push(StepVertex::replacement(v.blend(0.25, &w, 0.75)));

            edges.push(StepEdge { from: q, to: r });
            replaced_by[edge.from].push(q);
            replaced_by[edge.to].push(r);
        }

        for list in &replaced_by {
            if let [q, r] = list.as_slice() {
                edges.push(StepEdge { from: *q, to: *r });
            }
        }

        self.vertices = vertices;
        self.edges = edges;
        self.index.clear();
    }

    /// Apply [`Self::round_edges`] `n` times; zero passes leave the graph
    /// untouched.
    pub fn round_edges_n_times(&mut self, n: u32) {
        for _ in 0..n {
            self.round_edges();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steps_common::Point2;

    /// An open three-vertex chain with a right-angle corner.
    fn corner_chain() -> StepGraph {
        let mut graph = StepGraph::new(5.0, 10.0);
        let a = graph.add_vertex(0.0, 0.0, 0.0, 0.0).unwrap();
        let b = graph.add_vertex(10.0, 0.0, 10.0, 0.0).unwrap();
        let c = graph.add_vertex(10.0, 10.0, 10.0, 10.0).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let mut graph = corner_chain();
        let vertices: Vec<Point2> = graph.vertices().iter().map(|v| v.pos()).collect();
        let edges = graph.edges().to_vec();

        graph.round_edges_n_times(0);

        let after: Vec<Point2> = graph.vertices().iter().map(|v| v.pos()).collect();
        assert_eq!(vertices, after);
        assert_eq!(edges, graph.edges());
    }

    #[test]
    fn test_one_pass_cuts_the_corner() {
        let mut graph = corner_chain();
        graph.round_edges();

        // Two edges -> four replacement points, two cut edges, one
        // closing edge at the middle vertex.
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let positions: Vec<Point2> = graph.vertices().iter().map(|v| v.pos()).collect();
        assert!(positions.contains(&Point2::new(2.5, 0.0)));
        assert!(positions.contains(&Point2::new(7.5, 0.0)));
        assert!(positions.contains(&Point2::new(10.0, 2.5)));
        assert!(positions.contains(&Point2::new(10.0, 7.5)));

        // Replacement points carry no base and no orientation.
        assert!(graph.vertices().iter().all(|v| v.base().is_none()));
        assert!(graph.vertices().iter().all(|v| v.orientation().is_none()));
    }

    #[test]
    fn test_incident_edge_counts_after_one_pass() {
        let mut graph = corner_chain();
        graph.round_edges();

        let mut incident = vec![0usize; graph.vertex_count()];
        for e in graph.edges() {
            incident[e.from] += 1;
            incident[e.to] += 1;
        }

        // Interior replacements have two incident edges, the two points
        // descending from the chain endpoints have one.
        let mut counts = incident.clone();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_closed_square_becomes_octagon() {
        let mut graph = StepGraph::new(5.0, 10.0);
        let mut ids = Vec::new();
        let corners = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        for (x, y) in corners {
            ids.push(graph.add_vertex(x, y, x, y).unwrap());
        }
        for i in 0..4 {
            graph.add_edge(ids[i], ids[(i + 1) % 4]).unwrap();
        }

        graph.round_edges();

        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 8);

        // Every vertex of a closed loop keeps exactly two incident edges.
        let mut incident = vec![0usize; graph.vertex_count()];
        for e in graph.edges() {
            incident[e.from] += 1;
            incident[e.to] += 1;
        }
        assert!(incident.iter().all(|&n| n == 2));
    }

    #[test]
    fn test_repeated_passes_stay_within_hull() {
        let mut graph = corner_chain();
        graph.round_edges_n_times(4);

        for v in graph.vertices() {
            let p = v.pos();
            assert!(p.x >= 0.0 && p.x <= 10.0);
            assert!(p.y >= 0.0 && p.y <= 10.0);
        }
    }

    #[test]
    fn test_isolated_vertices_vanish() {
        let mut graph = StepGraph::new(5.0, 10.0);
        graph.add_vertex(0.0, 0.0, 1.0, 0.0).unwrap();
        graph.round_edges();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
