//! Adjacency graph over quantized endpoints.

use std::collections::HashMap;

use lathe_math::Point3;

use crate::{Edge, PointKey};

/// Undirected graph of edge endpoints.
///
/// Vertices live in an arena indexed by `usize` in first-seen order.
/// Each vertex keeps the first point that produced its key and a
/// duplicate-free neighbor list ordered by first appearance.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    index: HashMap<PointKey, usize>,
    points: Vec<Point3>,
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a set of edges.
    pub fn build(edges: &[Edge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        tracing::debug!(
            edges = edges.len(),
            vertices = graph.len(),
            "built adjacency graph"
        );
        graph
    }

    /// Insert one edge, linking both endpoints.
    ///
    /// An edge whose endpoints share a key only registers the point.
    pub fn add_edge(&mut self, edge: &Edge) {
        let a = self.intern(&edge.start);
        let b = self.intern(&edge.end);
        if a == b {
            return;
        }
        link(&mut self.neighbors[a], b);
        link(&mut self.neighbors[b], a);
    }

    fn intern(&mut self, p: &Point3) -> usize {
        let key = PointKey::from_point(p);
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.points.len();
        self.index.insert(key, i);
        self.points.push(*p);
        self.neighbors.push(Vec::new());
        i
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Representative point of vertex `v`.
    pub fn point(&self, v: usize) -> Point3 {
        self.points[v]
    }

    /// Neighbors of vertex `v` in first-seen order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    /// Number of distinct neighbors of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }
}

fn link(list: &mut Vec<usize>, v: usize) {
    if !list.contains(&v) {
        list.push(v);
    }
}
